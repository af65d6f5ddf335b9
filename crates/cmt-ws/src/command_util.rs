//! Helpers shared by the per-exchange command builders.

use std::collections::HashMap;

use cmt_core::{CmtError, Exchange, MessageType};

/// Lowercase subscribe/unsubscribe verb used by most exchanges.
#[inline]
pub fn verb(subscribe: bool) -> &'static str {
    if subscribe { "subscribe" } else { "unsubscribe" }
}

/// The candlestick `interval` entry of `configs`.
pub fn interval(configs: Option<&HashMap<String, String>>) -> Result<&str, CmtError> {
    configs
        .and_then(|c| c.get("interval"))
        .map(String::as_str)
        .ok_or_else(|| CmtError::MissingConfig("interval".into()))
}

pub fn unsupported(exchange: Exchange, msg_type: MessageType) -> CmtError {
    CmtError::UnsupportedMessageType { exchange: exchange.to_string(), msg_type: msg_type.to_string() }
}

/// Compact JSON array of strings, e.g. `["a","b"]`.
pub fn json_array(items: &[String]) -> String {
    serde_json::Value::from(items.to_vec()).to_string()
}

/// Apply `f` to every `(msg_type, symbol)` pair, message type major.
pub fn for_each_pair<T, F>(msg_types: &[MessageType], symbols: &[String], mut f: F) -> Result<Vec<T>, CmtError>
where
    F: FnMut(MessageType, &str) -> Result<T, CmtError>,
{
    let mut out = Vec::with_capacity(msg_types.len() * symbols.len());
    for &msg_type in msg_types {
        for symbol in symbols {
            out.push(f(msg_type, symbol)?);
        }
    }
    Ok(out)
}
