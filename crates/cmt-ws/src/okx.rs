//! OKX (v5 public channel) subscription commands.
//!
//! Each arg is a `{"channel", "instId"}` object; keys are emitted in sorted
//! order.

use std::collections::HashMap;

use cmt_core::{CmtError, Exchange, MessageType};
use serde_json::{Value, json};

use crate::command_util::{for_each_pair, interval, unsupported, verb};

pub const MSG_TYPES: &[MessageType] = &[
    MessageType::Trade,
    MessageType::L2Event,
    MessageType::L2TopK,
    MessageType::Ticker,
    MessageType::Candlestick,
];

fn msg_type_to_channel(
    msg_type: MessageType,
    configs: Option<&HashMap<String, String>>,
) -> Result<String, CmtError> {
    match msg_type {
        MessageType::Trade => Ok("trades".into()),
        MessageType::L2Event => Ok("books-l2-tbt".into()),
        MessageType::L2TopK => Ok("books5".into()),
        MessageType::Ticker => Ok("tickers".into()),
        MessageType::Candlestick => Ok(format!("candle{}", interval(configs)?)),
        MessageType::Other
        | MessageType::L2Snapshot
        | MessageType::L3Event
        | MessageType::L3Snapshot
        | MessageType::BBO
        | MessageType::FundingRate
        | MessageType::OpenInterest => Err(unsupported(Exchange::Okx, msg_type)),
    }
}

fn args_to_command(args: Vec<Value>, subscribe: bool) -> String {
    format!(r#"{{"op":"{}","args":{}}}"#, verb(subscribe), Value::Array(args))
}

pub fn get_ws_commands(
    msg_types: &[MessageType],
    symbols: &[String],
    subscribe: bool,
    configs: Option<&HashMap<String, String>>,
) -> Result<Vec<String>, CmtError> {
    let args = for_each_pair(msg_types, symbols, |msg_type, symbol| {
        let channel = msg_type_to_channel(msg_type, configs)?;
        Ok(json!({ "channel": channel, "instId": symbol }))
    })?;
    Ok(vec![args_to_command(args, subscribe)])
}
