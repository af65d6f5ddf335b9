//! Bitfinex subscription commands, one per channel and symbol.
//!
//! BBO and level3 events both ride the raw `R0` book channel, with length 1
//! and 25 respectively.

use std::collections::HashMap;

use cmt_core::{CmtError, Exchange, MessageType};

use crate::command_util::{for_each_pair, interval, unsupported, verb};

pub const MSG_TYPES: &[MessageType] = &[
    MessageType::Trade,
    MessageType::L2Event,
    MessageType::L3Event,
    MessageType::BBO,
    MessageType::Ticker,
    MessageType::Candlestick,
];

fn msg_type_symbol_to_command(
    msg_type: MessageType,
    symbol: &str,
    subscribe: bool,
    configs: Option<&HashMap<String, String>>,
) -> Result<String, CmtError> {
    let event = verb(subscribe);
    match msg_type {
        MessageType::Trade => Ok(format!(r#"{{"event":"{event}", "channel":"trades", "symbol":"{symbol}"}}"#)),
        MessageType::Ticker => Ok(format!(r#"{{"event":"{event}", "channel":"ticker", "symbol":"{symbol}"}}"#)),
        MessageType::L2Event => Ok(format!(
            r#"{{"event":"{event}", "channel":"book", "symbol":"{symbol}", "prec":"P0", "frec":"F0", "len":25}}"#
        )),
        MessageType::L3Event | MessageType::BBO => {
            let len = if msg_type == MessageType::L3Event { 25 } else { 1 };
            Ok(format!(r#"{{"event":"{event}", "channel":"book", "symbol": "{symbol}", "prec":"R0", "len": {len}}}"#))
        }
        MessageType::Candlestick => Ok(format!(
            r#"{{"event":"{event}", "channel":"candles", "key":"trade:{}:{symbol}"}}"#,
            interval(configs)?
        )),
        MessageType::Other
        | MessageType::L2Snapshot
        | MessageType::L2TopK
        | MessageType::L3Snapshot
        | MessageType::FundingRate
        | MessageType::OpenInterest => Err(unsupported(Exchange::Bitfinex, msg_type)),
    }
}

pub fn get_ws_commands(
    msg_types: &[MessageType],
    symbols: &[String],
    subscribe: bool,
    configs: Option<&HashMap<String, String>>,
) -> Result<Vec<String>, CmtError> {
    for_each_pair(msg_types, symbols, |msg_type, symbol| {
        msg_type_symbol_to_command(msg_type, symbol, subscribe, configs)
    })
}
