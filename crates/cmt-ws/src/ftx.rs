//! FTX subscription commands, one per channel and market.

use std::collections::HashMap;

use cmt_core::{CmtError, Exchange, MessageType};

use crate::command_util::{for_each_pair, unsupported, verb};

pub const MSG_TYPES: &[MessageType] = &[MessageType::Trade, MessageType::L2Event, MessageType::BBO];

fn msg_type_to_channel(msg_type: MessageType) -> Result<&'static str, CmtError> {
    match msg_type {
        MessageType::Trade => Ok("trades"),
        MessageType::L2Event => Ok("orderbook"),
        MessageType::BBO => Ok("ticker"),
        MessageType::Other
        | MessageType::L2Snapshot
        | MessageType::L2TopK
        | MessageType::L3Event
        | MessageType::L3Snapshot
        | MessageType::Ticker
        | MessageType::Candlestick
        | MessageType::FundingRate
        | MessageType::OpenInterest => Err(unsupported(Exchange::Ftx, msg_type)),
    }
}

fn channel_symbol_to_command(channel: &str, symbol: &str, subscribe: bool) -> String {
    format!(r#"{{"op":"{}","channel":"{channel}","market":"{symbol}"}}"#, verb(subscribe))
}

pub fn get_ws_commands(
    msg_types: &[MessageType],
    symbols: &[String],
    subscribe: bool,
    _configs: Option<&HashMap<String, String>>,
) -> Result<Vec<String>, CmtError> {
    for_each_pair(msg_types, symbols, |msg_type, symbol| {
        Ok(channel_symbol_to_command(msg_type_to_channel(msg_type)?, symbol, subscribe))
    })
}
