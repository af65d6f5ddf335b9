//! BitMEX subscription commands.

use std::collections::HashMap;

use cmt_core::{CmtError, Exchange, MessageType};

use crate::command_util::{for_each_pair, interval, json_array, unsupported, verb};

pub const MSG_TYPES: &[MessageType] = &[
    MessageType::Trade,
    MessageType::L2Event,
    MessageType::L2TopK,
    MessageType::BBO,
    MessageType::Candlestick,
];

fn msg_type_to_channel(msg_type: MessageType) -> Result<&'static str, CmtError> {
    match msg_type {
        MessageType::Trade => Ok("trade"),
        MessageType::L2Event => Ok("orderBookL2_25"),
        MessageType::L2TopK => Ok("orderBook10"),
        MessageType::BBO => Ok("quote"),
        MessageType::Candlestick => Ok("tradeBin"),
        MessageType::Other
        | MessageType::L2Snapshot
        | MessageType::L3Event
        | MessageType::L3Snapshot
        | MessageType::Ticker
        | MessageType::FundingRate
        | MessageType::OpenInterest => Err(unsupported(Exchange::Bitmex, msg_type)),
    }
}

fn channel_symbol_to_topic(
    channel: &str,
    symbol: &str,
    configs: Option<&HashMap<String, String>>,
) -> Result<String, CmtError> {
    if channel == "tradeBin" {
        Ok(format!("tradeBin{}:{symbol}", interval(configs)?))
    } else {
        Ok(format!("{channel}:{symbol}"))
    }
}

fn topics_to_command(topics: &[String], subscribe: bool) -> String {
    format!(r#"{{"op":"{}", "args":{}}}"#, verb(subscribe), json_array(topics))
}

pub fn get_ws_commands(
    msg_types: &[MessageType],
    symbols: &[String],
    subscribe: bool,
    configs: Option<&HashMap<String, String>>,
) -> Result<Vec<String>, CmtError> {
    let topics = for_each_pair(msg_types, symbols, |msg_type, symbol| {
        channel_symbol_to_topic(msg_type_to_channel(msg_type)?, symbol, configs)
    })?;
    Ok(vec![topics_to_command(&topics, subscribe)])
}
