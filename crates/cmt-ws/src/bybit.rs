//! Bybit subscription commands.
//!
//! USDT-margined symbols use the `candle` kline topic, inverse ones use
//! `klineV2`.

use std::collections::HashMap;

use cmt_core::{CmtError, Exchange, MessageType};

use crate::command_util::{for_each_pair, interval, json_array, unsupported, verb};

pub const MSG_TYPES: &[MessageType] =
    &[MessageType::Trade, MessageType::L2Event, MessageType::Ticker, MessageType::Candlestick];

fn msg_type_to_channel(msg_type: MessageType) -> Result<&'static str, CmtError> {
    match msg_type {
        MessageType::Trade => Ok("trade"),
        MessageType::L2Event => Ok("orderBookL2_25"),
        MessageType::Ticker => Ok("instrument_info.100ms"),
        MessageType::Candlestick => Ok("klineV2"),
        MessageType::Other
        | MessageType::L2Snapshot
        | MessageType::L2TopK
        | MessageType::L3Event
        | MessageType::L3Snapshot
        | MessageType::BBO
        | MessageType::FundingRate
        | MessageType::OpenInterest => Err(unsupported(Exchange::Bybit, msg_type)),
    }
}

fn channel_symbol_to_topic(
    channel: &str,
    symbol: &str,
    configs: Option<&HashMap<String, String>>,
) -> Result<String, CmtError> {
    if channel == "klineV2" {
        let interval = interval(configs)?;
        if symbol.ends_with("USDT") {
            Ok(format!("candle.{interval}.{symbol}"))
        } else {
            Ok(format!("klineV2.{interval}.{symbol}"))
        }
    } else {
        Ok(format!("{channel}.{symbol}"))
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
