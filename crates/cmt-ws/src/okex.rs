//! OKEx (legacy v3) subscription commands.
//!
//! Topics are `<market>/<channel>:<instrument_id>`, where the market is
//! inferred from the instrument id:
//!
//! - `BTC-USDT-SWAP` — swap
//! - `BTC-USDT` — spot
//! - `BTC-USD-210625` — futures
//! - `BTC-USD-210625-40000-C` — option

use std::collections::HashMap;

use cmt_core::{CmtError, Exchange, MessageType};

use crate::command_util::{for_each_pair, interval, json_array, unsupported, verb};

pub const MSG_TYPES: &[MessageType] = &[
    MessageType::Trade,
    MessageType::L2Event,
    MessageType::L2TopK,
    MessageType::BBO,
    MessageType::Ticker,
    MessageType::Candlestick,
];

fn symbol_to_market(symbol: &str) -> &'static str {
    if symbol.ends_with("-SWAP") {
        return "swap";
    }
    match symbol.matches('-').count() {
        1 => "spot",
        2 => "futures",
        _ => "option",
    }
}

fn msg_type_to_channel(msg_type: MessageType) -> Result<&'static str, CmtError> {
    match msg_type {
        MessageType::Trade => Ok("trade"),
        MessageType::L2Event => Ok("depth_l2_tbt"),
        MessageType::L2TopK => Ok("depth5"),
        // v3 has no dedicated BBO channel; the ticker carries best bid/ask.
        MessageType::BBO | MessageType::Ticker => Ok("ticker"),
        MessageType::Candlestick => Ok("candle"),
        MessageType::Other
        | MessageType::L2Snapshot
        | MessageType::L3Event
        | MessageType::L3Snapshot
        | MessageType::FundingRate
        | MessageType::OpenInterest => Err(unsupported(Exchange::Okex, msg_type)),
    }
}

fn channel_symbol_to_topic(
    channel: &str,
    symbol: &str,
    configs: Option<&HashMap<String, String>>,
) -> Result<String, CmtError> {
    let market = symbol_to_market(symbol);
    if channel == "candle" {
        Ok(format!("{market}/candle{}s:{symbol}", interval(configs)?))
    } else {
        Ok(format!("{market}/{channel}:{symbol}"))
    }
}

fn topics_to_command(topics: &[String], subscribe: bool) -> String {
    format!(r#"{{"op":"{}","args":{}}}"#, verb(subscribe), json_array(topics))
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
