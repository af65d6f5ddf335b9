//! Binance subscription commands.
//!
//! All topics go into one `SUBSCRIBE` request. Spot rejects requests without
//! an unsigned integer `id`, so one is always sent.

use std::collections::HashMap;

use cmt_core::{CmtError, Exchange, MessageType};

use crate::command_util::{for_each_pair, interval, json_array, unsupported};

pub const MSG_TYPES: &[MessageType] = &[
    MessageType::Trade,
    MessageType::L2Event,
    MessageType::L2TopK,
    MessageType::BBO,
    MessageType::Ticker,
    MessageType::Candlestick,
];

fn msg_type_to_channel(msg_type: MessageType) -> Result<&'static str, CmtError> {
    match msg_type {
        MessageType::Trade => Ok("aggTrade"),
        MessageType::L2Event => Ok("depth@100ms"),
        MessageType::L2TopK => Ok("depth5"),
        MessageType::BBO => Ok("bookTicker"),
        MessageType::Ticker => Ok("ticker"),
        MessageType::Candlestick => Ok("kline"),
        MessageType::Other
        | MessageType::L2Snapshot
        | MessageType::L3Event
        | MessageType::L3Snapshot
        | MessageType::FundingRate
        | MessageType::OpenInterest => Err(unsupported(Exchange::Binance, msg_type)),
    }
}

fn channel_symbol_to_topic(
    channel: &str,
    symbol: &str,
    configs: Option<&HashMap<String, String>>,
) -> Result<String, CmtError> {
    let symbol = symbol.to_lowercase();
    if channel == "kline" {
        Ok(format!("{symbol}@kline_{}", interval(configs)?))
    } else {
        Ok(format!("{symbol}@{channel}"))
    }
}

fn topics_to_command(topics: &[String], subscribe: bool) -> String {
    format!(
        r#"{{"id":9527, "method":"{}","params":{}}}"#,
        if subscribe { "SUBSCRIBE" } else { "UNSUBSCRIBE" },
        json_array(topics)
    )
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
