//! Huobi subscription commands, one per topic.
//!
//! Spot symbols are all lowercase (`btcusdt`), contract symbols are not
//! (`BTC-USD`), and several channels differ between the two.

use std::collections::HashMap;

use cmt_core::{CmtError, Exchange, MessageType};

use crate::command_util::{for_each_pair, interval, unsupported};

pub const MSG_TYPES: &[MessageType] = &[
    MessageType::Trade,
    MessageType::L2Event,
    MessageType::L2TopK,
    MessageType::BBO,
    MessageType::Ticker,
    MessageType::Candlestick,
];

const CLIENT_ID: &str = "crypto-ws-client";
const INCREMENTAL_DEPTH: &str = "depth.size_20.high_freq";

fn msg_type_symbol_to_topic(
    msg_type: MessageType,
    symbol: &str,
    configs: Option<&HashMap<String, String>>,
) -> Result<String, CmtError> {
    let is_spot = symbol.to_lowercase() == symbol;
    let channel = match msg_type {
        MessageType::Trade => "trade.detail",
        MessageType::L2Event => {
            if is_spot {
                "mbp.20"
            } else {
                INCREMENTAL_DEPTH
            }
        }
        MessageType::L2TopK => {
            if is_spot {
                "depth.step1"
            } else {
                "depth.step7"
            }
        }
        MessageType::BBO => "bbo",
        MessageType::Ticker => "detail",
        MessageType::Candlestick => return Ok(format!("market.{symbol}.kline.{}", interval(configs)?)),
        MessageType::Other
        | MessageType::L2Snapshot
        | MessageType::L3Event
        | MessageType::L3Snapshot
        | MessageType::FundingRate
        | MessageType::OpenInterest => return Err(unsupported(Exchange::Huobi, msg_type)),
    };
    Ok(format!("market.{symbol}.{channel}"))
}

fn topic_to_command(topic: &str, subscribe: bool) -> String {
    let op = if subscribe { "sub" } else { "unsub" };
    if topic.ends_with(INCREMENTAL_DEPTH) {
        format!(r#"{{"{op}": "{topic}","data_type":"incremental","id": "{CLIENT_ID}"}}"#)
    } else {
        format!(r#"{{"{op}":"{topic}","id":"{CLIENT_ID}"}}"#)
    }
}

pub fn get_ws_commands(
    msg_types: &[MessageType],
    symbols: &[String],
    subscribe: bool,
    configs: Option<&HashMap<String, String>>,
) -> Result<Vec<String>, CmtError> {
    for_each_pair(msg_types, symbols, |msg_type, symbol| {
        let topic = msg_type_symbol_to_topic(msg_type, symbol, configs)?;
        Ok(topic_to_command(&topic, subscribe))
    })
}
