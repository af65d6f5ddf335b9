//! Deribit subscription commands (JSON-RPC `public/subscribe`).

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

fn msg_type_symbol_to_topic(
    msg_type: MessageType,
    symbol: &str,
    configs: Option<&HashMap<String, String>>,
) -> Result<String, CmtError> {
    match msg_type {
        MessageType::Trade => Ok(format!("trades.{symbol}.100ms")),
        MessageType::L2Event => Ok(format!("book.{symbol}.100ms")),
        MessageType::L2TopK => Ok(format!("book.{symbol}.5.10.100ms")),
        MessageType::BBO => Ok(format!("quote.{symbol}")),
        MessageType::Ticker => Ok(format!("ticker.{symbol}.100ms")),
        MessageType::Candlestick => Ok(format!("chart.trades.{symbol}.{}", interval(configs)?)),
        MessageType::Other
        | MessageType::L2Snapshot
        | MessageType::L3Event
        | MessageType::L3Snapshot
        | MessageType::FundingRate
        | MessageType::OpenInterest => Err(unsupported(Exchange::Deribit, msg_type)),
    }
}

fn topics_to_command(topics: &[String], subscribe: bool) -> String {
    format!(r#"{{"method":"public/{}", "params":{{"channels":{}}}}}"#, verb(subscribe), json_array(topics))
}

pub fn get_ws_commands(
    msg_types: &[MessageType],
    symbols: &[String],
    subscribe: bool,
    configs: Option<&HashMap<String, String>>,
) -> Result<Vec<String>, CmtError> {
    let topics =
        for_each_pair(msg_types, symbols, |msg_type, symbol| msg_type_symbol_to_topic(msg_type, symbol, configs))?;
    Ok(vec![topics_to_command(&topics, subscribe)])
}
