//! Exchange dispatch for subscription command builders.

use std::collections::HashMap;

use cmt_core::{CmtError, Exchange, MessageType};
use tracing::debug;

/// Message types the exchange has a websocket channel for, or `None` when
/// there is no command builder for it.
pub fn supported_msg_types(exchange: Exchange) -> Option<&'static [MessageType]> {
    match exchange {
        Exchange::Binance => Some(crate::binance::MSG_TYPES),
        Exchange::Bitfinex => Some(crate::bitfinex::MSG_TYPES),
        Exchange::Bitmex => Some(crate::bitmex::MSG_TYPES),
        Exchange::Bybit => Some(crate::bybit::MSG_TYPES),
        Exchange::Deribit => Some(crate::deribit::MSG_TYPES),
        Exchange::Ftx => Some(crate::ftx::MSG_TYPES),
        Exchange::Huobi => Some(crate::huobi::MSG_TYPES),
        Exchange::Okex => Some(crate::okex::MSG_TYPES),
        Exchange::Okx => Some(crate::okx::MSG_TYPES),
        _ => None,
    }
}

/// Translate message types and symbols into websocket subscribe or
/// unsubscribe commands for `exchange`.
///
/// Some message types need an entry in `configs`, e.g. `Candlestick` needs
/// `interval`. Returns no commands when either list is empty.
pub fn get_ws_commands(
    exchange: &str,
    msg_types: &[MessageType],
    symbols: &[String],
    subscribe: bool,
    configs: Option<&HashMap<String, String>>,
) -> Result<Vec<String>, CmtError> {
    if msg_types.is_empty() || symbols.is_empty() {
        return Ok(Vec::new());
    }

    let exchange: Exchange = exchange.parse()?;
    let commands = match exchange {
        Exchange::Binance => crate::binance::get_ws_commands(msg_types, symbols, subscribe, configs)?,
        Exchange::Bitfinex => crate::bitfinex::get_ws_commands(msg_types, symbols, subscribe, configs)?,
        Exchange::Bitmex => crate::bitmex::get_ws_commands(msg_types, symbols, subscribe, configs)?,
        Exchange::Bybit => crate::bybit::get_ws_commands(msg_types, symbols, subscribe, configs)?,
        Exchange::Deribit => crate::deribit::get_ws_commands(msg_types, symbols, subscribe, configs)?,
        Exchange::Ftx => crate::ftx::get_ws_commands(msg_types, symbols, subscribe, configs)?,
        Exchange::Huobi => crate::huobi::get_ws_commands(msg_types, symbols, subscribe, configs)?,
        Exchange::Okex => crate::okex::get_ws_commands(msg_types, symbols, subscribe, configs)?,
        Exchange::Okx => crate::okx::get_ws_commands(msg_types, symbols, subscribe, configs)?,
        other => return Err(CmtError::UnsupportedExchange(other.to_string())),
    };

    debug!("{exchange}: built {} command(s) for {} symbol(s)", commands.len(), symbols.len());
    Ok(commands)
}
