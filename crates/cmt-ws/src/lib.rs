//! # cmt-ws
//!
//! Websocket subscription commands for multiple cryptocurrency exchanges.
//!
//! Each exchange module maps [`MessageType`]s to its own channel names and
//! wraps the resulting topics in the exchange's subscribe request format.
//! [`registry::get_ws_commands`] picks the module by exchange name.
//!
//! - [`registry`] — exchange dispatch and supported message types
//! - [`command_util`] — helpers shared by the builders

pub mod binance;
pub mod bitfinex;
pub mod bitmex;
pub mod bybit;
pub mod command_util;
pub mod deribit;
pub mod ftx;
pub mod huobi;
pub mod okex;
pub mod okx;
pub mod registry;

pub use cmt_core::MessageType;
pub use registry::{get_ws_commands, supported_msg_types};
