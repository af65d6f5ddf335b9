//! Typed error definitions for the market taxonomy crates.
//!
//! Provides [`CmtError`] for decode and lookup failures that are more
//! informative than plain `anyhow::Error` strings. All variants implement
//! `std::error::Error` via `thiserror`, so they integrate seamlessly with
//! `anyhow::Result`.

use thiserror::Error;

/// Domain-specific errors for the market taxonomy crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CmtError {
    /// Text that is not the canonical code of any `MarketType`.
    #[error("unknown market type: {0}")]
    UnknownMarketType(String),

    /// Text that is not the canonical code of any `MessageType`.
    #[error("unknown message type: {0}")]
    UnknownMessageType(String),

    /// Exchange name missing from the market catalogue.
    #[error("unknown exchange: {0}")]
    UnknownExchange(String),

    /// Integer outside the discriminant range of `kind`.
    #[error("invalid {kind} discriminant: {value}")]
    InvalidDiscriminant { kind: &'static str, value: u8 },

    /// Exchange known to the catalogue but without a subscription builder.
    #[error("no websocket command builder for exchange: {0}")]
    UnsupportedExchange(String),

    /// The exchange has no websocket channel carrying this message type.
    #[error("{exchange} has no websocket channel for {msg_type}")]
    UnsupportedMessageType { exchange: String, msg_type: String },

    /// A required entry of the per-request `configs` map is absent.
    #[error("missing config key: {0}")]
    MissingConfig(String),

    /// Configuration parsing or validation error.
    #[error("config error: {0}")]
    Config(String),
}
