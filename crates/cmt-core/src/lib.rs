//! # cmt-core
//!
//! Core crate of the crypto market taxonomy workspace, providing:
//!
//! - **Types** (`types`) — `MarketType`, `MessageType`, `Exchange` and the
//!   per-exchange market catalogue
//! - **Configuration** (`config`) — JSON subscription plan deserialization
//! - **Error types** (`error`) — domain-specific `CmtError` via thiserror
//! - **Logging** (`logging`) — tracing-based structured logging

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export types at crate root for convenience.
pub use error::CmtError;
pub use types::*;
