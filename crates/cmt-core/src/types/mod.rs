//! Classification types shared across crawlers, connectors and storage.
//!
//! `MarketType` and `MessageType` are `Copy` tags with stable text and
//! integer codes. `Exchange` ties a venue name to the market types it lists.

pub mod enums;
pub mod exchange;

pub use enums::*;
pub use exchange::*;
