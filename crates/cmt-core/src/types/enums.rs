//! Classification enums shared by every crawler, connector and storage format.
//!
//! Both [`MarketType`] and [`MessageType`] carry two stable representations:
//!
//! - a canonical snake_case code (`Display`, `FromStr`, serde), and
//! - an explicit `u8` discriminant (`repr(u8)`, rkyv wire format).
//!
//! Neither representation may change for an existing variant. New variants are
//! appended at the end with the next free discriminant.

use std::fmt;
use std::str::FromStr;

use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CmtError;

// ---------------------------------------------------------------------------
// Market types
// ---------------------------------------------------------------------------

/// Market type.
///
/// - In a spot market, assets are traded for immediate delivery.
/// - In a futures market, delivery is set at a specified time in the future.
/// - A swap market is a futures market with no expiry date.
///
/// # Margin
///
/// All contract markets (future, swap, option, index) have margin enabled.
/// Most spot markets don't, a few exchanges offer spot markets with margin.
/// Whether a given spot market is margin enabled is not encoded here.
///
/// # Linear vs. inverse
///
/// - Linear means USDT-margined, the quote asset is the collateral.
/// - Inverse means coin-margined, the base asset is the collateral.
/// - Spot is always linear.
///
/// Margin and linear/inverse are orthogonal. See [`MarketType::collateral`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Archive,
    RkyvSerialize,
    RkyvDeserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MarketType {
    #[default]
    Unknown = 0,
    Spot = 1,
    LinearFuture = 2,
    InverseFuture = 3,
    LinearSwap = 4,
    InverseSwap = 5,
    AmericanOption = 6,
    EuropeanOption = 7,
    QuantoFuture = 8,
    QuantoSwap = 9,
    Move = 10,
    #[serde(rename = "bvol")]
    #[allow(clippy::upper_case_acronyms)]
    BVOL = 11,
}

/// Which asset backs a market's positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collateral {
    /// Quote asset, e.g. USDT.
    Linear,
    /// Base asset, e.g. BTC.
    Inverse,
}

impl MarketType {
    /// Every variant, in discriminant order.
    pub const ALL: [MarketType; 12] = [
        MarketType::Unknown,
        MarketType::Spot,
        MarketType::LinearFuture,
        MarketType::InverseFuture,
        MarketType::LinearSwap,
        MarketType::InverseSwap,
        MarketType::AmericanOption,
        MarketType::EuropeanOption,
        MarketType::QuantoFuture,
        MarketType::QuantoSwap,
        MarketType::Move,
        MarketType::BVOL,
    ];

    /// Canonical snake_case code.
    pub const fn as_str(self) -> &'static str {
        match self {
            MarketType::Unknown => "unknown",
            MarketType::Spot => "spot",
            MarketType::LinearFuture => "linear_future",
            MarketType::InverseFuture => "inverse_future",
            MarketType::LinearSwap => "linear_swap",
            MarketType::InverseSwap => "inverse_swap",
            MarketType::AmericanOption => "american_option",
            MarketType::EuropeanOption => "european_option",
            MarketType::QuantoFuture => "quanto_future",
            MarketType::QuantoSwap => "quanto_swap",
            MarketType::Move => "move",
            MarketType::BVOL => "bvol",
        }
    }

    /// Decode a market-type code, falling back to [`MarketType::Unknown`].
    ///
    /// Meant for exchange decoders that must keep going on codes they have
    /// never seen.
    pub fn from_code_lossy(code: &str) -> MarketType {
        code.parse().unwrap_or_else(|_| {
            debug!("unrecognized market type code '{code}', using unknown");
            MarketType::Unknown
        })
    }

    /// True for futures, swaps, options and index contracts.
    ///
    /// Contract markets always have margin enabled.
    pub const fn is_contract(self) -> bool {
        !matches!(self, MarketType::Unknown | MarketType::Spot)
    }

    /// Collateral mode implied by the variant alone.
    ///
    /// Options, quanto and index contracts are `None`: the exchange decides,
    /// so consumers track it next to the market type.
    pub const fn collateral(self) -> Option<Collateral> {
        match self {
            MarketType::Spot | MarketType::LinearFuture | MarketType::LinearSwap => Some(Collateral::Linear),
            MarketType::InverseFuture | MarketType::InverseSwap => Some(Collateral::Inverse),
            MarketType::Unknown
            | MarketType::AmericanOption
            | MarketType::EuropeanOption
            | MarketType::QuantoFuture
            | MarketType::QuantoSwap
            | MarketType::Move
            | MarketType::BVOL => None,
        }
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketType {
    type Err = CmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        MarketType::ALL
            .into_iter()
            .find(|m| m.as_str() == code)
            .ok_or_else(|| CmtError::UnknownMarketType(s.to_string()))
    }
}

impl TryFrom<u8> for MarketType {
    type Error = CmtError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MarketType::ALL
            .get(value as usize)
            .copied()
            .ok_or(CmtError::InvalidDiscriminant { kind: "market type", value })
    }
}

impl From<MarketType> for u8 {
    fn from(m: MarketType) -> u8 {
        m as u8
    }
}

// ---------------------------------------------------------------------------
// Message types
// ---------------------------------------------------------------------------

/// Kind of information carried by one market-data message.
///
/// `L2Snapshot` and `L2TopK` hold the same kind of data. The former is
/// fetched over a request/response API, the latter is pushed over a
/// subscription channel; the two must stay distinct when stored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Archive,
    RkyvSerialize,
    RkyvDeserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MessageType {
    /// All other messages.
    #[default]
    Other = 0,
    /// Tick-by-tick trades.
    Trade = 1,
    /// Incremental level2 order book updates.
    L2Event = 2,
    /// Level2 snapshot from a request/response API.
    L2Snapshot = 3,
    /// Level2 top-K snapshot pushed by a subscription.
    #[serde(rename = "l2_topk")]
    L2TopK = 4,
    /// Incremental level3 order book updates.
    L3Event = 5,
    /// Level3 snapshot from a request/response API.
    L3Snapshot = 6,
    /// Best bid and offer.
    #[serde(rename = "bbo")]
    #[allow(clippy::upper_case_acronyms)]
    BBO = 7,
    /// Rolling window ticker, usually 24h.
    Ticker = 8,
    /// OHLCV candlestick.
    Candlestick = 9,
    /// Funding rate of a perpetual contract.
    FundingRate = 10,
    /// Open interest.
    OpenInterest = 11,
}

impl MessageType {
    /// Every variant, in discriminant order.
    pub const ALL: [MessageType; 12] = [
        MessageType::Other,
        MessageType::Trade,
        MessageType::L2Event,
        MessageType::L2Snapshot,
        MessageType::L2TopK,
        MessageType::L3Event,
        MessageType::L3Snapshot,
        MessageType::BBO,
        MessageType::Ticker,
        MessageType::Candlestick,
        MessageType::FundingRate,
        MessageType::OpenInterest,
    ];

    /// Canonical snake_case code.
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageType::Other => "other",
            MessageType::Trade => "trade",
            MessageType::L2Event => "l2_event",
            MessageType::L2Snapshot => "l2_snapshot",
            MessageType::L2TopK => "l2_topk",
            MessageType::L3Event => "l3_event",
            MessageType::L3Snapshot => "l3_snapshot",
            MessageType::BBO => "bbo",
            MessageType::Ticker => "ticker",
            MessageType::Candlestick => "candlestick",
            MessageType::FundingRate => "funding_rate",
            MessageType::OpenInterest => "open_interest",
        }
    }

    /// Decode a message-type code, falling back to [`MessageType::Other`].
    pub fn from_code_lossy(code: &str) -> MessageType {
        code.parse().unwrap_or_else(|_| {
            debug!("unrecognized message type code '{code}', using other");
            MessageType::Other
        })
    }

    /// Full or top-K order book snapshots.
    pub const fn is_snapshot(self) -> bool {
        matches!(self, MessageType::L2Snapshot | MessageType::L2TopK | MessageType::L3Snapshot)
    }

    /// Delivered over a push channel rather than fetched on request.
    pub const fn is_push(self) -> bool {
        !matches!(self, MessageType::L2Snapshot | MessageType::L3Snapshot)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = CmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        MessageType::ALL
            .into_iter()
            .find(|m| m.as_str() == code)
            .ok_or_else(|| CmtError::UnknownMessageType(s.to_string()))
    }
}

impl TryFrom<u8> for MessageType {
    type Error = CmtError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MessageType::ALL
            .get(value as usize)
            .copied()
            .ok_or(CmtError::InvalidDiscriminant { kind: "message type", value })
    }
}

impl From<MessageType> for u8 {
    fn from(m: MessageType) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn market_types_are_twelve_in_discriminant_order() {
        assert_eq!(MarketType::ALL.len(), 12);
        let distinct: HashSet<_> = MarketType::ALL.iter().collect();
        assert_eq!(distinct.len(), 12);
        for (idx, m) in MarketType::ALL.iter().enumerate() {
            assert_eq!(*m as u8 as usize, idx);
        }
    }

    #[test]
    fn message_types_are_twelve_in_discriminant_order() {
        assert_eq!(MessageType::ALL.len(), 12);
        let distinct: HashSet<_> = MessageType::ALL.iter().collect();
        assert_eq!(distinct.len(), 12);
        for (idx, m) in MessageType::ALL.iter().enumerate() {
            assert_eq!(*m as u8 as usize, idx);
        }
    }

    #[test]
    fn market_type_text_round_trip() {
        for m in MarketType::ALL {
            assert_eq!(m.to_string().parse::<MarketType>().unwrap(), m);
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, format!("\"{}\"", m.as_str()));
            assert_eq!(serde_json::from_str::<MarketType>(&json).unwrap(), m);
        }
    }

    #[test]
    fn message_type_text_round_trip() {
        for m in MessageType::ALL {
            assert_eq!(m.to_string().parse::<MessageType>().unwrap(), m);
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, format!("\"{}\"", m.as_str()));
            assert_eq!(serde_json::from_str::<MessageType>(&json).unwrap(), m);
        }
    }

    #[test]
    fn discriminant_round_trip() {
        for m in MarketType::ALL {
            assert_eq!(MarketType::try_from(u8::from(m)).unwrap(), m);
        }
        for m in MessageType::ALL {
            assert_eq!(MessageType::try_from(u8::from(m)).unwrap(), m);
        }
        assert_eq!(
            MarketType::try_from(12),
            Err(CmtError::InvalidDiscriminant { kind: "market type", value: 12 })
        );
        assert!(MessageType::try_from(255).is_err());
    }

    #[test]
    fn rkyv_round_trip() {
        type E = rkyv::rancor::Error;
        for m in MarketType::ALL {
            let bytes = rkyv::to_bytes::<E>(&m).unwrap();
            assert_eq!(rkyv::from_bytes::<MarketType, E>(&bytes).unwrap(), m);
        }
        for m in MessageType::ALL {
            let bytes = rkyv::to_bytes::<E>(&m).unwrap();
            assert_eq!(rkyv::from_bytes::<MessageType, E>(&bytes).unwrap(), m);
        }
    }

    #[test]
    fn rkyv_rejects_out_of_range_tag() {
        type E = rkyv::rancor::Error;
        // The archived enum is a single tag byte at the end of the buffer.
        let mut bytes = rkyv::to_bytes::<E>(&MarketType::BVOL).unwrap();
        let last = bytes.len() - 1;
        assert_eq!(bytes[last], 11);
        bytes[last] = 12;
        assert!(rkyv::from_bytes::<MarketType, E>(&bytes).is_err());

        let mut bytes = rkyv::to_bytes::<E>(&MessageType::OpenInterest).unwrap();
        let last = bytes.len() - 1;
        bytes[last] = 12;
        assert!(rkyv::from_bytes::<MessageType, E>(&bytes).is_err());
    }

    #[test]
    fn linear_swap_canonical_text() {
        assert_eq!(MarketType::LinearSwap.to_string(), "linear_swap");
        assert_eq!("linear_swap".parse::<MarketType>().unwrap(), MarketType::LinearSwap);
        assert_eq!("LINEAR_SWAP".parse::<MarketType>().unwrap(), MarketType::LinearSwap);
    }

    #[test]
    fn acronym_codes() {
        assert_eq!(MarketType::BVOL.to_string(), "bvol");
        assert_eq!(MessageType::BBO.to_string(), "bbo");
        assert_eq!(serde_json::to_string(&MessageType::BBO).unwrap(), "\"bbo\"");
    }

    #[test]
    fn l2_snapshot_and_topk_stay_distinct() {
        assert_ne!(MessageType::L2TopK, MessageType::L2Snapshot);
        assert_ne!(MessageType::L2TopK.to_string(), MessageType::L2Snapshot.to_string());
        assert_eq!(MessageType::L2TopK.to_string(), "l2_topk");
        assert_ne!(u8::from(MessageType::L2TopK), u8::from(MessageType::L2Snapshot));
        assert!(MessageType::L2TopK.is_push());
        assert!(!MessageType::L2Snapshot.is_push());
        assert!(MessageType::L2TopK.is_snapshot() && MessageType::L2Snapshot.is_snapshot());
    }

    #[test]
    fn unrecognized_codes_fall_back() {
        assert_eq!(MarketType::from_code_lossy("perpetual_option"), MarketType::Unknown);
        assert_eq!(MarketType::from_code_lossy(""), MarketType::Unknown);
        assert_eq!(MarketType::from_code_lossy("spot"), MarketType::Spot);
        assert_eq!(MessageType::from_code_lossy("liquidation"), MessageType::Other);
        assert_eq!(
            "perpetual_option".parse::<MarketType>(),
            Err(CmtError::UnknownMarketType("perpetual_option".into()))
        );
        assert!(serde_json::from_str::<MarketType>("\"perpetual_option\"").is_err());
    }

    #[test]
    fn defaults() {
        assert_eq!(MarketType::default(), MarketType::Unknown);
        assert_eq!(MessageType::default(), MessageType::Other);
    }

    #[test]
    fn equality_is_an_equivalence() {
        for a in MarketType::ALL {
            assert_eq!(a, a);
            for b in MarketType::ALL {
                assert_eq!(a == b, b == a);
                for c in MarketType::ALL {
                    if a == b && b == c {
                        assert_eq!(a, c);
                    }
                }
            }
        }
        for a in MessageType::ALL {
            for b in MessageType::ALL {
                assert_eq!(a == b, b == a);
                assert_eq!(a == b, a as u8 == b as u8);
            }
        }
    }

    #[test]
    fn margin_and_collateral() {
        assert!(!MarketType::Spot.is_contract());
        assert!(!MarketType::Unknown.is_contract());
        for m in &MarketType::ALL[2..] {
            assert!(m.is_contract(), "{m} should be a contract market");
        }
        assert_eq!(MarketType::Spot.collateral(), Some(Collateral::Linear));
        assert_eq!(MarketType::LinearFuture.collateral(), Some(Collateral::Linear));
        assert_eq!(MarketType::InverseSwap.collateral(), Some(Collateral::Inverse));
        assert_eq!(MarketType::QuantoSwap.collateral(), None);
        assert_eq!(MarketType::EuropeanOption.collateral(), None);
    }

    // Fails to compile if a variant is added without updating consumers.
    fn describe(m: MarketType) -> &'static str {
        match m {
            MarketType::Unknown => "unclassified",
            MarketType::Spot => "spot",
            MarketType::LinearFuture | MarketType::InverseFuture | MarketType::QuantoFuture => "future",
            MarketType::LinearSwap | MarketType::InverseSwap | MarketType::QuantoSwap => "swap",
            MarketType::AmericanOption | MarketType::EuropeanOption => "option",
            MarketType::Move | MarketType::BVOL => "index",
        }
    }

    #[test]
    fn exhaustive_match() {
        let futures = MarketType::ALL.iter().filter(|m| describe(**m) == "future").count();
        let swaps = MarketType::ALL.iter().filter(|m| describe(**m) == "swap").count();
        assert_eq!((futures, swaps), (3, 3));
    }
}
