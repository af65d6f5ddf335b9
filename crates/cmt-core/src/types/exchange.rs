//! Exchange identifiers and the market types each exchange lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::enums::MarketType;
use crate::error::CmtError;

/// Cryptocurrency exchanges known to the market catalogue.
///
/// Deserialization goes through [`FromStr`], so serde accepts the same
/// case-insensitive names and aliases as `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Exchange {
    Binance,
    Bitfinex,
    Bitget,
    Bithumb,
    Bitmex,
    Bitstamp,
    Bitz,
    Bybit,
    CoinbasePro,
    Deribit,
    Dydx,
    Ftx,
    Gate,
    Huobi,
    Kraken,
    Kucoin,
    Mexc,
    /// OKEx legacy v3 API. Same markets as [`Exchange::Okx`].
    Okex,
    Okx,
    Zb,
    Zbg,
}

impl Exchange {
    pub const ALL: [Exchange; 21] = [
        Exchange::Binance,
        Exchange::Bitfinex,
        Exchange::Bitget,
        Exchange::Bithumb,
        Exchange::Bitmex,
        Exchange::Bitstamp,
        Exchange::Bitz,
        Exchange::Bybit,
        Exchange::CoinbasePro,
        Exchange::Deribit,
        Exchange::Dydx,
        Exchange::Ftx,
        Exchange::Gate,
        Exchange::Huobi,
        Exchange::Kraken,
        Exchange::Kucoin,
        Exchange::Mexc,
        Exchange::Okex,
        Exchange::Okx,
        Exchange::Zb,
        Exchange::Zbg,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Exchange::Binance => "binance",
            Exchange::Bitfinex => "bitfinex",
            Exchange::Bitget => "bitget",
            Exchange::Bithumb => "bithumb",
            Exchange::Bitmex => "bitmex",
            Exchange::Bitstamp => "bitstamp",
            Exchange::Bitz => "bitz",
            Exchange::Bybit => "bybit",
            Exchange::CoinbasePro => "coinbase_pro",
            Exchange::Deribit => "deribit",
            Exchange::Dydx => "dydx",
            Exchange::Ftx => "ftx",
            Exchange::Gate => "gate",
            Exchange::Huobi => "huobi",
            Exchange::Kraken => "kraken",
            Exchange::Kucoin => "kucoin",
            Exchange::Mexc => "mexc",
            Exchange::Okex => "okex",
            Exchange::Okx => "okx",
            Exchange::Zb => "zb",
            Exchange::Zbg => "zbg",
        }
    }

    /// Market types listed by the exchange, in the exchange's own order.
    pub fn market_types(self) -> &'static [MarketType] {
        use MarketType::*;
        match self {
            // Option markets were shut down.
            Exchange::Binance => &[Spot, LinearFuture, InverseFuture, LinearSwap, InverseSwap],
            Exchange::Bitfinex => &[Spot, LinearSwap],
            // The coin-margined swap is a mixed contract, closest to inverse.
            Exchange::Bitget => &[Spot, InverseSwap, LinearSwap],
            Exchange::Bithumb => &[Spot],
            Exchange::Bitmex => &[LinearSwap, InverseSwap, QuantoSwap, LinearFuture, InverseFuture, QuantoFuture],
            Exchange::Bitstamp => &[Spot],
            Exchange::Bitz => &[Spot, InverseSwap, LinearSwap],
            Exchange::Bybit => &[InverseSwap, LinearSwap, InverseFuture],
            Exchange::CoinbasePro => &[Spot],
            // Only BTC deposits, options are inverse too.
            Exchange::Deribit => &[InverseFuture, InverseSwap, EuropeanOption],
            Exchange::Dydx => &[LinearSwap],
            Exchange::Ftx => &[Spot, LinearFuture, LinearSwap, Move, BVOL],
            Exchange::Gate => &[Spot, InverseFuture, LinearFuture, InverseSwap, LinearSwap],
            Exchange::Huobi => &[Spot, InverseFuture, LinearSwap, InverseSwap],
            Exchange::Kraken => &[Spot, InverseFuture, InverseSwap],
            Exchange::Kucoin => &[Spot, LinearSwap, InverseSwap, InverseFuture],
            Exchange::Mexc => &[Spot, LinearSwap, InverseSwap],
            Exchange::Okex | Exchange::Okx => {
                &[Spot, LinearFuture, InverseFuture, LinearSwap, InverseSwap, EuropeanOption]
            }
            Exchange::Zb => &[Spot, LinearSwap],
            Exchange::Zbg => &[Spot, InverseSwap, LinearSwap],
        }
    }

    /// Whether `market_type` appears in [`Exchange::market_types`].
    pub fn lists(self, market_type: MarketType) -> bool {
        self.market_types().contains(&market_type)
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = CmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "mxc" {
            return Ok(Exchange::Mexc);
        }
        Exchange::ALL
            .into_iter()
            .find(|e| e.as_str() == name)
            .ok_or_else(|| CmtError::UnknownExchange(s.to_string()))
    }
}

impl TryFrom<String> for Exchange {
    type Error = CmtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Market types of the exchange named `exchange`.
pub fn get_market_types(exchange: &str) -> Result<Vec<MarketType>, CmtError> {
    let exchange: Exchange = exchange.parse()?;
    Ok(exchange.market_types().to_vec())
}
