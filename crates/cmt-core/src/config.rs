//! Subscription plan configuration.
//!
//! A plan is a JSON file listing, per exchange and market, which message types
//! to subscribe to and for which symbols.
//!
//! # Example plan
//!
//! ```json
//! {
//!   "module_name": "binance_crawler",
//!   "log_path": "/tmp/log",
//!   "subscriptions": [{
//!     "exchange": "binance",
//!     "market_type": "linear_swap",
//!     "msg_types": ["trade", "candlestick"],
//!     "symbols": ["BTCUSDT", "ETHUSDT"],
//!     "configs": { "interval": "1m" }
//!   }]
//! }
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::CmtError;
use crate::types::{Exchange, MarketType, MessageType};

/// Top-level plan, deserialized from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanConfig {
    /// Used as the log file prefix.
    pub module_name: Option<String>,

    /// Directory for daily-rotating log files.
    pub log_path: Option<String>,

    pub subscriptions: Vec<SubscriptionConfig>,
}

/// One exchange/market subscription group.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionConfig {
    /// Exchange name, e.g. `"binance"`. Aliases such as `"mxc"` are accepted.
    pub exchange: String,

    pub market_type: MarketType,

    pub msg_types: Vec<MessageType>,

    /// Exchange-native symbols, e.g. `"BTCUSDT"` or `"BTC-USDT-SWAP"`.
    pub symbols: Vec<String>,

    /// `false` produces unsubscribe commands.
    #[serde(default = "default_subscribe")]
    pub subscribe: bool,

    /// Extra channel parameters, e.g. `interval` for candlesticks.
    #[serde(default)]
    pub configs: HashMap<String, String>,
}

fn default_subscribe() -> bool {
    true
}

impl PlanConfig {
    /// Returns the module name, defaulting to `"cmt"`.
    pub fn module_name(&self) -> &str {
        self.module_name.as_deref().unwrap_or("cmt")
    }

    /// Log directory: `override_dir` (e.g. a command-line flag) wins over
    /// the plan's `log_path`.
    pub fn log_dir<'a>(&'a self, override_dir: Option<&'a str>) -> Option<&'a str> {
        override_dir.or(self.log_path.as_deref())
    }

    /// Check every subscription against the market catalogue.
    pub fn validate(&self) -> Result<(), CmtError> {
        self.subscriptions.iter().try_for_each(SubscriptionConfig::validate)
    }
}

impl SubscriptionConfig {
    /// The exchange must be known and must list `market_type`.
    pub fn validate(&self) -> Result<(), CmtError> {
        let exchange: Exchange = self.exchange.parse()?;
        if !exchange.lists(self.market_type) {
            return Err(CmtError::Config(format!("{exchange} has no {} market", self.market_type)));
        }
        Ok(())
    }
}

/// Load and parse a JSON plan file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<PlanConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: PlanConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"{
        "module_name": "okx_crawler",
        "subscriptions": [
            {
                "exchange": "okex",
                "market_type": "linear_swap",
                "msg_types": ["trade", "l2_topk"],
                "symbols": ["BTC-USDT-SWAP"]
            },
            {
                "exchange": "binance",
                "market_type": "spot",
                "msg_types": ["candlestick"],
                "symbols": ["BTCUSDT"],
                "subscribe": false,
                "configs": { "interval": "1m" }
            }
        ]
    }"#;

    #[test]
    fn parse_plan() {
        let plan: PlanConfig = serde_json::from_str(PLAN).unwrap();
        assert_eq!(plan.module_name(), "okx_crawler");
        assert!(plan.log_path.is_none());
        assert_eq!(plan.subscriptions.len(), 2);

        let okx = &plan.subscriptions[0];
        assert_eq!(okx.market_type, MarketType::LinearSwap);
        assert_eq!(okx.msg_types, vec![MessageType::Trade, MessageType::L2TopK]);
        assert!(okx.subscribe);
        assert!(okx.configs.is_empty());

        let binance = &plan.subscriptions[1];
        assert!(!binance.subscribe);
        assert_eq!(binance.configs.get("interval").map(String::as_str), Some("1m"));
        plan.validate().unwrap();
    }

    #[test]
    fn log_path_selects_log_dir() {
        let plan: PlanConfig =
            serde_json::from_str(r#"{"log_path":"/var/log/cmt","subscriptions":[]}"#).unwrap();
        assert_eq!(plan.log_dir(None), Some("/var/log/cmt"));
        assert_eq!(plan.log_dir(Some("/tmp/cmt")), Some("/tmp/cmt"));

        let plan: PlanConfig = serde_json::from_str(PLAN).unwrap();
        assert_eq!(plan.log_dir(None), None);
    }

    #[test]
    fn unknown_message_type_is_rejected() {
        let json = r#"{"subscriptions":[{"exchange":"okx","market_type":"spot","msg_types":["liquidation"],"symbols":[]}]}"#;
        assert!(serde_json::from_str::<PlanConfig>(json).is_err());
    }

    #[test]
    fn market_not_listed_by_exchange() {
        let json = r#"{"subscriptions":[{"exchange":"bybit","market_type":"spot","msg_types":["trade"],"symbols":["BTCUSD"]}]}"#;
        let plan: PlanConfig = serde_json::from_str(json).unwrap();
        assert_eq!(plan.module_name(), "cmt");
        assert_eq!(plan.validate(), Err(CmtError::Config("bybit has no spot market".into())));
    }

    #[test]
    fn unknown_exchange() {
        let json = r#"{"subscriptions":[{"exchange":"nyse","market_type":"spot","msg_types":[],"symbols":[]}]}"#;
        let plan: PlanConfig = serde_json::from_str(json).unwrap();
        assert_eq!(plan.validate(), Err(CmtError::UnknownExchange("nyse".into())));
    }
}
