//! # cmt
//!
//! Command-line front end for the market taxonomy crates.
//!
//! Lists the market types an exchange offers and prints the websocket
//! commands for a set of message types and symbols, either from flags or from
//! a JSON subscription plan.
//!
//! # Usage
//!
//! ```bash
//! cmt market-types binance
//! cmt ws-commands --exchange okx --msg-type trade --msg-type l2_topk --symbol BTC-USDT-SWAP
//! cmt plan plan.json --log-level debug
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmt_core::{Exchange, MessageType, config::{PlanConfig, SubscriptionConfig}};
use tracing::{error, info, warn};

/// Crypto market taxonomy tool.
#[derive(Parser)]
#[command(name = "cmt", about = "Crypto market types, message types and websocket commands")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Optional log directory for file output.
    #[arg(long, global = true)]
    log_dir: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the market types an exchange lists, one per line.
    MarketTypes {
        exchange: String,
    },
    /// Print websocket commands for message types and symbols.
    WsCommands {
        #[arg(short, long)]
        exchange: String,

        /// Canonical message type code, e.g. `trade` or `l2_topk`.
        #[arg(short, long = "msg-type", required = true)]
        msg_types: Vec<MessageType>,

        #[arg(short, long = "symbol", required = true)]
        symbols: Vec<String>,

        #[arg(long)]
        unsubscribe: bool,

        /// Candlestick interval, in the exchange's own notation.
        #[arg(long)]
        interval: Option<String>,
    },
    /// Print websocket commands for every entry of a JSON plan file.
    Plan {
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_dir = cli.log_dir.as_deref();

    match cli.command {
        Command::MarketTypes { exchange } => {
            cmt_core::logging::init_logging(&cli.log_level, log_dir, "cmt");
            let exchange: Exchange = exchange.parse()?;
            for market_type in exchange.market_types() {
                println!("{market_type}");
            }
        }
        Command::WsCommands { exchange, msg_types, symbols, unsubscribe, interval } => {
            cmt_core::logging::init_logging(&cli.log_level, log_dir, "cmt");
            let configs: HashMap<String, String> =
                interval.into_iter().map(|i| ("interval".to_string(), i)).collect();
            let commands = cmt_ws::get_ws_commands(&exchange, &msg_types, &symbols, !unsubscribe, Some(&configs))?;
            for command in commands {
                println!("{command}");
            }
        }
        Command::Plan { config } => {
            // The plan may name its own log directory and file prefix.
            let plan = cmt_core::config::load_config(&config)?;
            cmt_core::logging::init_logging(&cli.log_level, plan.log_dir(log_dir), plan.module_name());
            run_plan(&plan, &config);
        }
    }

    Ok(())
}

fn run_plan(plan: &PlanConfig, path: &std::path::Path) {
    info!(
        "plan '{}' loaded from {}: {} subscription(s)",
        plan.module_name(),
        path.display(),
        plan.subscriptions.len()
    );

    let mut failed = 0usize;
    for (idx, sub) in plan.subscriptions.iter().enumerate() {
        match plan_commands(sub) {
            Ok(commands) => {
                info!("subscriptions[{idx}]: {} {} -> {} command(s)", sub.exchange, sub.market_type, commands.len());
                for command in commands {
                    println!("{command}");
                }
            }
            Err(e) => {
                failed += 1;
                error!("subscriptions[{idx}]: skipped {} {}: {e}", sub.exchange, sub.market_type);
            }
        }
    }

    if failed > 0 {
        warn!("{failed} of {} subscription(s) skipped", plan.subscriptions.len());
    }
}

fn plan_commands(sub: &SubscriptionConfig) -> Result<Vec<String>> {
    sub.validate()?;
    let commands =
        cmt_ws::get_ws_commands(&sub.exchange, &sub.msg_types, &sub.symbols, sub.subscribe, Some(&sub.configs))?;
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ws_commands_flags() {
        let cli = Cli::try_parse_from([
            "cmt",
            "ws-commands",
            "--exchange",
            "binance",
            "--msg-type",
            "trade",
            "--msg-type",
            "l2_topk",
            "--symbol",
            "BTCUSDT",
            "--unsubscribe",
        ])
        .unwrap();
        match cli.command {
            Command::WsCommands { exchange, msg_types, symbols, unsubscribe, interval } => {
                assert_eq!(exchange, "binance");
                assert_eq!(msg_types, vec![MessageType::Trade, MessageType::L2TopK]);
                assert_eq!(symbols, vec!["BTCUSDT".to_string()]);
                assert!(unsubscribe);
                assert!(interval.is_none());
            }
            _ => panic!("expected ws-commands"),
        }
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn plan_log_path_used_without_log_dir_flag() {
        let plan = PlanConfig {
            module_name: Some("okx_crawler".into()),
            log_path: Some("/var/log/cmt".into()),
            subscriptions: vec![],
        };
        let cli = Cli::try_parse_from(["cmt", "plan", "plan.json"]).unwrap();
        assert_eq!(plan.log_dir(cli.log_dir.as_deref()), Some("/var/log/cmt"));
        assert_eq!(plan.module_name(), "okx_crawler");

        let cli = Cli::try_parse_from(["cmt", "plan", "plan.json", "--log-dir", "/tmp/cmt"]).unwrap();
        assert_eq!(plan.log_dir(cli.log_dir.as_deref()), Some("/tmp/cmt"));
    }

    #[test]
    fn rejects_unknown_msg_type() {
        let res = Cli::try_parse_from(["cmt", "ws-commands", "-e", "okx", "-m", "liquidation", "-s", "BTC-USDT"]);
        assert!(res.is_err());
    }

    #[test]
    fn plan_entry_outside_catalogue_is_skipped() {
        let sub = SubscriptionConfig {
            exchange: "bybit".into(),
            market_type: cmt_core::MarketType::Spot,
            msg_types: vec![MessageType::Trade],
            symbols: vec!["BTCUSDT".into()],
            subscribe: true,
            configs: HashMap::new(),
        };
        assert!(plan_commands(&sub).is_err());
    }

    #[test]
    fn plan_entry_builds_commands() {
        let sub = SubscriptionConfig {
            exchange: "bitmex".into(),
            market_type: cmt_core::MarketType::InverseSwap,
            msg_types: vec![MessageType::Trade],
            symbols: vec!["XBTUSD".into()],
            subscribe: true,
            configs: HashMap::new(),
        };
        assert_eq!(plan_commands(&sub).unwrap(), vec![r#"{"op":"subscribe", "args":["trade:XBTUSD"]}"#.to_string()]);
    }
}
