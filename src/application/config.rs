// src/application/config.rs
//
// Command-line / environment configuration

use clap::Parser;
use std::net::SocketAddr;

use crate::error::{AppError, AppResult};

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Parser)]
#[command(name = "kitchenhub", version, about = "Recipe box and kitchen inventory server")]
pub struct CliArgs {
    #[arg(
        long,
        env = "KITCHENHUB_BIND",
        value_name = "ADDR",
        default_value = DEFAULT_BIND,
        help = "Address the HTTP server listens on"
    )]
    pub bind: String,

    #[arg(
        long,
        env = "KITCHENHUB_LOG",
        value_name = "FILTER",
        default_value = DEFAULT_LOG_FILTER,
        help = "Log filter directive, e.g. `info` or `kitchenhub=debug`"
    )]
    pub log_filter: String,

    #[arg(
        long,
        env = "KITCHENHUB_NO_SEED",
        help = "Start with empty stores instead of the demo data"
    )]
    pub no_seed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub log_filter: String,
    pub seed: bool,
}

impl ServerConfig {
    pub fn from_args(args: CliArgs) -> AppResult<Self> {
        let CliArgs {
            bind,
            log_filter,
            no_seed,
        } = args;

        let bind_address: SocketAddr = bind.trim().parse()?;

        let log_filter = log_filter.trim().to_string();
        if log_filter.is_empty() {
            return Err(AppError::Config("log filter cannot be empty".to_string()));
        }

        Ok(Self {
            bind_address,
            log_filter,
            seed: !no_seed,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["kitchenhub"]).unwrap();
        let config = ServerConfig::from_args(args).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = CliArgs::try_parse_from([
            "kitchenhub",
            "--bind",
            "0.0.0.0:8080",
            "--log-filter",
            "kitchenhub=debug",
            "--no-seed",
        ])
        .unwrap();
        let config = ServerConfig::from_args(args).unwrap();
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(config.log_filter, "kitchenhub=debug");
        assert!(!config.seed);
    }

    #[test]
    fn test_bad_bind_address() {
        let args = CliArgs::try_parse_from(["kitchenhub", "--bind", "localhost"]).unwrap();
        assert!(matches!(
            ServerConfig::from_args(args),
            Err(AppError::Config(_))
        ));
    }
}
