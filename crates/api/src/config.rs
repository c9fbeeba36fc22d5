//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use restock_core::DomainError;
use restock_inventory::{ReorderPolicy, DEFAULT_BUFFER_DAYS, DEFAULT_PLANNING_WINDOW_DAYS};

pub const BIND_ADDR_VAR: &str = "RESTOCK_BIND_ADDR";
pub const DATA_PATH_VAR: &str = "RESTOCK_DATA_PATH";
pub const BUFFER_DAYS_VAR: &str = "RESTOCK_BUFFER_DAYS";
pub const PLANNING_WINDOW_VAR: &str = "RESTOCK_PLANNING_WINDOW_DAYS";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DATA_PATH: &str = "data/data.csv";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid reorder policy: {0}")]
    Policy(#[source] DomainError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    pub policy: ReorderPolicy,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_var(
            BIND_ADDR_VAR,
            lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;

        let data_path = match lookup(DATA_PATH_VAR) {
            Some(path) => PathBuf::from(path),
            None => {
                tracing::warn!("{DATA_PATH_VAR} not set; using {DEFAULT_DATA_PATH}");
                PathBuf::from(DEFAULT_DATA_PATH)
            }
        };

        let buffer_days = match lookup(BUFFER_DAYS_VAR) {
            Some(v) => parse_var(BUFFER_DAYS_VAR, v)?,
            None => DEFAULT_BUFFER_DAYS,
        };
        let planning_window_days = match lookup(PLANNING_WINDOW_VAR) {
            Some(v) => parse_var(PLANNING_WINDOW_VAR, v)?,
            None => DEFAULT_PLANNING_WINDOW_DAYS,
        };
        let policy =
            ReorderPolicy::new(buffer_days, planning_window_days).map_err(ConfigError::Policy)?;

        Ok(Self {
            bind_addr,
            data_path,
            policy,
        })
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(cfg.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(cfg.policy, ReorderPolicy::default());
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = config_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (DATA_PATH_VAR, "/srv/stock.csv"),
            (BUFFER_DAYS_VAR, "7"),
            (PLANNING_WINDOW_VAR, "90"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.data_path, PathBuf::from("/srv/stock.csv"));
        assert_eq!(cfg.policy.buffer_days, 7.0);
        assert_eq!(cfg.policy.planning_window_days, 90.0);
    }

    #[test]
    fn malformed_values_fail() {
        let err = config_from(&[(BIND_ADDR_VAR, "not-an-addr")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: BIND_ADDR_VAR, .. }));

        let err = config_from(&[(BUFFER_DAYS_VAR, "five")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: BUFFER_DAYS_VAR, .. }));

        let err = config_from(&[(PLANNING_WINDOW_VAR, "-1")]).unwrap_err();
        assert!(matches!(err, ConfigError::Policy(DomainError::Validation(msg)) if msg.contains("planning_window_days")));

        let err = config_from(&[(BUFFER_DAYS_VAR, "inf")]).unwrap_err();
        assert!(matches!(err, ConfigError::Policy(DomainError::Validation(msg)) if msg.contains("buffer_days")));
    }
}
