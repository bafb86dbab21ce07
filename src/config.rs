//! Runtime configuration from environment variables

use crate::conversion::DEFAULT_PRECISION;

pub const PRECISION_VAR: &str = "KITCHEN_UNITS_PRECISION";
pub const SERVER_NAME_VAR: &str = "KITCHEN_UNITS_SERVER_NAME";

const DEFAULT_SERVER_NAME: &str = "kitchen-units";

/// Largest precision accepted from the environment
const MAX_PRECISION: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Decimal places used for display strings in tool responses
    pub display_precision: u32,
    /// Name advertised in the MCP server info
    pub server_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_precision: DEFAULT_PRECISION,
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

impl Config {
    /// Build from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; invalid values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PRECISION_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(p) if p <= MAX_PRECISION => config.display_precision = p,
                _ => tracing::warn!(
                    "Ignoring {}={:?}; expected 0-{}. Using {}.",
                    PRECISION_VAR,
                    raw,
                    MAX_PRECISION,
                    DEFAULT_PRECISION
                ),
            }
        }

        if let Some(name) = lookup(SERVER_NAME_VAR) {
            let name = name.trim();
            if !name.is_empty() {
                config.server_name = name.to_string();
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.display_precision, 2);
        assert_eq!(config.server_name, "kitchen-units");
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            (PRECISION_VAR, " 3 "),
            (SERVER_NAME_VAR, "pantry"),
        ]));
        assert_eq!(config.display_precision, 3);
        assert_eq!(config.server_name, "pantry");
    }

    #[test]
    fn test_invalid_precision_falls_back() {
        let config = Config::from_lookup(lookup_from(&[(PRECISION_VAR, "-1")]));
        assert_eq!(config.display_precision, DEFAULT_PRECISION);
        let config = Config::from_lookup(lookup_from(&[(PRECISION_VAR, "99")]));
        assert_eq!(config.display_precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_blank_server_name_ignored() {
        let config = Config::from_lookup(lookup_from(&[(SERVER_NAME_VAR, "  ")]));
        assert_eq!(config.server_name, "kitchen-units");
    }
}
