use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable holding [`GridConfig::chunk_capacity`].
pub const CHUNK_CAPACITY_VAR: &str = "TILE_FLAGS_CHUNK_CAPACITY";

/// Grid construction options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of chunks to reserve storage for up front
    pub chunk_capacity: usize,
}

impl GridConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CHUNK_CAPACITY_VAR) {
            config.chunk_capacity = match value.trim().parse() {
                Ok(capacity) => capacity,
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        var: CHUNK_CAPACITY_VAR,
                        value,
                    })
                }
            };
            tracing::debug!("{} = {}", CHUNK_CAPACITY_VAR, config.chunk_capacity);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |var: &str| {
            pairs
                .iter()
                .find(|(name, _)| *name == var)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GridConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.chunk_capacity, 0);
    }

    #[test]
    fn test_capacity_from_lookup() {
        let config = GridConfig::from_lookup(lookup_from(&[(CHUNK_CAPACITY_VAR, " 256 ")])).unwrap();
        assert_eq!(config.chunk_capacity, 256);
    }

    #[test]
    fn test_invalid_capacity() {
        let err = GridConfig::from_lookup(lookup_from(&[(CHUNK_CAPACITY_VAR, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: CHUNK_CAPACITY_VAR,
                value: "lots".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid value \"lots\" for TILE_FLAGS_CHUNK_CAPACITY");

        assert!(GridConfig::from_lookup(lookup_from(&[(CHUNK_CAPACITY_VAR, "-1")])).is_err());
    }

    #[test]
    fn test_huge_capacity_builds_grid() {
        let config =
            GridConfig::from_lookup(lookup_from(&[(CHUNK_CAPACITY_VAR, "18446744073709551615")])).unwrap();
        assert_eq!(config.chunk_capacity, usize::MAX);

        let mut flags = crate::TileFlags::with_config(&config);
        assert!(flags.is_empty());
        flags.set(0, 0, true);
        assert!(flags.get(0, 0));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{"chunk_capacity": 16}"#).unwrap();
        assert_eq!(config.chunk_capacity, 16);

        let config: GridConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GridConfig::default());
    }
}
