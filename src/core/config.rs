//! Planner configuration
//!
//! Defaults reproduce the classic behaviour: routes of up to 19 hops, at most
//! 1000 routes per search, top 5 by distance and fare, top 3 by time, and a
//! network of at most 40 stations. Any subset can be overridden from a TOML
//! file:
//!
//! ```toml
//! capacity = 60
//!
//! [search]
//! max_hops = 8
//!
//! [ranking]
//! time = 5
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::network::DEFAULT_CAPACITY;
use crate::core::rank::RankLimits;
use crate::core::search::SearchLimits;

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "butterfly-transit.toml";

/// Configuration for route search and ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum number of stations in a network
    pub capacity: usize,
    pub search: SearchLimits,
    pub ranking: RankLimits,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            search: SearchLimits::default(),
            ranking: RankLimits::default(),
        }
    }
}

impl PlannerConfig {
    /// Parse a configuration from TOML text; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else the default file if present, else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Reject settings under which no route could ever be reported
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::Config("capacity must be at least 1".to_string()));
        }
        if self.search.max_hops == 0 {
            return Err(Error::Config("search.max_hops must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.capacity, 40);
        assert_eq!(config.search.max_hops, 19);
        assert_eq!(config.search.max_routes, 1000);
        assert_eq!(config.ranking, RankLimits { distance: 5, fare: 5, time: 3 });
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PlannerConfig::from_toml("[search]\nmax_hops = 6\n\n[ranking]\ntime = 4\n").unwrap();
        assert_eq!(config.search.max_hops, 6);
        assert_eq!(config.search.max_routes, 1000);
        assert_eq!(config.ranking.time, 4);
        assert_eq!(config.ranking.fare, 5);
        assert_eq!(config.capacity, 40);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(PlannerConfig::from_toml("").unwrap(), PlannerConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            PlannerConfig::from_toml("[search]\nmax_hops = 0\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            PlannerConfig::from_toml("capacity = \"many\"\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.toml");
        fs::write(&path, "capacity = 12\n").unwrap();

        let config = PlannerConfig::load(&path).unwrap();
        assert_eq!(config.capacity, 12);
        assert!(PlannerConfig::load(dir.path().join("missing.toml")).is_err());
        assert_eq!(PlannerConfig::resolve(Some(&path)).unwrap().capacity, 12);
    }
}
