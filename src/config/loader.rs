//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tariff
//! from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    CarrierCatalog, QuoteConfig, RateTable, RegionsConfig, TariffMetadata, TransitTable,
};

/// Loads and provides access to a tariff.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them into a [`QuoteConfig`] before anything can be priced.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── tariff.yaml    # Name, version, currency, validity, weight policy
/// ├── regions.yaml   # Region codes and the place names that match them
/// ├── rates.yaml     # Service defaults, lane rates, cargo surcharges
/// ├── transit.yaml   # Transit day ranges per service type
/// └── carriers.yaml  # Carrier templates per service type
/// ```
///
/// # Example
///
/// ```no_run
/// use freight_quote_engine::config::ConfigLoader;
/// use freight_quote_engine::models::ServiceType;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let carriers = loader.config().catalog().templates(ServiceType::Sea);
/// println!("Sea carriers: {}", carriers.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: QuoteConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The files together violate a tariff invariant (for example an
    ///   empty carrier list)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use freight_quote_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), freight_quote_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tariff = Self::load_yaml::<TariffMetadata>(&path.join("tariff.yaml"))?;
        let regions = Self::load_yaml::<RegionsConfig>(&path.join("regions.yaml"))?;
        let rate_table = Self::load_yaml::<RateTable>(&path.join("rates.yaml"))?;
        let transit = Self::load_yaml::<TransitTable>(&path.join("transit.yaml"))?;
        let catalog = Self::load_yaml::<CarrierCatalog>(&path.join("carriers.yaml"))?;

        let config = QuoteConfig::new(tariff, regions.regions, rate_table, transit, catalog)?;

        Ok(Self { config })
    }

    /// Wraps an already-validated configuration.
    pub fn from_config(config: QuoteConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying tariff configuration.
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Returns the tariff metadata.
    pub fn tariff(&self) -> &TariffMetadata {
        self.config.tariff()
    }
}
