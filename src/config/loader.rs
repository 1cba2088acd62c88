//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! parameters from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::StatutoryConfig;

/// Loads and validates statutory configuration.
///
/// # File Format
///
/// ```text
/// jurisdiction: Zona Libre de la Frontera Norte
/// effective_date: 2025-01-01
/// source_url: https://www.gob.mx/conasami
/// zone_minimum_wage: "419.88"
/// general_minimum_wage: "248.93"
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/zona_libre_frontera_norte.yaml").unwrap();
/// println!("Zone minimum wage: ${}", loader.config().zone_minimum_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or misses a required field
    /// - The zone minimum wage is not greater than zero
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Loads configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use severance_engine::config::ConfigLoader;
    ///
    /// let yaml = r#"
    /// jurisdiction: Zona General
    /// effective_date: 2025-01-01
    /// source_url: https://www.gob.mx/conasami
    /// zone_minimum_wage: "278.80"
    /// "#;
    /// let loader = ConfigLoader::from_yaml_str(yaml)?;
    /// assert_eq!(loader.config().jurisdiction, "Zona General");
    /// # Ok::<(), severance_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: StatutoryConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;

        Ok(Self { config })
    }

    fn validate(config: &StatutoryConfig) -> EngineResult<()> {
        if config.zone_minimum_wage <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "zone_minimum_wage".to_string(),
                message: format!("must be greater than 0, got {}", config.zone_minimum_wage),
            });
        }

        if config
            .general_minimum_wage
            .is_some_and(|wage| wage <= Decimal::ZERO)
        {
            return Err(EngineError::InvalidConfig {
                field: "general_minimum_wage".to_string(),
                message: "must be greater than 0 when present".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the loaded statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> StatutoryConfig {
        self.config
    }
}
