//! Configuration loading and management for the Severance Engine.
//!
//! This module loads the statutory parameters (zone minimum wage and its
//! metadata) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/zona_libre_frontera_norte.yaml").unwrap();
//! println!("Loaded parameters for: {}", config.config().jurisdiction);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::StatutoryConfig;
