//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load the pay policy and company
//! metadata from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/quickhire").unwrap();
//! println!("Loaded config for: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyMetadata, PayrollConfig, PayrollPolicy};
