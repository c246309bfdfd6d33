//! Configuration loading and validation
//!
//! Configuration can live in `bounties.[toml|yml|yaml|json]` in the working
//! directory or at an explicit path. All fields are optional; unspecified
//! fields use the defaults embedded in `default_config.yml`.

mod config;

pub use config::{Config, DEFAULT_CONFIG_YAML, DollarConvention};
