//! Configuration module for driftnet
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. The config file is optional: every field has a default matching the
//! crawler's built-in behavior.
//!
//! # Example
//!
//! ```no_run
//! use driftnet::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("driftnet.toml")).unwrap();
//! println!("Read timeout: {}ms", config.fetch.read_timeout_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, OutputConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::load_config;
