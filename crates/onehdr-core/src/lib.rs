//! onehdr Core
//!
//! Shared types, errors and configuration for the onehdr header merger.

pub mod config;
pub mod error;
pub mod types;

pub use config::MergeConfig;
pub use error::{Error, Result};
pub use types::*;
