//! # Core Logic - Shared Bytecode Probing Utilities
//!
//! This crate provides the chain-agnostic pieces used by every chain probe:
//! the selector matcher, the report type, error handling, configuration and
//! logging.
//!
//! ## Modules
//!
//! - [`bytecode`] - Selector constants, matcher and `CheckReport`
//! - [`config`] - Configuration structures shared by chain crates
//! - [`error`] - Typed error handling with thiserror
//! - [`traits`] - Core trait definitions
//! - [`utils`] - Utility modules (logging)

// Module declarations - internal modules marked pub(crate)
pub mod bytecode;
pub mod config;
pub mod error;
pub mod traits;
pub(crate) mod utils;

// Selective exports - only public API types
pub use bytecode::{
    classify_standard, describe_selector, find_missing, has_selector, CheckReport, SelectorInfo,
    CONTRACT_TYPE_ERC20, ERC20_CHECK_LIST, KNOWN_SELECTORS, MINT_SELECTOR, PAUSE_SELECTOR,
};
pub use config::ChainConfig;
pub use error::{ConfigError, CoreError, NetworkError};
pub use traits::BytecodeSource;

// Utils are pub(crate) - only export specific public utilities
pub use utils::setup_logger;
