//! # Klaytn Bytecode Probe
//!
//! Fetches deployed code from a Klaytn node and runs the selector heuristics
//! from `core-logic` against it.

pub mod checker;
pub mod config;
pub mod provider;

pub use checker::BytecodeChecker;
pub use config::KlaytnConfig;
pub use provider::{to_checksum_address, Web3Provider};
