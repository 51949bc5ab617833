//! # Bytecode Selector Matching
//!
//! Heuristic inspection of deployed bytecode. Nothing here disassembles
//! code: a selector counts as present when its hex text appears anywhere in
//! the hex rendering of the bytecode.

pub mod matcher;
pub mod report;
pub mod selectors;

pub use matcher::{find_missing, has_selector};
pub use report::{classify_standard, CheckReport, CONTRACT_TYPE_ERC20};
pub use selectors::{
    describe_selector, SelectorInfo, ERC20_CHECK_LIST, KNOWN_SELECTORS, MINT_SELECTOR,
    PAUSE_SELECTOR,
};
