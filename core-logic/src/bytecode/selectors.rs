//! Known function selectors and event topics.
//!
//! Function entries are the first 4 bytes of `keccak256(signature)`, event
//! entries are the full 32-byte topic. All hex is lowercase.

/// `transfer(address,uint256)`
pub const TRANSFER_SELECTOR: &str = "a9059cbb";
/// `approve(address,uint256)`
pub const APPROVE_SELECTOR: &str = "095ea7b3";
/// `balanceOf(address)`
pub const BALANCE_OF_SELECTOR: &str = "70a08231";
/// `transferFrom(address,address,uint256)`
pub const TRANSFER_FROM_SELECTOR: &str = "23b872dd";
/// `allowance(address,address)`
pub const ALLOWANCE_SELECTOR: &str = "dd62ed3e";
/// `totalSupply()`
pub const TOTAL_SUPPLY_SELECTOR: &str = "18160ddd";
/// `Transfer(address,address,uint256)` event topic
pub const TRANSFER_TOPIC: &str =
    "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";
/// `Approval(address,address,uint256)` event topic
pub const APPROVAL_TOPIC: &str =
    "8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925";
/// `mint(address,uint256)`
pub const MINT_SELECTOR: &str = "40c10f19";
/// `pause()`
pub const PAUSE_SELECTOR: &str = "8456cb59";

/// Required markers for the ERC-20 check, in report order.
pub const ERC20_CHECK_LIST: [&str; 8] = [
    TRANSFER_SELECTOR,
    APPROVE_SELECTOR,
    BALANCE_OF_SELECTOR,
    TRANSFER_FROM_SELECTOR,
    ALLOWANCE_SELECTOR,
    TOTAL_SUPPLY_SELECTOR,
    TRANSFER_TOPIC,
    APPROVAL_TOPIC,
];

/// A selector constant paired with the signature it was hashed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorInfo {
    pub hex: &'static str,
    pub signature: &'static str,
    pub is_event: bool,
}

impl SelectorInfo {
    const fn function(hex: &'static str, signature: &'static str) -> Self {
        Self {
            hex,
            signature,
            is_event: false,
        }
    }

    const fn event(hex: &'static str, signature: &'static str) -> Self {
        Self {
            hex,
            signature,
            is_event: true,
        }
    }
}

pub const KNOWN_SELECTORS: [SelectorInfo; 10] = [
    SelectorInfo::function(TRANSFER_SELECTOR, "transfer(address,uint256)"),
    SelectorInfo::function(APPROVE_SELECTOR, "approve(address,uint256)"),
    SelectorInfo::function(BALANCE_OF_SELECTOR, "balanceOf(address)"),
    SelectorInfo::function(
        TRANSFER_FROM_SELECTOR,
        "transferFrom(address,address,uint256)",
    ),
    SelectorInfo::function(ALLOWANCE_SELECTOR, "allowance(address,address)"),
    SelectorInfo::function(TOTAL_SUPPLY_SELECTOR, "totalSupply()"),
    SelectorInfo::event(TRANSFER_TOPIC, "Transfer(address,address,uint256)"),
    SelectorInfo::event(APPROVAL_TOPIC, "Approval(address,address,uint256)"),
    SelectorInfo::function(MINT_SELECTOR, "mint(address,uint256)"),
    SelectorInfo::function(PAUSE_SELECTOR, "pause()"),
];

/// Signature for a known selector, if any. Lookup ignores ASCII case.
pub fn describe_selector(hex: &str) -> Option<&'static str> {
    KNOWN_SELECTORS
        .iter()
        .find(|info| info.hex.eq_ignore_ascii_case(hex))
        .map(|info| info.signature)
}
