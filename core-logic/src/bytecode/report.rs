use serde::{Deserialize, Serialize};

pub const CONTRACT_TYPE_ERC20: &str = "ERC-20";

/// Outcome of an ERC-20 bytecode check.
///
/// The label is fixed; `eip_standard` is advisory and only says that every
/// required marker showed up somewhere in the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub contract_type: String,
    pub eip_standard: bool,
    pub missing_data: Vec<String>,
}

impl CheckReport {
    pub fn is_standard(&self) -> bool {
        self.eip_standard
    }

    pub fn missing_count(&self) -> usize {
        self.missing_data.len()
    }
}

/// Builds the report for a list of missing markers.
pub fn classify_standard(missing: Vec<String>) -> CheckReport {
    CheckReport {
        contract_type: CONTRACT_TYPE_ERC20.to_string(),
        eip_standard: missing.is_empty(),
        missing_data: missing,
    }
}
