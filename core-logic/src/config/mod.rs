use serde::{Deserialize, Serialize};

/// Endpoint description shared by every chain probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainConfig {
    pub name: String,
    pub rpc_endpoint: String,
    pub chain_id: u64,
}

impl ChainConfig {
    pub fn new(name: &str, rpc_endpoint: &str, chain_id: u64) -> Self {
        Self {
            name: name.to_string(),
            rpc_endpoint: rpc_endpoint.to_string(),
            chain_id,
        }
    }

    /// Only plain http(s) endpoints are supported by the probe providers.
    pub fn has_http_endpoint(&self) -> bool {
        let url = self.rpc_endpoint.trim();
        url.starts_with("http://") || url.starts_with("https://")
    }
}
