use anyhow::Result;
use config::{Config, Environment, File};
use core_logic::config::ChainConfig;
use core_logic::ConfigError;
use ethers::types::Address;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_RPC_URL: &str = "https://public-node-api.klaytnapi.com/v1/cypress";
pub const DEFAULT_CHAIN_ID: u64 = 8217;

fn default_name() -> String {
    "klaytn-cypress".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct KlaytnConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub rpc_url: String,
    pub chain_id: u64,
    /// Contract to probe. Any hex casing is accepted.
    pub address: String,
}

impl KlaytnConfig {
    /// Loads `path`, then applies `KLAYTN_*` environment overrides.
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`load`](Self::load), but reads overrides from `env` instead
    /// of the process environment when given.
    pub fn load_with_env(path: &str, env: Option<HashMap<String, String>>) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string(),
            }
            .into());
        }

        let settings = Config::builder()
            .set_default("rpc_url", DEFAULT_RPC_URL)?
            .set_default("chain_id", DEFAULT_CHAIN_ID as i64)?
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("KLAYTN").source(env))
            .build()?;

        settings.try_deserialize().map_err(|e| anyhow::anyhow!(e))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.rpc_url.trim();
        if url.is_empty()
            || !self.to_chain_config().has_http_endpoint()
            || url::Url::parse(url).is_err()
        {
            return Err(ConfigError::InvalidRpcUrl {
                url: self.rpc_url.clone(),
            });
        }

        if self.address.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "address".to_string(),
            });
        }
        Address::from_str(self.address.trim()).map_err(|e| ConfigError::InvalidValue {
            field: "address".to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// CLI values win over both the file and the environment.
    pub fn apply_overrides(&mut self, address: Option<String>, rpc_url: Option<String>) {
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(rpc_url) = rpc_url {
            self.rpc_url = rpc_url;
        }
    }

    pub fn to_chain_config(&self) -> ChainConfig {
        ChainConfig::new(&self.name, self.rpc_url.trim(), self.chain_id)
    }
}
