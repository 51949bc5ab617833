use anyhow::Result;
use async_trait::async_trait;
use core_logic::{BytecodeSource, ConfigError, NetworkError};
use ethers::prelude::*;
use ethers::providers::{ProviderError, RpcError};
use std::str::FromStr;

/// Thin wrapper over an `ethers` provider bound to a single endpoint.
#[derive(Debug)]
pub struct Web3Provider<P = Http> {
    provider: Provider<P>,
    endpoint: String,
}

impl Web3Provider<Http> {
    pub fn new(rpc_url: &str) -> Result<Self, ConfigError> {
        let provider =
            Provider::<Http>::try_from(rpc_url.trim()).map_err(|_| ConfigError::InvalidRpcUrl {
                url: rpc_url.to_string(),
            })?;

        Ok(Self {
            provider,
            endpoint: rpc_url.trim().to_string(),
        })
    }
}

impl<P: JsonRpcClient> Web3Provider<P> {
    pub fn from_provider(provider: Provider<P>, endpoint: &str) -> Self {
        Self {
            provider,
            endpoint: endpoint.to_string(),
        }
    }
}

impl<P> Web3Provider<P> {
    /// Undecodable payloads are the node's fault; everything else is transport.
    fn classify_error(&self, e: ProviderError) -> NetworkError {
        let endpoint = self.endpoint.clone();
        match RpcError::as_serde_error(&e) {
            Some(serde_err) => NetworkError::InvalidResponse {
                endpoint,
                reason: serde_err.to_string(),
            },
            None => NetworkError::RequestFailed {
                endpoint,
                reason: e.to_string(),
            },
        }
    }
}

fn parse_address(address: &str) -> Result<Address, ConfigError> {
    Address::from_str(address.trim()).map_err(|e| ConfigError::InvalidValue {
        field: "address".to_string(),
        reason: e.to_string(),
    })
}

/// Normalizes any hex casing to the EIP-55 checksum form.
pub fn to_checksum_address(address: &str) -> Result<String, ConfigError> {
    let addr = parse_address(address)?;
    Ok(ethers::utils::to_checksum(&addr, None))
}

#[async_trait]
impl<P: JsonRpcClient + 'static> BytecodeSource for Web3Provider<P> {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get_code_hex(&self, address: &str) -> Result<String> {
        let addr = parse_address(address)?;
        let code = self
            .provider
            .get_code(addr, None)
            .await
            .map_err(|e| self.classify_error(e))?;

        Ok(hex::encode(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "0x7f1712f846a69bf2a9dbc4d48f45f1d52ca32e28";

    #[test]
    fn test_new_rejects_garbage_url() {
        let err = Web3Provider::new("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRpcUrl { .. }));
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let provider = Web3Provider::new("https://rpc.example.com").unwrap();
        assert_eq!(provider.endpoint(), "https://rpc.example.com");
    }

    #[test]
    fn test_checksum_address() {
        let lower = to_checksum_address(TOKEN).unwrap();
        let upper = to_checksum_address(&TOKEN.to_uppercase().replacen("0X", "0x", 1)).unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.to_lowercase(), TOKEN);
        assert_ne!(lower, TOKEN);
    }

    #[test]
    fn test_checksum_rejects_short_address() {
        assert!(to_checksum_address("0xabc").is_err());
    }

    #[tokio::test]
    async fn test_get_code_hex_is_lowercase_without_prefix() {
        let (provider, mock) = Provider::mocked();
        mock.push::<Bytes, _>(Bytes::from(vec![0x60, 0x80, 0xA9, 0x05, 0x9C, 0xBB]))
            .unwrap();
        let web3 = Web3Provider::from_provider(provider, "mock");

        let code = web3.get_code_hex(TOKEN).await.unwrap();
        assert_eq!(code, "6080a9059cbb");
    }

    #[tokio::test]
    async fn test_get_code_hex_empty_account() {
        let (provider, mock) = Provider::mocked();
        mock.push::<Bytes, _>(Bytes::new()).unwrap();
        let web3 = Web3Provider::from_provider(provider, "mock");

        assert_eq!(web3.get_code_hex(TOKEN).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_get_code_hex_maps_rpc_failure() {
        // Nothing queued, so the mock transport errors out
        let (provider, _mock) = Provider::mocked();
        let web3 = Web3Provider::from_provider(provider, "mock");

        let err = web3.get_code_hex(TOKEN).await.unwrap_err();
        match err.downcast_ref::<NetworkError>() {
            Some(NetworkError::RequestFailed { endpoint, .. }) => assert_eq!(endpoint, "mock"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_code_hex_maps_undecodable_payload() {
        // A number where hex code is expected
        let (provider, mock) = Provider::mocked();
        mock.push::<u64, _>(7u64).unwrap();
        let web3 = Web3Provider::from_provider(provider, "mock");

        let err = web3.get_code_hex(TOKEN).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NetworkError>(),
            Some(NetworkError::InvalidResponse { endpoint, .. }) if endpoint == "mock"
        ));
    }

    #[tokio::test]
    async fn test_get_code_hex_rejects_bad_address() {
        let (provider, _mock) = Provider::mocked();
        let web3 = Web3Provider::from_provider(provider, "mock");

        let err = web3.get_code_hex("0xnothex").await.unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}
