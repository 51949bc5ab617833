use core_logic::config::ChainConfig;
use core_logic::{ConfigError, CoreError, NetworkError};

#[test]
fn test_chain_config() {
    let config = ChainConfig::new(
        "Klaytn Cypress",
        "https://public-node-api.klaytnapi.com/v1/cypress",
        8217,
    );

    assert_eq!(config.name, "Klaytn Cypress");
    assert_eq!(config.chain_id, 8217);
    assert!(config.has_http_endpoint());
}

#[test]
fn test_chain_config_rejects_non_http() {
    let ws = ChainConfig::new("ws", "wss://rpc.example.com", 1);
    let blank = ChainConfig::new("blank", "   ", 1);

    assert!(!ws.has_http_endpoint());
    assert!(!blank.has_http_endpoint());
}

#[test]
fn test_chain_config_roundtrips_through_json() {
    let config = ChainConfig::new("Ethereum Mainnet", "https://eth.example.com", 1);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: ChainConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_errors_convert_into_core_error() {
    let config: CoreError = ConfigError::MissingField {
        field: "rpc_url".to_string(),
    }
    .into();
    let network: CoreError = NetworkError::InvalidResponse {
        endpoint: "https://rpc.example.com".to_string(),
        reason: "not hex".to_string(),
    }
    .into();

    assert!(matches!(config, CoreError::Config(ConfigError::MissingField { .. })));
    assert!(network.to_string().contains("not hex"));
}
