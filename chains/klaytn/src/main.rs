use anyhow::{Context, Result};
use clap::Parser;
use core_logic::{setup_logger, ERC20_CHECK_LIST};
use dotenv::dotenv;
use klaytn_project::{to_checksum_address, BytecodeChecker, KlaytnConfig, Web3Provider};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "chains/klaytn/config.toml")]
    config: String,
    /// Contract address to probe, overrides the config file
    #[arg(short, long)]
    address: Option<String>,
    /// RPC endpoint, overrides the config file
    #[arg(long)]
    rpc_url: Option<String>,
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    // Keep guard alive for file logging
    let _log_guard = setup_logger(&args.log_dir);

    info!("Loading config from: {}", args.config);
    let mut config = KlaytnConfig::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    config.apply_overrides(args.address, args.rpc_url);
    config.validate()?;

    let chain = config.to_chain_config();
    info!(
        "Configuration loaded for {} (chain ID {})",
        chain.name, chain.chain_id
    );

    let provider = Web3Provider::new(&chain.rpc_endpoint)?;
    let checker = BytecodeChecker::new(provider);
    let address = to_checksum_address(&config.address)?;

    let report = checker
        .check_contract_bytecode(&address, &ERC20_CHECK_LIST)
        .await?;
    let is_mint = checker.check_bytecode_is_mint(&address).await?;
    let is_pause = checker.check_bytecode_is_pause(&address).await?;

    info!(
        target: "check_result",
        "{} ERC-20 {} ({} missing)",
        address,
        if report.is_standard() { "PRESENT" } else { "MISSING" },
        report.missing_count()
    );
    info!(
        target: "check_result",
        "{} mint {} | pause {}",
        address,
        if is_mint { "PRESENT" } else { "MISSING" },
        if is_pause { "PRESENT" } else { "MISSING" }
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    println!("{}", is_mint);
    println!("{}", is_pause);

    Ok(())
}
