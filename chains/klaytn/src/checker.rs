use anyhow::{Context, Result};
use core_logic::{
    classify_standard, describe_selector, find_missing, has_selector, BytecodeSource,
    CheckReport, MINT_SELECTOR, PAUSE_SELECTOR,
};
use tracing::{debug, warn};

/// Runs selector heuristics against code fetched from a [`BytecodeSource`].
///
/// Every check fetches the code again; nothing is cached between calls.
#[derive(Debug)]
pub struct BytecodeChecker<S> {
    source: S,
}

impl<S: BytecodeSource> BytecodeChecker<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    async fn fetch_code(&self, address: &str) -> Result<String> {
        let code = self
            .source
            .get_code_hex(address)
            .await
            .with_context(|| format!("Failed to fetch code for {}", address))?;

        debug!(
            "Code at {} via {}: {} bytes",
            address,
            self.source.endpoint(),
            code.len() / 2
        );
        if code.is_empty() {
            warn!("No code deployed at {}; every selector will be missing", address);
        }

        Ok(code)
    }

    /// Selectors from `check_list` absent from the code at `address`.
    pub async fn check_bytecode_elements<T: AsRef<str>>(
        &self,
        address: &str,
        check_list: &[T],
    ) -> Result<Vec<String>> {
        let code = self.fetch_code(address).await?;
        let missing = find_missing(&code, check_list);

        for selector in &missing {
            warn!(
                "{} missing {} ({})",
                address,
                selector,
                describe_selector(selector).unwrap_or("unknown signature")
            );
        }

        Ok(missing)
    }

    pub async fn check_contract_bytecode<T: AsRef<str>>(
        &self,
        address: &str,
        check_list: &[T],
    ) -> Result<CheckReport> {
        let missing = self.check_bytecode_elements(address, check_list).await?;
        Ok(classify_standard(missing))
    }

    pub async fn check_bytecode_is_mint(&self, address: &str) -> Result<bool> {
        let code = self.fetch_code(address).await?;
        Ok(has_selector(&code, MINT_SELECTOR))
    }

    pub async fn check_bytecode_is_pause(&self, address: &str) -> Result<bool> {
        let code = self.fetch_code(address).await?;
        Ok(has_selector(&code, PAUSE_SELECTOR))
    }
}
