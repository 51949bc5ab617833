use anyhow::Result;
use async_trait::async_trait;

/// Anything that can hand back the deployed code of an account.
#[async_trait]
pub trait BytecodeSource: Send + Sync {
    /// Short name of the backing endpoint, used in log lines
    fn endpoint(&self) -> &str;

    /// Returns the code at `address` as lowercase hex without a `0x` prefix.
    /// Accounts without code yield an empty string.
    async fn get_code_hex(&self, address: &str) -> Result<String>;
}
