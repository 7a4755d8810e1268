pub mod in_memory;
pub mod rest;
pub mod types;

use async_trait::async_trait;

use crate::Result;
use types::{StakerResponse, TxResponse, ValidatorResponse};

/// Read-only view of a KYVE chain. Each lookup returns `Ok(None)` when the
/// chain reports the resource as absent.
#[async_trait]
pub trait ChainApi: Send + Sync {
    async fn consensus_validator(&self, address: &str) -> Result<Option<ValidatorResponse>>;
    async fn protocol_staker(&self, address: &str) -> Result<Option<StakerResponse>>;
    async fn transaction(&self, tx_hash: &str) -> Result<Option<TxResponse>>;
}
