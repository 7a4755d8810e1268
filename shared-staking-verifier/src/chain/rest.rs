use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::chain::types::{StakerResponse, TxResponse, ValidatorResponse};
use crate::chain::ChainApi;
use crate::{Error, Result};

/// [`ChainApi`] backed by a node's REST (gRPC gateway) endpoint.
///
/// Requests are never retried. A non-success status is read as "absent";
/// transport failures and bodies that do not match the expected schema are
/// errors.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    endpoint: String,
}

impl RestClient {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| Error::Transport {
            url: endpoint.to_string(),
            source,
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/cosmos/tx/v1beta1/txs/{}", self.endpoint, tx_hash)
    }

    pub fn validator_url(&self, address: &str) -> String {
        format!("{}/cosmos/staking/v1beta1/validators/{}", self.endpoint, address)
    }

    pub fn staker_url(&self, address: &str) -> String {
        format!("{}/kyve/query/v1beta1/staker/{}", self.endpoint, address)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<Option<T>> {
        log::debug!("GET {}", url);

        let transport = |source| Error::Transport {
            url: url.clone(),
            source,
        };

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("GET {} returned HTTP {}", url, status);
            return Ok(None);
        }

        let body = response.bytes().await.map_err(transport)?;
        parse_body(&url, &body).map(Some)
    }
}

pub(crate) fn parse_body<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| Error::Schema {
        url: url.to_string(),
        source,
    })
}

#[async_trait]
impl ChainApi for RestClient {
    async fn consensus_validator(&self, address: &str) -> Result<Option<ValidatorResponse>> {
        self.get_json(self.validator_url(address)).await
    }

    async fn protocol_staker(&self, address: &str) -> Result<Option<StakerResponse>> {
        self.get_json(self.staker_url(address)).await
    }

    async fn transaction(&self, tx_hash: &str) -> Result<Option<TxResponse>> {
        self.get_json(self.tx_url(tx_hash)).await
    }
}
