use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::chain::types::{Staker, StakerResponse, TxResponse, Validator, ValidatorResponse};
use crate::chain::ChainApi;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ConsensusValidator(String),
    ProtocolStaker(String),
    Transaction(String),
}

/// A chain held in process memory. Every lookup is recorded so callers can
/// assert which requests were made.
#[derive(Debug, Default)]
pub struct InMemoryChain {
    validators: HashSet<String>,
    stakers: HashSet<String>,
    transactions: HashMap<String, TxResponse>,
    requests: Mutex<Vec<Request>>,
}

impl InMemoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_validator(&mut self, operator_address: &str) {
        self.validators.insert(operator_address.to_string());
    }

    pub fn add_staker(&mut self, address: &str) {
        self.stakers.insert(address.to_string());
    }

    pub fn add_transaction(&mut self, tx_hash: &str, tx: TxResponse) {
        self.transactions.insert(tx_hash.to_string(), tx);
    }

    pub fn remove_validator(&mut self, operator_address: &str) -> bool {
        self.validators.remove(operator_address)
    }

    pub fn remove_staker(&mut self, address: &str) -> bool {
        self.stakers.remove(address)
    }

    pub fn remove_transaction(&mut self, tx_hash: &str) -> Option<TxResponse> {
        self.transactions.remove(tx_hash)
    }

    pub fn transaction_mut(&mut self, tx_hash: &str) -> Option<&mut TxResponse> {
        self.transactions.get_mut(tx_hash)
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn clear_requests(&self) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.clear();
        }
    }

    fn record(&self, request: Request) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }
}

#[async_trait]
impl ChainApi for InMemoryChain {
    async fn consensus_validator(&self, address: &str) -> Result<Option<ValidatorResponse>> {
        self.record(Request::ConsensusValidator(address.to_string()));
        Ok(self.validators.get(address).map(|operator_address| ValidatorResponse {
            validator: Validator {
                operator_address: operator_address.clone(),
            },
        }))
    }

    async fn protocol_staker(&self, address: &str) -> Result<Option<StakerResponse>> {
        self.record(Request::ProtocolStaker(address.to_string()));
        Ok(self.stakers.get(address).map(|address| StakerResponse {
            staker: Staker {
                address: address.clone(),
            },
        }))
    }

    async fn transaction(&self, tx_hash: &str) -> Result<Option<TxResponse>> {
        self.record(Request::Transaction(tx_hash.to_string()));
        Ok(self.transactions.get(tx_hash).cloned())
    }
}
