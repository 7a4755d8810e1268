use anyhow::Result;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use shared_staking_utils::address::derive_account_address;
use shared_staking_verifier::chain::in_memory::InMemoryChain;
use shared_staking_verifier::chain::types::TxResponse;
use shared_staking_verifier::{ProofRecord, SHARED_STAKING_MEMO};

pub const OPERATORS_JSON: &str = include_str!("../operators.json");

lazy_static! {
    pub static ref OPERATORS: Vec<Operator> = {
        serde_json::from_str(OPERATORS_JSON).expect("Failed to parse static operators.json")
    };
}

/// An operator running both a consensus validator and a protocol staker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Operator {
    pub name: String,
    pub consensus_address: String,
    pub account_address: String,
    pub protocol_address: String,
    pub proof_1: String,
    pub proof_2: String,
}

impl Operator {
    pub fn proof_record(&self) -> ProofRecord {
        ProofRecord {
            name: Some(self.name.clone()),
            consensus_address: self.consensus_address.clone(),
            protocol_address: self.protocol_address.clone(),
            proof_1: self.proof_1.clone(),
            proof_2: self.proof_2.clone(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Registers the operator's validator, staker and both proof transfers.
    pub fn register(&self, chain: &mut InMemoryChain) -> Result<()> {
        let account = derive_account_address(&self.consensus_address)?;
        chain.add_validator(&self.consensus_address);
        chain.add_staker(&self.protocol_address);
        chain.add_transaction(
            &self.proof_1,
            TxResponse::transfer(SHARED_STAKING_MEMO, &self.protocol_address, &account),
        );
        chain.add_transaction(
            &self.proof_2,
            TxResponse::transfer(SHARED_STAKING_MEMO, &account, &self.protocol_address),
        );
        Ok(())
    }
}

pub struct Devnet;

impl Devnet {
    pub fn new() -> Self {
        Self
    }

    pub fn operators(&self, count: Option<usize>) -> Result<Vec<Operator>> {
        let count = count.unwrap_or_else(|| OPERATORS.len());

        if count > OPERATORS.len() {
            return Err(anyhow::anyhow!("not enough devnet operators"));
        }

        Ok(OPERATORS.iter().take(count).cloned().collect())
    }

    pub fn operator(&self, index: usize) -> Result<Operator> {
        OPERATORS
            .get(index)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("not enough devnet operators"))
    }

    /// An in-memory chain on which the first `count` operators hold valid proofs.
    pub fn chain(&self, count: Option<usize>) -> Result<InMemoryChain> {
        let mut chain = InMemoryChain::new();
        for operator in self.operators(count)? {
            operator.register(&mut chain)?;
        }
        Ok(chain)
    }

    pub fn proof_records(&self, count: Option<usize>) -> Result<Vec<ProofRecord>> {
        Ok(self
            .operators(count)?
            .iter()
            .map(Operator::proof_record)
            .collect())
    }

    /// Writes one `<name>.json` proof file per operator into `dir`.
    pub fn write_proofs(&self, dir: &Path, count: Option<usize>) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let mut paths = Vec::new();
        for operator in self.operators(count)? {
            let path = dir.join(operator.file_name());
            let json = serde_json::to_string_pretty(&operator.proof_record())?;
            std::fs::write(&path, json)?;
            paths.push(path);
        }
        Ok(paths)
    }
}

impl Default for Devnet {
    fn default() -> Self {
        Self::new()
    }
}

// Public interface
pub fn new() -> Devnet {
    Devnet::new()
}
