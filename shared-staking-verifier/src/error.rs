use std::fmt;
use std::path::PathBuf;

use shared_staking_utils::address::AddressError;
use thiserror::Error;

/// Remote resources a proof depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    ConsensusValidator,
    ProtocolValidator,
    Transaction,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::ConsensusValidator => write!(f, "consensus validator"),
            Resource::ProtocolValidator => write!(f, "protocol validator"),
            Resource::Transaction => write!(f, "transaction"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    From,
    To,
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressField::From => write!(f, "from_address"),
            AddressField::To => write!(f, "to_address"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] AddressError),

    #[error("{resource} does not exist: {id}")]
    NotFound { resource: Resource, id: String },

    #[error("incorrect memo for transaction {tx_hash}. Expected: {expected:?}, got: {actual:?}")]
    MemoMismatch {
        tx_hash: String,
        expected: String,
        actual: String,
    },

    #[error("incorrect {field} for transaction {tx_hash}. Expected: {expected}, got: {actual}")]
    AddressMismatch {
        tx_hash: String,
        field: AddressField,
        expected: String,
        actual: String,
    },

    #[error("transaction {0} does not start with a transfer message")]
    NotATransfer(String),

    #[error("unexpected response from {url}: {source}")]
    Schema {
        url: String,
        source: serde_json::Error,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("invalid proof record {}: {reason}", path.display())]
    InvalidRecord { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
