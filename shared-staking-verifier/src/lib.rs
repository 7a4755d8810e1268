pub mod chain;
mod error;
pub mod networks;
pub mod proof;
pub mod runner;
pub mod verifier;

pub use error::{AddressField, Error, Resource};
pub use proof::ProofRecord;
pub use runner::{verify_network, NetworkStatus, ProofOutcome};
pub use verifier::{verify_proof, SHARED_STAKING_MEMO};

pub type Result<T> = std::result::Result<T, Error>;
