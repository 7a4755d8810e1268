use bech32::{FromBase32, ToBase32, Variant};
use thiserror::Error;

/// Human-readable prefix of KYVE account addresses (`kyve1...`).
pub const ACCOUNT_PREFIX: &str = "kyve";

/// Human-readable prefix of KYVE validator operator addresses (`kyvevaloper1...`).
pub const OPERATOR_PREFIX: &str = "kyvevaloper";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddressError {
    #[error("invalid bech32 address {address}: {source}")]
    Decode {
        address: String,
        source: bech32::Error,
    },

    #[error("address {0} uses the bech32m checksum, expected bech32")]
    UnsupportedVariant(String),

    #[error("cannot encode payload under prefix {prefix}: {source}")]
    Encode {
        prefix: String,
        source: bech32::Error,
    },
}

pub type Result<T> = std::result::Result<T, AddressError>;

/// A decoded bech32 address: its human-readable prefix and raw payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Address {
    pub prefix: String,
    pub payload: Vec<u8>,
}

impl Bech32Address {
    pub fn with_prefix(&self, prefix: &str) -> Result<String> {
        encode(prefix, &self.payload)
    }
}

pub fn decode(address: &str) -> Result<Bech32Address> {
    let decode_err = |source| AddressError::Decode {
        address: address.to_string(),
        source,
    };

    let (prefix, data, variant) = bech32::decode(address).map_err(decode_err)?;
    if variant != Variant::Bech32 {
        return Err(AddressError::UnsupportedVariant(address.to_string()));
    }
    let payload = Vec::<u8>::from_base32(&data).map_err(decode_err)?;

    Ok(Bech32Address { prefix, payload })
}

pub fn encode(prefix: &str, payload: &[u8]) -> Result<String> {
    bech32::encode(prefix, payload.to_base32(), Variant::Bech32).map_err(|source| {
        AddressError::Encode {
            prefix: prefix.to_string(),
            source,
        }
    })
}

/// Re-encodes a validator operator address as the account address that
/// controls it. The source prefix is ignored; only the payload is kept.
pub fn derive_account_address(consensus_address: &str) -> Result<String> {
    decode(consensus_address)?.with_prefix(ACCOUNT_PREFIX)
}

/// The inverse of [`derive_account_address`].
pub fn derive_operator_address(account_address: &str) -> Result<String> {
    decode(account_address)?.with_prefix(OPERATOR_PREFIX)
}
