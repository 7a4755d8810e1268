use shared_staking_utils::address::derive_account_address;

use crate::chain::ChainApi;
use crate::error::{AddressField, Resource};
use crate::proof::ProofRecord;
use crate::{Error, Result};

/// Memo both proof transfers must carry, compared byte for byte.
pub const SHARED_STAKING_MEMO: &str = "Shared-Staking";

/// Checks that both validators exist and that the two proof transfers link
/// them: `proof_1` flows from the protocol address to the operator's
/// account, `proof_2` flows back. Stops at the first failed check.
pub async fn verify_proof<C: ChainApi + ?Sized>(chain: &C, proof: &ProofRecord) -> Result<()> {
    if chain
        .consensus_validator(&proof.consensus_address)
        .await?
        .is_none()
    {
        return Err(Error::NotFound {
            resource: Resource::ConsensusValidator,
            id: proof.consensus_address.clone(),
        });
    }

    if chain
        .protocol_staker(&proof.protocol_address)
        .await?
        .is_none()
    {
        return Err(Error::NotFound {
            resource: Resource::ProtocolValidator,
            id: proof.protocol_address.clone(),
        });
    }

    let validator_account = derive_account_address(&proof.consensus_address)?;

    verify_transfer(
        chain,
        &proof.proof_1,
        &proof.protocol_address,
        &validator_account,
    )
    .await?;
    verify_transfer(
        chain,
        &proof.proof_2,
        &validator_account,
        &proof.protocol_address,
    )
    .await?;

    Ok(())
}

pub async fn verify_transfer<C: ChainApi + ?Sized>(
    chain: &C,
    tx_hash: &str,
    expect_from_address: &str,
    expect_to_address: &str,
) -> Result<()> {
    let tx = chain
        .transaction(tx_hash)
        .await?
        .ok_or_else(|| Error::NotFound {
            resource: Resource::Transaction,
            id: tx_hash.to_string(),
        })?;

    if tx.memo() != SHARED_STAKING_MEMO {
        return Err(Error::MemoMismatch {
            tx_hash: tx_hash.to_string(),
            expected: SHARED_STAKING_MEMO.to_string(),
            actual: tx.memo().to_string(),
        });
    }

    let message = tx
        .first_message()
        .ok_or_else(|| Error::NotATransfer(tx_hash.to_string()))?;
    let (from_address, to_address) = match (&message.from_address, &message.to_address) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(Error::NotATransfer(tx_hash.to_string())),
    };

    check_address(tx_hash, AddressField::From, expect_from_address, from_address)?;
    check_address(tx_hash, AddressField::To, expect_to_address, to_address)?;

    Ok(())
}

fn check_address(tx_hash: &str, field: AddressField, expected: &str, actual: &str) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    Err(Error::AddressMismatch {
        tx_hash: tx_hash.to_string(),
        field,
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}
