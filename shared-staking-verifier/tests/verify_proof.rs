use anyhow::Result;

use shared_staking_devnet::Devnet;
use shared_staking_verifier::chain::in_memory::{InMemoryChain, Request};
use shared_staking_verifier::chain::types::TxMessage;
use shared_staking_verifier::{verify_proof, AddressField, Error, ProofRecord, Resource};

fn setup() -> Result<(InMemoryChain, ProofRecord, String)> {
    let devnet = Devnet::new();
    let chain = devnet.chain(Some(1))?;
    let operator = devnet.operator(0)?;
    Ok((chain, operator.proof_record(), operator.account_address))
}

#[tokio::test]
async fn test_valid_proof() -> Result<()> {
    let (chain, proof, _) = setup()?;

    verify_proof(&chain, &proof).await?;

    assert_eq!(
        chain.requests(),
        vec![
            Request::ConsensusValidator(proof.consensus_address.clone()),
            Request::ProtocolStaker(proof.protocol_address.clone()),
            Request::Transaction(proof.proof_1.clone()),
            Request::Transaction(proof.proof_2.clone()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_wrong_memo() -> Result<()> {
    let (mut chain, proof, _) = setup()?;
    chain.transaction_mut(&proof.proof_1).unwrap().tx.body.memo = "wrong-memo".to_string();

    match verify_proof(&chain, &proof).await {
        Err(Error::MemoMismatch {
            tx_hash,
            expected,
            actual,
        }) => {
            assert_eq!(tx_hash, proof.proof_1);
            assert_eq!(expected, "Shared-Staking");
            assert_eq!(actual, "wrong-memo");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_memo_is_compared_exactly() -> Result<()> {
    let (mut chain, proof, _) = setup()?;
    chain.transaction_mut(&proof.proof_2).unwrap().tx.body.memo = "Shared Staking".to_string();

    let err = verify_proof(&chain, &proof).await.unwrap_err();
    assert!(matches!(err, Error::MemoMismatch { ref tx_hash, .. } if *tx_hash == proof.proof_2));
    Ok(())
}

#[tokio::test]
async fn test_wrong_sender() -> Result<()> {
    let (mut chain, proof, _) = setup()?;
    let impostor = Devnet::new().operator(1)?.protocol_address;
    chain.transaction_mut(&proof.proof_1).unwrap().tx.body.messages[0].from_address =
        Some(impostor.clone());

    match verify_proof(&chain, &proof).await {
        Err(Error::AddressMismatch {
            tx_hash,
            field,
            expected,
            actual,
        }) => {
            assert_eq!(tx_hash, proof.proof_1);
            assert_eq!(field, AddressField::From);
            assert_eq!(expected, proof.protocol_address);
            assert_eq!(actual, impostor);
        }
        other => panic!("unexpected result: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_reversed_transfer_is_rejected() -> Result<()> {
    let (mut chain, proof, account) = setup()?;
    // proof_2 sent the same way as proof_1
    let message = &mut chain.transaction_mut(&proof.proof_2).unwrap().tx.body.messages[0];
    message.from_address = Some(proof.protocol_address.clone());
    message.to_address = Some(account.clone());

    match verify_proof(&chain, &proof).await {
        Err(Error::AddressMismatch {
            tx_hash,
            field,
            expected,
            ..
        }) => {
            assert_eq!(tx_hash, proof.proof_2);
            assert_eq!(field, AddressField::From);
            assert_eq!(expected, account);
        }
        other => panic!("unexpected result: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_wrong_recipient() -> Result<()> {
    let (mut chain, proof, account) = setup()?;
    chain.transaction_mut(&proof.proof_1).unwrap().tx.body.messages[0].to_address =
        Some(proof.consensus_address.clone());

    let err = verify_proof(&chain, &proof).await.unwrap_err();
    match err {
        Error::AddressMismatch {
            field,
            expected,
            actual,
            ..
        } => {
            assert_eq!(field, AddressField::To);
            assert_eq!(expected, account);
            assert_eq!(actual, proof.consensus_address);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_only_first_message_counts() -> Result<()> {
    let (mut chain, proof, _) = setup()?;
    let messages = &mut chain.transaction_mut(&proof.proof_1).unwrap().tx.body.messages;
    let genuine = messages.remove(0);
    messages.push(TxMessage {
        type_url: Some("/kyve.stakers.v1beta1.MsgUpdateMetadata".to_string()),
        from_address: None,
        to_address: None,
    });
    messages.push(genuine);

    let err = verify_proof(&chain, &proof).await.unwrap_err();
    assert!(matches!(err, Error::NotATransfer(ref hash) if *hash == proof.proof_1));
    Ok(())
}

#[tokio::test]
async fn test_missing_consensus_validator() -> Result<()> {
    let (mut chain, proof, _) = setup()?;
    assert!(chain.remove_validator(&proof.consensus_address));

    match verify_proof(&chain, &proof).await {
        Err(Error::NotFound { resource, id }) => {
            assert_eq!(resource, Resource::ConsensusValidator);
            assert_eq!(id, proof.consensus_address);
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(
        chain.requests(),
        vec![Request::ConsensusValidator(proof.consensus_address.clone())]
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_protocol_validator() -> Result<()> {
    let (mut chain, proof, _) = setup()?;
    assert!(chain.remove_staker(&proof.protocol_address));

    let err = verify_proof(&chain, &proof).await.unwrap_err();
    assert!(matches!(
        err,
        Error::NotFound {
            resource: Resource::ProtocolValidator,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        format!("protocol validator does not exist: {}", proof.protocol_address)
    );
    assert!(!chain
        .requests()
        .iter()
        .any(|r| matches!(r, Request::Transaction(_))));
    Ok(())
}

#[tokio::test]
async fn test_missing_transaction() -> Result<()> {
    let (mut chain, proof, _) = setup()?;
    assert!(chain.remove_transaction(&proof.proof_2).is_some());

    let err = verify_proof(&chain, &proof).await.unwrap_err();
    assert!(matches!(
        err,
        Error::NotFound {
            resource: Resource::Transaction,
            ref id,
        } if *id == proof.proof_2
    ));
    Ok(())
}

#[tokio::test]
async fn test_undecodable_consensus_address() -> Result<()> {
    let (mut chain, mut proof, _) = setup()?;
    proof.consensus_address = "kyvevaloper1notbech32".to_string();
    chain.add_validator(&proof.consensus_address);
    chain.clear_requests();

    let err = verify_proof(&chain, &proof).await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert_eq!(chain.requests().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_every_devnet_proof_is_valid() -> Result<()> {
    let devnet = Devnet::new();
    let chain = devnet.chain(None)?;

    let proofs = devnet.proof_records(None)?;
    assert_eq!(proofs.len(), 3);
    for proof in &proofs {
        verify_proof(&chain, proof).await?;
    }
    assert_eq!(chain.requests().len(), 4 * proofs.len());
    Ok(())
}
