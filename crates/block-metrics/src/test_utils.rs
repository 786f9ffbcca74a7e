//! Transaction builders shared by the unit tests.

use alloy_consensus::{SignableTransaction, TxEip1559};
use alloy_primitives::{Address, Bytes, Sealable, TxKind, B256, U256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use op_alloy_consensus::{OpTxEnvelope, TxDeposit};

/// Build and sign an EIP-1559 transaction. `to: None` makes it a creation.
pub(crate) fn build_eip1559_tx(nonce: u64, to: Option<Address>, input: Vec<u8>) -> OpTxEnvelope {
    let tx = TxEip1559 {
        chain_id: 8453,
        nonce,
        gas_limit: 200_000,
        max_fee_per_gas: 1_500_000_000,
        max_priority_fee_per_gas: 500_000_000,
        to: to.map_or(TxKind::Create, TxKind::Call),
        value: U256::from(10_000u64),
        access_list: Default::default(),
        input: Bytes::from(input),
    };

    let signer = PrivateKeySigner::random();
    let signature = signer.sign_hash_sync(&tx.signature_hash()).expect("signing works");
    OpTxEnvelope::Eip1559(tx.into_signed(signature))
}

/// Build a deposit transaction. `to: None` makes it a creation.
pub(crate) fn build_deposit_tx(to: Option<Address>) -> OpTxEnvelope {
    let tx = TxDeposit {
        source_hash: B256::ZERO,
        from: Address::ZERO,
        to: to.map_or(TxKind::Create, TxKind::Call),
        mint: 0,
        value: U256::ZERO,
        gas_limit: 1_000_000,
        is_system_transaction: false,
        input: Bytes::new(),
    };
    OpTxEnvelope::Deposit(tx.seal_slow())
}
