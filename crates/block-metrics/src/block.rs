//! Block-level data model fed into the recorder.

use alloy_consensus::Transaction;
use alloy_eips::eip2718::Encodable2718;
use alloy_primitives::{Address, U256};
use alloy_rpc_types_engine::ExecutionPayload;
use op_alloy_consensus::{OpTxEnvelope, OpTxType};

use crate::decode::decode_transactions;

/// A flat view of one transaction, carrying exactly the fields the recorder
/// observes.
///
/// A view is fully populated by construction; a slot that failed to decode is
/// represented as `None` in [`BlockSummary::transactions`], never as a
/// partial view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionView {
    /// EIP-2718 type discriminator. [`OpTxType::Deposit`] marks transactions
    /// initiated on the settlement layer.
    pub tx_type: OpTxType,
    /// Destination address; `None` for contract creations.
    pub to: Option<Address>,
    /// EIP-2718 encoded size in bytes.
    pub size: u64,
    /// Call data length in bytes.
    pub call_data_len: usize,
    /// Sender nonce.
    pub nonce: u64,
    /// Declared gas limit.
    pub gas_limit: u64,
    /// Max fee per gas, in wei.
    pub max_fee_per_gas: u128,
    /// Priority fee per gas, in wei. Zero where the type carries none.
    pub max_priority_fee_per_gas: u128,
}

impl TransactionView {
    /// Whether this is a settlement-layer deposit.
    pub fn is_deposit(&self) -> bool {
        self.tx_type == OpTxType::Deposit
    }
}

impl From<&OpTxEnvelope> for TransactionView {
    fn from(tx: &OpTxEnvelope) -> Self {
        Self {
            tx_type: tx.tx_type(),
            to: tx.to(),
            size: tx.encode_2718_len() as u64,
            call_data_len: tx.input().len(),
            nonce: tx.nonce(),
            gas_limit: tx.gas_limit(),
            max_fee_per_gas: tx.max_fee_per_gas(),
            max_priority_fee_per_gas: tx.max_priority_fee_per_gas().unwrap_or_default(),
        }
    }
}

/// The per-block input to [`BlockMetrics::record_block`](crate::BlockMetrics::record_block).
///
/// `transactions` keeps one slot per transaction in block order; slots that
/// could not be decoded hold `None` but still occupy their original index,
/// which classification depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSummary {
    /// Total gas used by the block.
    pub gas_used: u64,
    /// Block base fee per gas, in wei.
    pub base_fee: U256,
    /// Transaction views in block order, `None` for undecodable slots.
    pub transactions: Vec<Option<TransactionView>>,
}

impl BlockSummary {
    /// Builds a summary from already-parsed transactions; every slot is
    /// present.
    pub fn from_transactions(gas_used: u64, base_fee: U256, txs: &[OpTxEnvelope]) -> Self {
        Self {
            gas_used,
            base_fee,
            transactions: txs.iter().map(|tx| Some(TransactionView::from(tx))).collect(),
        }
    }

    /// Builds a summary from an execution payload, decoding each raw
    /// transaction independently. Malformed entries become `None` slots.
    pub fn from_execution_payload(payload: &ExecutionPayload) -> Self {
        let inner = payload.as_v1();
        Self {
            gas_used: inner.gas_used,
            base_fee: inner.base_fee_per_gas,
            transactions: decode_transactions(&inner.transactions),
        }
    }
}
