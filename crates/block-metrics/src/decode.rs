//! Tolerant decoding of raw execution-payload transactions.

use alloy_eips::eip2718::Decodable2718;
use alloy_primitives::Bytes;
use op_alloy_consensus::OpTxEnvelope;
use tracing::debug;

use crate::TransactionView;

/// Decodes each raw EIP-2718 transaction independently.
///
/// The output has the same length as the input; a slot that fails to decode
/// becomes `None` and the remaining slots are still decoded. One malformed
/// transaction must not cost the whole block its metrics, so decode errors
/// are logged and absorbed here rather than surfaced.
pub fn decode_transactions(raw: &[Bytes]) -> Vec<Option<TransactionView>> {
    raw.iter()
        .enumerate()
        .map(|(index, bytes)| match OpTxEnvelope::decode_2718_exact(bytes) {
            Ok(tx) => Some(TransactionView::from(&tx)),
            Err(err) => {
                debug!(index, %err, "dropping undecodable transaction from block metrics");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloy_eips::eip2718::Encodable2718;
    use alloy_primitives::{address, Address};

    use super::*;
    use crate::test_utils::{build_deposit_tx, build_eip1559_tx};

    #[test]
    fn decodes_valid_transactions_in_order() {
        let deposit = build_deposit_tx(None);
        let transfer = build_eip1559_tx(3, Some(Address::ZERO), vec![0xab]);
        let raw = [deposit.encoded_2718().into(), transfer.encoded_2718().into()];

        let views = decode_transactions(&raw);
        assert_eq!(views.len(), 2);
        assert!(views[0].expect("deposit decodes").is_deposit());
        assert_eq!(views[1].expect("transfer decodes").nonce, 3);
    }

    #[test]
    fn malformed_middle_slot_does_not_abort_the_batch() {
        let first = build_eip1559_tx(0, Some(address!("1111111111111111111111111111111111111111")), vec![]);
        let third = build_eip1559_tx(1, None, vec![0x60]);
        let raw = [
            first.encoded_2718().into(),
            Bytes::from_static(&[0xff, 0x00, 0x13, 0x37]),
            third.encoded_2718().into(),
        ];

        let views = decode_transactions(&raw);
        assert_eq!(views.len(), 3);
        assert!(views[0].is_some());
        assert!(views[1].is_none());
        assert!(views[2].is_some());
        assert_eq!(views[2].unwrap().nonce, 1);
    }

    #[test]
    fn empty_and_garbage_inputs() {
        assert!(decode_transactions(&[]).is_empty());

        let raw = [Bytes::new(), Bytes::from_static(b"not a transaction")];
        assert_eq!(decode_transactions(&raw), vec![None, None]);
    }
}
