//! Transaction provenance classification.

use crate::{config::InboxConfig, TransactionView};

/// The category a transaction is recorded under.
///
/// Exactly one tag applies per transaction; see [`classify`] for the rule
/// order. Inbox tags borrow their name from the [`InboxConfig`] that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxTag<'a> {
    /// The L1 attributes deposit, always the first transaction of a block.
    L1Info,
    /// A deposit initiated by a user on the settlement layer.
    UserDeposit,
    /// A posting to a configured data-availability inbox.
    Inbox(&'a str),
    /// A contract creation (no destination address).
    ContractDeployment,
    /// Anything else.
    Other,
}

impl<'a> TxTag<'a> {
    /// The `tx_tag` label value for this category.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::L1Info => "l1_info",
            Self::UserDeposit => "user_deposit",
            Self::Inbox(tag) => tag,
            Self::ContractDeployment => "contract",
            Self::Other => "other",
        }
    }
}

/// Classifies a transaction by kind, block position and destination.
///
/// The rule order is load-bearing and the first match wins:
/// 1. deposits are `L1Info` at index 0, `UserDeposit` elsewhere, and are
///    never re-tagged by destination;
/// 2. a destination matching a configured inbox yields that inbox's tag;
/// 3. an absent destination is a `ContractDeployment`;
/// 4. everything else is `Other`.
///
/// `index` is the transaction's position in the original block order,
/// counting slots that failed to decode.
pub fn classify<'a>(
    index: usize,
    view: &TransactionView,
    inboxes: &'a InboxConfig,
) -> TxTag<'a> {
    if view.is_deposit() {
        if index == 0 {
            TxTag::L1Info
        } else {
            TxTag::UserDeposit
        }
    } else if let Some(tag) = view.to.as_ref().and_then(|to| inboxes.tag_for(to)) {
        TxTag::Inbox(tag)
    } else if view.to.is_none() {
        TxTag::ContractDeployment
    } else {
        TxTag::Other
    }
}
