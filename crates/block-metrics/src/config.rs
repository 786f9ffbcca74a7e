//! Configuration of well-known data-availability inbox addresses.

use std::collections::HashMap;

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Canonical OP Stack batch-inbox address.
pub const OP_BATCH_INBOX: Address = address!("ff00000000000000000000000000000000000420");

/// Canonical Base batch-inbox address.
pub const BASE_BATCH_INBOX: Address = address!("8453100000000000000000000000000000000000");

/// Maps data-availability inbox addresses to the tag their transactions are
/// recorded under.
///
/// The table is injected into [`BlockMetrics`](crate::BlockMetrics) at
/// construction, so additional chains can be tagged without touching the
/// classification rules. More addresses (even non OP Stack ones) are worth
/// tagging if they have a big impact on data availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InboxConfig {
    inboxes: HashMap<Address, String>,
}

impl Default for InboxConfig {
    /// The canonical OP Stack and Base batch inboxes.
    fn default() -> Self {
        Self::empty()
            .with_inbox(OP_BATCH_INBOX, "op-inbox")
            .with_inbox(BASE_BATCH_INBOX, "base-inbox")
    }
}

impl InboxConfig {
    /// An empty table; no transaction will be tagged as an inbox posting.
    pub fn empty() -> Self {
        Self { inboxes: HashMap::new() }
    }

    /// Adds an inbox address under the given tag.
    pub fn with_inbox(mut self, address: Address, tag: impl Into<String>) -> Self {
        self.inboxes.insert(address, tag.into());
        self
    }

    /// Returns the tag for `address`, if it is a known inbox.
    pub fn tag_for(&self, address: &Address) -> Option<&str> {
        self.inboxes.get(address).map(String::as_str)
    }
}
