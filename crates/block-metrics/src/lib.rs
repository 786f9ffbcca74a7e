#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod block;
pub use block::{BlockSummary, TransactionView};

mod classify;
pub use classify::{classify, TxTag};

mod config;
pub use config::{InboxConfig, BASE_BATCH_INBOX, OP_BATCH_INBOX};

mod decode;
pub use decode::decode_transactions;

mod error;
pub use error::MetricsError;

mod metrics;
pub use metrics::BlockMetrics;

mod units;
pub use units::wei_to_gwei;

#[cfg(test)]
mod test_utils;
