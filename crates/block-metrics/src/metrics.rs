//! Prometheus recording of block contents.

use alloy_primitives::U256;
use alloy_rpc_types_engine::ExecutionPayload;
use prometheus::{
    Gauge, Histogram, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry,
};

use crate::{classify, config::InboxConfig, error::MetricsError, units::wei_to_gwei, BlockSummary};

/// Byte-count buckets shared by the body-size and per-transaction size
/// histograms.
const SIZE_BUCKETS: &[f64] = &[
    0.0, 100.0, 1000.0, 5000.0, 10_000.0, 25_000.0, 50_000.0, 75_000.0, 100_000.0, 150_000.0,
    200_000.0,
];

/// Gwei buckets shared by the fee histograms.
const FEE_BUCKETS: &[f64] = &[0.0, 0.1, 1.0, 6.25, 12.5, 25.0, 50.0, 100.0, 200.0, 400.0, 800.0];

/// Metrics over block contents. Also see block-ref metrics for
/// time/number/hash data.
///
/// All sinks are created and registered once in [`BlockMetrics::new`]; the
/// handles are never reassigned afterwards, and recording only increments or
/// observes through them, so concurrent recording from different block
/// sources is safe.
#[derive(Debug, Clone)]
pub struct BlockMetrics {
    inboxes: InboxConfig,

    body_sizes: Histogram,
    transaction_counts: Histogram,

    gas_used: Histogram,

    transaction_size: HistogramVec,
    transaction_call_data: HistogramVec,
    transaction_nonce: Histogram,
    transaction_type: IntCounterVec,
    transaction_max_fee: Histogram,
    transaction_priority_fee: Histogram,

    base_fees: Histogram,
    base_fee_gauge: Gauge,
}

impl BlockMetrics {
    /// Creates the full metric set under `{namespace}_{subsystem}_` and
    /// registers it with `registry`.
    ///
    /// Fails if any sink cannot be created or registered (e.g. a name
    /// collision on the registry); this is the crate's only fallible path.
    pub fn new(
        registry: &Registry,
        namespace: &str,
        subsystem: &str,
        inboxes: InboxConfig,
    ) -> Result<Self, MetricsError> {
        Ok(Self {
            inboxes,

            body_sizes: histogram(
                registry,
                namespace,
                subsystem,
                "block_body_sizes",
                "Block body size in bytes: total sum of transaction sizes",
                Some(SIZE_BUCKETS),
            )?,

            transaction_counts: histogram(
                registry,
                namespace,
                subsystem,
                "transaction_counts",
                "Transaction count per block",
                Some(&[0.0, 1.0, 5.0, 10.0, 20.0, 40.0, 80.0, 160.0]),
            )?,

            gas_used: histogram(
                registry,
                namespace,
                subsystem,
                "block_gas_used",
                "Total gas used in block",
                None,
            )?,

            transaction_size: histogram_vec(
                registry,
                namespace,
                subsystem,
                "transaction_size",
                "Transaction size in bytes, tagged if recognized",
                SIZE_BUCKETS,
                &["tx_tag"],
            )?,

            transaction_call_data: histogram_vec(
                registry,
                namespace,
                subsystem,
                "transaction_call_data",
                "Transaction call data length in bytes, tagged if recognized",
                SIZE_BUCKETS,
                &["tx_tag"],
            )?,

            transaction_nonce: histogram(
                registry,
                namespace,
                subsystem,
                "transaction_nonce",
                "Transaction nonce, to detect anomalies in user transactions, e.g. new users or power-users",
                Some(&[0.0, 2.0, 4.0, 10.0, 25.0, 50.0, 100.0, 1000.0, 10_000.0, 50_000.0]),
            )?,

            transaction_type: {
                let counter = IntCounterVec::new(
                    Opts::new("transaction_type", "Transaction type usage")
                        .namespace(namespace)
                        .subsystem(subsystem),
                    &["tx_type"],
                )?;
                registry.register(Box::new(counter.clone()))?;
                counter
            },

            transaction_max_fee: histogram(
                registry,
                namespace,
                subsystem,
                "transaction_max_fee",
                "Transaction max fee per gas in gwei",
                Some(FEE_BUCKETS),
            )?,

            transaction_priority_fee: histogram(
                registry,
                namespace,
                subsystem,
                "transaction_priority_fee",
                "Transaction priority fee per gas in gwei",
                Some(FEE_BUCKETS),
            )?,

            base_fees: histogram(
                registry,
                namespace,
                subsystem,
                "base_fees",
                "Block base-fee per gas in gwei, histogram data",
                Some(FEE_BUCKETS),
            )?,

            base_fee_gauge: {
                let gauge = Gauge::with_opts(
                    Opts::new("base_fee_gauge", "Block base-fee per gas in gwei, gauge")
                        .namespace(namespace)
                        .subsystem(subsystem),
                )?;
                registry.register(Box::new(gauge.clone()))?;
                gauge
            },
        })
    }

    /// Records a block's contents into the metric set.
    ///
    /// Absent transaction slots keep their index for classification but are
    /// excluded from the transaction count, the body-size total and all
    /// per-transaction observations.
    pub fn record_block(&self, summary: &BlockSummary) {
        let mut body_size = 0u64;
        let mut tx_count = 0u64;

        for (index, view) in summary.transactions.iter().enumerate() {
            let Some(view) = view else { continue };
            tx_count += 1;
            body_size += view.size;

            let tag = classify(index, view, &self.inboxes);
            self.transaction_size.with_label_values(&[tag.as_str()]).observe(view.size as f64);
            self.transaction_call_data
                .with_label_values(&[tag.as_str()])
                .observe(view.call_data_len as f64);
            self.transaction_nonce.observe(view.nonce as f64);

            let tx_type = (view.tx_type as u8).to_string();
            self.transaction_type.with_label_values(&[tx_type.as_str()]).inc();

            self.transaction_priority_fee
                .observe(wei_to_gwei(U256::from(view.max_priority_fee_per_gas)));
            self.transaction_max_fee.observe(wei_to_gwei(U256::from(view.max_fee_per_gas)));
        }

        self.body_sizes.observe(body_size as f64);
        self.transaction_counts.observe(tx_count as f64);
        self.gas_used.observe(summary.gas_used as f64);

        let base_fee = wei_to_gwei(summary.base_fee);
        self.base_fees.observe(base_fee);
        self.base_fee_gauge.set(base_fee);
    }

    /// Decodes an execution payload's raw transactions and records the
    /// resulting block. Undecodable transactions are dropped from the
    /// block's statistics; see [`decode_transactions`](crate::decode_transactions).
    pub fn record_execution_payload(&self, payload: &ExecutionPayload) {
        self.record_block(&BlockSummary::from_execution_payload(payload));
    }
}

fn histogram(
    registry: &Registry,
    namespace: &str,
    subsystem: &str,
    name: &str,
    help: &str,
    buckets: Option<&[f64]>,
) -> Result<Histogram, MetricsError> {
    let mut opts = HistogramOpts::new(name, help).namespace(namespace).subsystem(subsystem);
    if let Some(buckets) = buckets {
        opts = opts.buckets(buckets.to_vec());
    }
    let histogram = Histogram::with_opts(opts)?;
    registry.register(Box::new(histogram.clone()))?;
    Ok(histogram)
}

fn histogram_vec(
    registry: &Registry,
    namespace: &str,
    subsystem: &str,
    name: &str,
    help: &str,
    buckets: &[f64],
    labels: &[&str],
) -> Result<HistogramVec, MetricsError> {
    let opts = HistogramOpts::new(name, help)
        .namespace(namespace)
        .subsystem(subsystem)
        .buckets(buckets.to_vec());
    let histogram = HistogramVec::new(opts, labels)?;
    registry.register(Box::new(histogram.clone()))?;
    Ok(histogram)
}
