//! Operation counters for [`MinHeap`](crate::ds::MinHeap) (feature `metrics`).
//!
//! Recording, snapshotting, and exporting live behind separate traits so the
//! heap only ever writes counters:
//!
//! ```text
//!   MinHeap ──record_*──► HeapMetrics ──metrics_snapshot()──► HeapMetricsSnapshot
//!                                                                  │
//!                                                                  ▼
//!                                                    MetricsExporter<S>::export
//!                                                    (PrometheusTextExporter)
//! ```

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::HeapMetrics;
pub use snapshot::HeapMetricsSnapshot;
pub use traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
