pub use crate::ds::{HeapBuffer, IntMinHeap, IntoSorted, MinHeap};
pub use crate::error::{AllocError, InvariantError};

#[cfg(feature = "metrics")]
pub use crate::metrics::{
    HeapMetricsSnapshot, MetricsExporter, MetricsReset, MetricsSnapshotProvider,
    PrometheusTextExporter,
};
