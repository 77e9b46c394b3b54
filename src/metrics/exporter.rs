use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::metrics::snapshot::HeapMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for heap metrics snapshots.
///
/// This exporter writes in the Prometheus text exposition format so it can be
/// scraped by Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_metric("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_metric("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write> MetricsExporter<HeapMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &HeapMetricsSnapshot) {
        self.write_counter(&self.metric_name("insert_calls_total"), snapshot.insert_calls);
        self.write_counter(&self.metric_name("grow_events_total"), snapshot.grow_events);
        self.write_counter(&self.metric_name("remove_calls_total"), snapshot.remove_calls);
        self.write_counter(&self.metric_name("remove_found_total"), snapshot.remove_found);
        self.write_counter(&self.metric_name("remove_empty_total"), snapshot.remove_empty);
        self.write_counter(
            &self.metric_name("pushpop_calls_total"),
            snapshot.pushpop_calls,
        );
        self.write_counter(
            &self.metric_name("pushpop_fast_path_total"),
            snapshot.pushpop_fast_path,
        );
        self.write_counter(&self.metric_name("peek_calls_total"), snapshot.peek_calls);
        self.write_counter(&self.metric_name("peek_found_total"), snapshot.peek_found);
        self.write_counter(
            &self.metric_name("heapify_calls_total"),
            snapshot.heapify_calls,
        );
        self.write_counter(
            &self.metric_name("heapify_elements_total"),
            snapshot.heapify_elements,
        );
        self.write_counter(
            &self.metric_name("sift_up_steps_total"),
            snapshot.sift_up_steps,
        );
        self.write_counter(
            &self.metric_name("sift_down_steps_total"),
            snapshot.sift_down_steps,
        );
        self.write_counter(&self.metric_name("clear_calls_total"), snapshot.clear_calls);
        self.write_gauge(&self.metric_name("heap_len"), snapshot.heap_len as u64);
        self.write_gauge(&self.metric_name("heap_capacity"), snapshot.capacity as u64);
    }
}
