use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{CoreMetricsRecorder, HeapMetricsReadRecorder, HeapMetricsRecorder};

#[derive(Debug, Default)]
pub struct HeapMetrics {
    pub insert_calls: u64,
    pub grow_events: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub remove_empty: u64,
    pub pushpop_calls: u64,
    pub pushpop_fast_path: u64,
    pub heapify_calls: u64,
    pub heapify_elements: u64,
    pub sift_up_steps: u64,
    pub sift_down_steps: u64,
    pub clear_calls: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
}

impl HeapMetrics {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl CoreMetricsRecorder for HeapMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_grow(&mut self) {
        self.grow_events += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl HeapMetricsRecorder for HeapMetrics {
    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }

    fn record_remove_empty(&mut self) {
        self.remove_empty += 1;
    }

    fn record_pushpop_call(&mut self) {
        self.pushpop_calls += 1;
    }

    fn record_pushpop_fast_path(&mut self) {
        self.pushpop_fast_path += 1;
    }

    fn record_heapify(&mut self, elements: usize) {
        self.heapify_calls += 1;
        self.heapify_elements += elements as u64;
    }

    fn record_sift_up_steps(&mut self, steps: u32) {
        self.sift_up_steps += u64::from(steps);
    }

    fn record_sift_down_steps(&mut self, steps: u32) {
        self.sift_down_steps += u64::from(steps);
    }
}

impl HeapMetricsReadRecorder for &HeapMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_metrics_accumulate() {
        let mut m = HeapMetrics::default();
        m.record_insert_call();
        m.record_grow();
        m.record_heapify(7);
        m.record_sift_down_steps(3);
        m.record_sift_down_steps(2);
        (&m).record_peek_call();

        assert_eq!(m.insert_calls, 1);
        assert_eq!(m.grow_events, 1);
        assert_eq!(m.heapify_calls, 1);
        assert_eq!(m.heapify_elements, 7);
        assert_eq!(m.sift_down_steps, 5);
        assert_eq!(m.peek_calls.get(), 1);
    }

    #[test]
    fn heap_metrics_reset_zeroes_everything() {
        let mut m = HeapMetrics::default();
        m.record_remove_call();
        m.record_remove_empty();
        (&m).record_peek_found();
        m.reset();
        assert_eq!(m.remove_calls, 0);
        assert_eq!(m.remove_empty, 0);
        assert_eq!(m.peek_found.get(), 0);
    }
}
