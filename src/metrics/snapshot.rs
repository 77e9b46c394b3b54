/// Point-in-time copy of a heap's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeapMetricsSnapshot {
    pub insert_calls: u64,
    pub grow_events: u64,

    pub remove_calls: u64,
    pub remove_found: u64,
    pub remove_empty: u64,

    pub pushpop_calls: u64,
    pub pushpop_fast_path: u64, // returned the argument without touching the heap

    pub peek_calls: u64,
    pub peek_found: u64,

    pub heapify_calls: u64,
    pub heapify_elements: u64,

    pub sift_up_steps: u64,
    pub sift_down_steps: u64, // includes the sift-downs run by heapify

    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub heap_len: usize,
    pub capacity: usize,
}
