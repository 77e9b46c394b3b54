pub mod heap_buffer;
pub mod min_heap;
pub mod sift;

pub use heap_buffer::{HeapBuffer, INITIAL_CAPACITY};
pub use min_heap::{IntMinHeap, IntoSorted, MinHeap};
