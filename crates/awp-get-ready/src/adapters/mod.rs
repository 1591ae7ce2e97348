//! Adapter implementations of the search index port.

mod memory_index;

pub use memory_index::MemorySearchIndex;
