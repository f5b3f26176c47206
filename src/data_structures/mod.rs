pub mod hash_table;
pub mod priority_queue;

pub use hash_table::HashTable;
pub use priority_queue::{HeapOrder, PriorityQueue};
