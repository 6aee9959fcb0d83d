pub mod priority_queue;
pub mod sorted_list;
pub mod traits;

pub use priority_queue::BinaryHeapFrontier;
pub use sorted_list::SortedListFrontier;
pub use traits::Frontier;
