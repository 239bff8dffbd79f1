#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod batch;
mod buffer;
mod error;
mod heap;
mod running;
mod sample;
mod select;

#[cfg(test)]
mod test_inputs;

pub use batch::{median_of, median_of_sorted};
pub use buffer::Buffer;
pub use error::SelectError;
pub use heap::{BinaryHeap, HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder};
pub use running::RunningMedian;
pub use sample::{Sample, TotalOrd};
pub use select::{partition, select_kth, select_kth_by};
