pub mod quickselect;

pub use quickselect::{distinct_sample, kth_smallest};
