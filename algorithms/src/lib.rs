//! # Algorithms Crate
//!
//! Classic textbook algorithm kernels, one per exercise, organized by category.
//! Kernels do no I/O; the `labexam` harness feeds them and times them.
//!
//! ## Modules
//!
//! - `sorting` – Comparison sorts (bubble, insertion, selection, merge, quick, heap)
//! - `dynamic_programming` – Table-filling recurrences (matrix chain, knapsack, coin change, rod cutting, Fibonacci, LCS)
//! - `graph` – Single-source shortest paths (dense Dijkstra, Bellman-Ford)
//! - `greedy` – One-pass schedulers (activity selection, fractional knapsack, job sequencing, minimum coins)
//! - `selection` – Order statistics (quickselect)
//! - `numerical` – Fixed 2×2 Strassen multiplication and the naive product
//! - `invariant` – Checkable postconditions shared by kernels and tests
//! - `computation_map` – Catalogue of every kernel and the program that runs it
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algorithms::sorting::merge_sort::merge_sort;
//!
//! let sorted = merge_sort(&[3,1,2]);
//! assert_eq!(sorted, vec![1,2,3]);
//! ```

pub mod computation_map;
pub mod dynamic_programming;
pub mod error;
pub mod graph;
pub mod greedy;
pub mod invariant;
pub mod numerical;
pub mod selection;
pub mod sorting;

pub use error::{AlgoError, Result};
