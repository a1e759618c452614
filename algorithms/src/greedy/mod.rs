//! Sort-then-sweep greedy algorithms. Each pre-sorts by a single key (stable,
//! so equal keys keep input order) and makes one irrevocable forward pass.

pub mod activity_selection;
pub mod fractional_knapsack;
pub mod job_sequencing;
pub mod minimum_coins;
