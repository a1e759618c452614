pub mod coin_change;
pub mod fibonacci;
pub mod knapsack;
pub mod lcs;
pub mod matrix_chain;
pub mod rod_cutting;
