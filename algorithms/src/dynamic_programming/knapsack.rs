//! 0/1 knapsack.
//!
//! Variables:
//!   n        = number of items
//!   W        = capacity
//!   dp[i][j] = best value using the first i items within capacity j
//!
//! Equations:
//!   dp[0][j] = dp[i][0] = 0
//!   dp[i][j] = max(v[i-1] + dp[i-1][j - w[i-1]], dp[i-1][j])   if w[i-1] <= j
//!            = dp[i-1][j]                                         otherwise
//!   Ties keep the exclude branch.
//!
//!   Complexity: O(n * W) time and space

use crate::error::{AlgoError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Knapsack {
    pub value: i64,
    /// Indices of the chosen items, ascending.
    pub items: Vec<usize>,
}

pub fn knapsack(items: &[Item], capacity: usize) -> Result<Knapsack> {
    let n = items.len();
    let mut dp = vec![vec![0i64; capacity + 1]; n + 1];

    for i in 1..=n {
        let Item { weight, value } = items[i - 1];
        for j in 1..=capacity {
            dp[i][j] = if weight <= j {
                let include = value
                    .checked_add(dp[i - 1][j - weight])
                    .ok_or(AlgoError::Overflow("knapsack value"))?;
                let exclude = dp[i - 1][j];
                if include > exclude { include } else { exclude }
            } else {
                dp[i - 1][j]
            };
        }
    }

    let mut chosen = Vec::new();
    let mut j = capacity;
    for i in (1..=n).rev() {
        if dp[i][j] != dp[i - 1][j] {
            chosen.push(i - 1);
            j -= items[i - 1].weight;
        }
    }
    chosen.reverse();

    Ok(Knapsack {
        value: dp[n][capacity],
        items: chosen,
    })
}
