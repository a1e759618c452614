//! Greedy change making.
//!
//! Takes as many of the largest remaining denomination as fit, then moves
//! down. Exact only for canonical coin systems: coins [1, 4, 5] and amount 8
//! give 5+1+1+1 (4 coins) where 4+4 (2 coins) exists. Use
//! `dynamic_programming::coin_change` for the exact minimum.

use crate::error::{AlgoError, Result};

/// Positive coin denominations, largest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Denominations(Vec<u64>);

impl Denominations {
    pub fn new(coins: &[u64]) -> Result<Self> {
        if coins.contains(&0) {
            return Err(AlgoError::InvalidInput(
                "coin denominations must be positive".into(),
            ));
        }
        let mut coins = coins.to_vec();
        coins.sort_by(|a, b| b.cmp(a));
        Ok(Self(coins))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GreedyChange {
    pub count: u64,
    /// `(denomination, how many)` in the order they were taken.
    pub used: Vec<(u64, u64)>,
    /// Amount left over when the denominations cannot represent it.
    pub remainder: u64,
}

pub fn greedy_change(denominations: &Denominations, amount: u64) -> GreedyChange {
    let mut change = GreedyChange {
        remainder: amount,
        ..GreedyChange::default()
    };
    for &coin in &denominations.0 {
        if change.remainder == 0 {
            break;
        }
        if coin <= change.remainder {
            let take = change.remainder / coin;
            change.count += take;
            change.used.push((coin, take));
            change.remainder %= coin;
        }
    }
    change
}
