//! Minimum-coin change making (unbounded supply).
//!
//! Variables:
//!   C       = coin denominations
//!   A       = target amount
//!   dp[a]   = fewest coins summing to a, or None if a is unreachable
//!
//! Equations:
//!   dp[0] = Some(0)
//!   for c in C, for a in c..=A:
//!     dp[a] = min(dp[a], dp[a - c] + 1)     (strict improvement only)
//!
//!   Complexity: O(|C| * A)

use crate::error::{AlgoError, Result};

/// Returns the fewest coins summing to `amount`, or `None` when no
/// combination of `coins` reaches it.
pub fn coin_change(coins: &[usize], amount: usize) -> Result<Option<u64>> {
    if coins.contains(&0) {
        return Err(AlgoError::InvalidInput(
            "coin denominations must be positive".into(),
        ));
    }

    let mut dp: Vec<Option<u64>> = vec![None; amount + 1];
    dp[0] = Some(0);

    for &coin in coins {
        for a in coin..=amount {
            if let Some(prev) = dp[a - coin] {
                let candidate = prev + 1;
                if dp[a].map_or(true, |current| candidate < current) {
                    dp[a] = Some(candidate);
                }
            }
        }
    }
    Ok(dp[amount])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_example() {
        assert_eq!(coin_change(&[1, 2, 5], 11), Ok(Some(3)));
    }

    #[test]
    fn unreachable_amount_is_none() {
        assert_eq!(coin_change(&[2], 3), Ok(None));
    }

    #[test]
    fn zero_amount_needs_no_coins() {
        assert_eq!(coin_change(&[7], 0), Ok(Some(0)));
        assert_eq!(coin_change(&[], 0), Ok(Some(0)));
    }

    #[test]
    fn beats_greedy_on_non_canonical_system() {
        assert_eq!(coin_change(&[1, 4, 5], 8), Ok(Some(2)));
    }

    #[test]
    fn rejects_zero_denomination() {
        assert!(matches!(coin_change(&[0, 1], 3), Err(AlgoError::InvalidInput(_))));
    }
}
