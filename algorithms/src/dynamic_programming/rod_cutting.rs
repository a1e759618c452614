use crate::error::{AlgoError, Result};

/// Best revenue from cutting a rod of length `prices.len()`, where
/// `prices[i]` is the price of a piece of length `i + 1`.
///
/// dp[i] = max over j in 1..=i of prices[j-1] + dp[i-j]
pub fn rod_cutting(prices: &[i64]) -> Result<i64> {
    let n = prices.len();
    let mut dp = vec![0i64; n + 1];
    for i in 1..=n {
        let mut best = i64::MIN;
        for j in 1..=i {
            let revenue = prices[j - 1]
                .checked_add(dp[i - j])
                .ok_or(AlgoError::Overflow("rod cutting revenue"))?;
            best = best.max(revenue);
        }
        dp[i] = best;
    }
    Ok(dp[n])
}
