use crate::error::{AlgoError, Result};

/// Bottom-up Fibonacci table: dp[0] = 0, dp[1] = 1, dp[i] = dp[i-1] + dp[i-2].
///
/// F(93) is the largest value that fits in a `u64`; anything past it is an
/// overflow error rather than a wrapped value.
pub fn fibonacci(n: usize) -> Result<u64> {
    if n <= 1 {
        return Ok(n as u64);
    }
    let mut dp = vec![0u64; n + 1];
    dp[1] = 1;
    for i in 2..=n {
        dp[i] = dp[i - 1]
            .checked_add(dp[i - 2])
            .ok_or(AlgoError::Overflow("fibonacci"))?;
    }
    Ok(dp[n])
}
