//! Matrix-chain multiplication order.
//!
//! Variables:
//!   p[0..=m]  = dimensions; matrix A_i is p[i-1] x p[i], i in 1..=m
//!   dp[i][j]  = fewest scalar multiplications for A_i..A_j
//!   s[i][j]   = split k chosen for A_i..A_j
//!
//! Equations:
//!   dp[i][i] = 0
//!   dp[i][j] = min over k in i..j of dp[i][k] + dp[k+1][j] + p[i-1] p[k] p[j]
//!   Filled by increasing chain length. On equal cost the later k wins.

use crate::error::{AlgoError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixChainPlan {
    pub cost: u64,
    matrices: usize,
    splits: Vec<Vec<usize>>,
}

impl MatrixChainPlan {
    /// Optimal parenthesization, matrices named `A1..Am`.
    pub fn parenthesization(&self) -> String {
        let mut out = String::new();
        if self.matrices > 0 {
            self.render(1, self.matrices, &mut out);
        }
        out
    }

    fn render(&self, i: usize, j: usize, out: &mut String) {
        if i == j {
            out.push_str(&format!("A{i}"));
            return;
        }
        let k = self.splits[i][j];
        out.push('(');
        self.render(i, k, out);
        self.render(k + 1, j, out);
        out.push(')');
    }
}

pub fn matrix_chain_order(dims: &[u64]) -> Result<MatrixChainPlan> {
    if dims.len() < 2 {
        return Err(AlgoError::InvalidInput(format!(
            "matrix chain needs at least 2 dimensions, got {}",
            dims.len()
        )));
    }
    let m = dims.len() - 1;
    let mut dp = vec![vec![0u64; m + 1]; m + 1];
    let mut splits = vec![vec![0usize; m + 1]; m + 1];

    for len in 2..=m {
        for i in 1..=m - len + 1 {
            let j = i + len - 1;
            let mut best: Option<(u64, usize)> = None;
            for k in i..j {
                let cost = dims[i - 1]
                    .checked_mul(dims[k])
                    .and_then(|c| c.checked_mul(dims[j]))
                    .and_then(|c| c.checked_add(dp[i][k]))
                    .and_then(|c| c.checked_add(dp[k + 1][j]))
                    .ok_or(AlgoError::Overflow("matrix chain cost"))?;
                if best.map_or(true, |(b, _)| cost <= b) {
                    best = Some((cost, k));
                }
            }
            if let Some((cost, k)) = best {
                dp[i][j] = cost;
                splits[i][j] = k;
            }
        }
    }

    Ok(MatrixChainPlan {
        cost: dp[1][m],
        matrices: m,
        splits,
    })
}
