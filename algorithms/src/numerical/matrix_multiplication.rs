use crate::error::{AlgoError, Result};

/// Naive O(n·m·k) product with checked arithmetic.
pub fn matrix_multiply(a: &[Vec<i64>], b: &[Vec<i64>]) -> Result<Vec<Vec<i64>>> {
    let n = a.len();
    let inner = b.len();
    let m = b.first().map_or(0, Vec::len);
    if a.iter().any(|row| row.len() != inner) || b.iter().any(|row| row.len() != m) {
        return Err(AlgoError::InvalidInput("matrix dimensions do not agree".into()));
    }
    let mut result = vec![vec![0i64; m]; n];

    for i in 0..n {
        for k in 0..inner {
            for j in 0..m {
                result[i][j] = a[i][k]
                    .checked_mul(b[k][j])
                    .and_then(|p| result[i][j].checked_add(p))
                    .ok_or(AlgoError::Overflow("matrix multiply"))?;
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular_product() {
        let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let b = vec![vec![7, 8], vec![9, 10], vec![11, 12]];
        assert_eq!(matrix_multiply(&a, &b).unwrap(), vec![vec![58, 64], vec![139, 154]]);
    }

    #[test]
    fn mismatched_dimensions() {
        let a = vec![vec![1, 2]];
        let b = vec![vec![1, 2]];
        assert!(matrix_multiply(&a, &b).is_err());
    }
}
