//! Longest common subsequence.
//!
//! dp[i][j] = LCS length of a[..i] and b[..j]
//!   a[i-1] == b[j-1]  =>  dp[i-1][j-1] + 1
//!   otherwise         =>  max(dp[i-1][j], dp[i][j-1]), dp[i][j-1] on ties

fn table<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<usize>> {
    let (n, m) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                let (x, y) = (dp[i - 1][j], dp[i][j - 1]);
                if x > y { x } else { y }
            };
        }
    }
    dp
}

pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    table(a, b)[a.len()][b.len()]
}

/// One longest common subsequence, recovered by walking the table back
/// from `dp[n][m]`.
pub fn lcs_sequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let dp = table(a, b);
    let (mut i, mut j) = (a.len(), b.len());
    let mut out = Vec::with_capacity(dp[i][j]);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_strings() {
        assert_eq!(lcs_length(b"ABCBDAB", b"BDCABA"), 4);
        assert_eq!(lcs_length(b"AGGTAB", b"GXTXAYB"), 4);
        assert_eq!(lcs_sequence(b"AGGTAB", b"GXTXAYB"), b"GTAB".to_vec());
    }

    #[test]
    fn recovered_sequence_has_table_length() {
        let (a, b) = (b"ABCBDAB", b"BDCABA");
        let seq = lcs_sequence(a, b);
        assert_eq!(seq.len(), lcs_length(a, b));
        assert!(is_subsequence(&seq, a));
        assert!(is_subsequence(&seq, b));
    }

    #[test]
    fn empty_side() {
        assert_eq!(lcs_length::<u8>(b"", b"abc"), 0);
        assert!(lcs_sequence::<u8>(b"abc", b"").is_empty());
    }

    fn is_subsequence(needle: &[u8], hay: &[u8]) -> bool {
        let mut it = hay.iter();
        needle.iter().all(|c| it.any(|h| h == c))
    }
}
