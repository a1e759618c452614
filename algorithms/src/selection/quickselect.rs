//! Quickselect for the k-th order statistic.
//!
//! Variables:
//!   k  = 1-based rank within the current slice
//!   p  = pivot position after partition, pos = p + 1
//!
//! Equations:
//!   pos == k  =>  a[p]
//!   pos >  k  =>  select(a[..p], k)
//!   pos <  k  =>  select(a[p+1..], k - pos)
//!
//!   Expected O(n), worst case O(n^2) (last-element pivot on sorted input).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{AlgoError, Result};

/// Returns the `k`-th smallest element (1-based). Reorders `arr`.
pub fn kth_smallest<T: Ord + Clone>(arr: &mut [T], k: usize) -> Result<T> {
    if k == 0 || k > arr.len() {
        return Err(AlgoError::RankOutOfRange { rank: k, len: arr.len() });
    }
    Ok(select(arr, k))
}

fn select<T: Ord + Clone>(arr: &mut [T], k: usize) -> T {
    if arr.len() == 1 {
        return arr[0].clone();
    }
    let p = partition(arr);
    let position = p + 1;
    if position == k {
        arr[p].clone()
    } else if position > k {
        select(&mut arr[..p], k)
    } else {
        select(&mut arr[p + 1..], k - position)
    }
}

/// Lomuto partition around the last element; elements `<=` pivot go left.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let high = arr.len() - 1;
    let mut i = 0;
    for j in 0..high {
        if arr[j] <= arr[high] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}

/// `n` distinct values drawn uniformly from `0..=n`.
pub fn distinct_sample<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i64> {
    let mut pool: Vec<i64> = (0..=n as i64).collect();
    pool.shuffle(rng);
    pool.truncate(n);
    pool
}
