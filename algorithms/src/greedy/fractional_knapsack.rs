//! Fractional knapsack.
//!
//! Variables:
//!   r_i = v_i / w_i   value density
//!   W   = remaining capacity
//!
//! Equations:
//!   sort items by r_i descending (stable)
//!   w_i <= W  =>  take all:  total += v_i,  W -= w_i
//!   else      =>  take W/w_i of it:  total += r_i * W,  W = 0

use crate::dynamic_programming::knapsack::Item;
use crate::error::{AlgoError, Result};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FractionalFill {
    pub total: f64,
    /// `(item index, fraction taken)` in the order items were loaded.
    pub taken: Vec<(usize, f64)>,
}

pub fn fractional_knapsack(items: &[Item], capacity: usize) -> Result<FractionalFill> {
    if items.iter().any(|item| item.weight == 0) {
        return Err(AlgoError::InvalidInput("item weights must be positive".into()));
    }

    let ratio = |item: &Item| item.value as f64 / item.weight as f64;
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| ratio(&items[b]).total_cmp(&ratio(&items[a])));

    let mut remaining = capacity;
    let mut fill = FractionalFill::default();
    for i in order {
        if remaining == 0 {
            break;
        }
        let item = &items[i];
        if item.weight <= remaining {
            fill.total += item.value as f64;
            fill.taken.push((i, 1.0));
            remaining -= item.weight;
        } else {
            fill.total += ratio(item) * remaining as f64;
            fill.taken.push((i, remaining as f64 / item.weight as f64));
            remaining = 0;
        }
    }
    Ok(fill)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(weights: &[usize], values: &[i64]) -> Vec<Item> {
        weights
            .iter()
            .zip(values)
            .map(|(&weight, &value)| Item { weight, value })
            .collect()
    }

    #[test]
    fn takes_fraction_of_last_item() {
        let fill = fractional_knapsack(&items(&[10, 20, 30], &[60, 100, 120]), 50).unwrap();
        assert!((fill.total - 240.0).abs() < 1e-9);
        assert_eq!(fill.taken.len(), 3);
        assert_eq!(fill.taken[2].0, 2);
        assert!((fill.taken[2].1 - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn everything_fits() {
        let fill = fractional_knapsack(&items(&[1, 2], &[3, 4]), 10).unwrap();
        assert!((fill.total - 7.0).abs() < 1e-9);
    }

    #[test]
    fn zero_weight_is_rejected() {
        assert!(fractional_knapsack(&items(&[0], &[5]), 3).is_err());
    }

    #[test]
    fn equal_ratios_keep_input_order() {
        let fill = fractional_knapsack(&items(&[2, 1, 4], &[4, 2, 8]), 4).unwrap();
        assert_eq!(fill.taken, vec![(0, 1.0), (1, 1.0), (2, 0.25)]);
        assert!((fill.total - 8.0).abs() < 1e-9);
    }
}
