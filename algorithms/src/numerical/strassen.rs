//! Strassen's product for the fixed 2×2 case.
//!
//! Equations:
//!   p1 = (a00 + a11)(b00 + b11)     p5 = (a00 + a01) b11
//!   p2 = (a10 + a11) b00            p6 = (a10 - a00)(b00 + b01)
//!   p3 = a00 (b01 - b11)            p7 = (a01 - a11)(b10 + b11)
//!   p4 = a11 (b10 - b00)
//!
//!   c00 = p1 + p4 - p5 + p7         c01 = p3 + p5
//!   c10 = p2 + p4                   c11 = p1 + p3 - p2 + p6
//!
//!   7 multiplications instead of 8. Not recursive.

use super::matrix_multiplication::matrix_multiply;
use crate::error::{AlgoError, Result};

pub type Matrix2 = [[i64; 2]; 2];

fn add(x: i64, y: i64) -> Result<i64> {
    x.checked_add(y).ok_or(AlgoError::Overflow("strassen"))
}

fn sub(x: i64, y: i64) -> Result<i64> {
    x.checked_sub(y).ok_or(AlgoError::Overflow("strassen"))
}

fn mul(x: i64, y: i64) -> Result<i64> {
    x.checked_mul(y).ok_or(AlgoError::Overflow("strassen"))
}

pub fn strassen_2x2(a: &Matrix2, b: &Matrix2) -> Result<Matrix2> {
    let p1 = mul(add(a[0][0], a[1][1])?, add(b[0][0], b[1][1])?)?;
    let p2 = mul(add(a[1][0], a[1][1])?, b[0][0])?;
    let p3 = mul(a[0][0], sub(b[0][1], b[1][1])?)?;
    let p4 = mul(a[1][1], sub(b[1][0], b[0][0])?)?;
    let p5 = mul(add(a[0][0], a[0][1])?, b[1][1])?;
    let p6 = mul(sub(a[1][0], a[0][0])?, add(b[0][0], b[0][1])?)?;
    let p7 = mul(sub(a[0][1], a[1][1])?, add(b[1][0], b[1][1])?)?;

    Ok([
        [add(sub(add(p1, p4)?, p5)?, p7)?, add(p3, p5)?],
        [add(p2, p4)?, add(sub(add(p1, p3)?, p2)?, p6)?],
    ])
}

/// The 8-multiplication product, for cross-checking.
pub fn naive_2x2(a: &Matrix2, b: &Matrix2) -> Result<Matrix2> {
    let rows = |m: &Matrix2| m.iter().map(|r| r.to_vec()).collect::<Vec<_>>();
    let product = matrix_multiply(&rows(a), &rows(b))?;
    Ok([
        [product[0][0], product[0][1]],
        [product[1][0], product[1][1]],
    ])
}
