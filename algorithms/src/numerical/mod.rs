pub mod matrix_multiplication;
pub mod strassen;

pub use strassen::{strassen_2x2, Matrix2};
