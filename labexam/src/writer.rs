use std::fmt::Display;
use std::time::Duration;

/// Seconds with six decimals, as `printf("%f")` renders them.
pub fn seconds(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}

/// Every item followed by a single space, including the last.
pub fn spaced<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|item| format!("{item} ")).collect()
}
