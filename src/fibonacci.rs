use crate::Error;

/// Largest index whose Fibonacci value fits in `i64`.
pub const MAX_INDEX: u32 = 92;

/// Naive doubly recursive Fibonacci. Exponential on purpose.
///
/// The sum wraps on `i64` overflow (first reached at `n = 93`).
pub fn fibonacci(n: u32) -> i64 {
    if n <= 1 {
        return i64::from(n);
    }
    fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
}

/// Validates a user-supplied index against `0..=MAX_INDEX`.
pub fn index(n: i64) -> Result<u32, Error> {
    if n < 0 {
        return Err(Error::NegativeIndex(n));
    }
    match u32::try_from(n) {
        Ok(i) if i <= MAX_INDEX => Ok(i),
        _ => Err(Error::IndexTooLarge(n)),
    }
}
