//! Recursive Fibonacci numbers checked for primality by trial division.

pub mod error;
pub mod fibonacci;
pub mod prime;
pub mod report;

pub use error::Error;
pub use fibonacci::fibonacci;
pub use prime::is_prime;
pub use report::{Entry, Report, DEFAULT_INPUTS};
