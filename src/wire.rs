//! Reserved characters and numeric constants of the line format.
//!
//! Peers must agree on every value here.
//! There is no version byte to negotiate them.

/// Separates consecutive tokens.
pub const DELIMITER: char = ' ';

/// Stands in for the delimiter inside escaped strings.
pub const ESCAPE: char = '_';

/// Token of an absent value, regardless of its kind.
pub const NULL: &str = "*";

/// Token of an empty string.
pub const EMPTY: &str = ";";

/// Token of `true`.
pub const TRUE: &str = "t";

/// Token of `false`.
pub const FALSE: &str = "f";

/// Radix of every numeric token.
pub const RADIX: u32 = 36;

/// Scale applied to `f32` values before truncation.
pub const F32_PRECISION: i64 = 1_000_000;

/// Scale applied to `f64` values before truncation.
pub const F64_PRECISION: i64 = 10_000_000_000;
