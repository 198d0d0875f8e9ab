//! Character tables
//!
//! Ordered ASCII alphabets used by the string generators. Samplers only
//! depend on each table's length and order.

pub const DIGITS: &[u8] = b"0123456789";

pub const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const SYMBOLS: &[u8] = b"!@#$%^&*";

/// Upper-case then lower-case letters.
pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// [`LETTERS`] then [`DIGITS`].
pub const ALPHANUMERIC: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// [`ALPHANUMERIC`] then [`SYMBOLS`].
pub const ALL: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";
