//! Arbitrary-precision binary floating-point primitive
//!
//! This module defines `BigFloat`, a binary floating-point value with an
//! arbitrary-precision mantissa and a per-value precision expressed in bits.
//!
//! It is a **value type for sampling results**, not a general numerics
//! library. It provides exactly what uniform real-valued sampling needs:
//! exact construction from integers and doubles, addition and
//! multiplication rounded to a working precision, ordering, conversion to
//! `f64` and an exact decimal rendering.
//!
//! A value is `(-1)^negative * mantissa * 2^exponent`. The mantissa is kept
//! in canonical form (zero, or odd with at most `precision` bits), so two
//! values compare equal exactly when they denote the same real number.
//! All rounding is round-half-to-even. Exponents saturate at the bounds of
//! `i64`.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, ToPrimitive, Zero};

/// Working precision, in bits, used by the arbitrary-precision samplers.
pub const DEFAULT_PRECISION: u32 = 256;

/// Arbitrary-precision binary floating-point number.
#[derive(Clone, Debug)]
pub struct BigFloat {
    negative: bool,
    mantissa: BigUint,
    exponent: i64,
    precision: u32,
}

impl BigFloat {
    /// Returns zero carrying the given precision.
    pub fn zero(precision: u32) -> Self {
        Self {
            negative: false,
            mantissa: BigUint::zero(),
            exponent: 0,
            precision: precision.max(1),
        }
    }

    /// Creates a value from an unsigned integer, rounded to `precision` bits.
    pub fn from_biguint(value: BigUint, precision: u32) -> Self {
        Self::normalize(false, value, 0, precision)
    }

    /// Creates a value from a signed integer, rounded to `precision` bits.
    pub fn from_bigint(value: &BigInt, precision: u32) -> Self {
        let negative = value.sign() == Sign::Minus;
        Self::normalize(negative, value.magnitude().clone(), 0, precision)
    }

    /// Creates a value from a double.
    ///
    /// The conversion is exact whenever `precision >= 53`. Returns `None`
    /// for NaN and infinities.
    pub fn from_f64(value: f64, precision: u32) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased = ((bits >> 52) & 0x7FF) as i64;
        let fraction = bits & ((1u64 << 52) - 1);

        let (mantissa, exponent) = if biased == 0 {
            // subnormal (or zero)
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };

        Some(Self::normalize(
            negative,
            BigUint::from(mantissa),
            exponent,
            precision,
        ))
    }

    /// Precision of this value, in bits.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Returns `true` for values strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` for values strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Re-rounds the value to a new precision.
    pub fn with_precision(&self, precision: u32) -> Self {
        Self::normalize(
            self.negative,
            self.mantissa.clone(),
            self.exponent,
            precision,
        )
    }

    /// Multiplies by `2^n`. Exact unless the exponent saturates.
    pub fn mul_pow2(&self, n: i64) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        Self {
            exponent: self.exponent.saturating_add(n),
            ..self.clone()
        }
    }

    /// Returns `self * rhs` rounded to `precision` bits.
    pub fn mul(&self, rhs: &Self, precision: u32) -> Self {
        Self::normalize(
            self.negative != rhs.negative,
            &self.mantissa * &rhs.mantissa,
            self.exponent.saturating_add(rhs.exponent),
            precision,
        )
    }

    /// Returns `self + rhs` rounded to `precision` bits.
    ///
    /// The result is the correctly rounded sum. Operands are aligned
    /// exactly, except that one lying far below the other's rounding
    /// position is first reduced to a sticky bit.
    pub fn add(&self, rhs: &Self, precision: u32) -> Self {
        if self.is_zero() {
            return rhs.with_precision(precision);
        }
        if rhs.is_zero() {
            return self.with_precision(precision);
        }

        // Keep the alignment shift bounded when one operand is far below the
        // other's rounding position.
        let (lhs, rhs) = match self.cmp_magnitude(rhs) {
            Ordering::Less => (self.sticky_below(rhs, precision), rhs.clone()),
            _ => (self.clone(), rhs.sticky_below(self, precision)),
        };

        let exponent = lhs.exponent.min(rhs.exponent);
        let lhs_m = &lhs.mantissa << exponent_gap(lhs.exponent, exponent);
        let rhs_m = &rhs.mantissa << exponent_gap(rhs.exponent, exponent);

        if lhs.negative == rhs.negative {
            return Self::normalize(lhs.negative, lhs_m + rhs_m, exponent, precision);
        }

        match lhs_m.cmp(&rhs_m) {
            Ordering::Equal => Self::zero(precision),
            Ordering::Greater => Self::normalize(lhs.negative, lhs_m - rhs_m, exponent, precision),
            Ordering::Less => Self::normalize(rhs.negative, rhs_m - lhs_m, exponent, precision),
        }
    }

    /// Returns `self`, or a single-bit stand-in of the same sign when `self`
    /// lies entirely below both the lowest bit of `larger` and the rounding
    /// position of a `precision`-bit sum.
    ///
    /// Such an operand only acts as a sticky bit in `larger ± self`, so any
    /// nonzero value in that band rounds the sum identically.
    fn sticky_below(&self, larger: &Self, precision: u32) -> Self {
        let floor = larger
            .exponent
            .min(larger.top_bit().saturating_sub(i64::from(precision.max(1)) + 1));

        if self.top_bit() >= floor.saturating_sub(2) {
            return self.clone();
        }

        Self {
            negative: self.negative,
            mantissa: BigUint::one(),
            exponent: floor - 3,
            precision: self.precision,
        }
    }

    /// Exponent of the most significant set bit. Requires a nonzero value.
    fn top_bit(&self) -> i64 {
        (self.mantissa.bits() as i64 - 1).saturating_add(self.exponent)
    }

    /// Converts to the nearest double, rounding once, half-to-even.
    ///
    /// Values beyond the `f64` range become `±inf`; values at or below half
    /// the smallest subnormal become `±0`.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let top = self.top_bit();
        let magnitude = if top > F64_MAX_EXP {
            f64::INFINITY
        } else if top < F64_MIN_UNIT - 1 {
            0.0
        } else {
            // Weight of the last mantissa bit a double has at this
            // magnitude: 53 significant bits, or fewer once subnormal.
            let unit = (top - 52).max(F64_MIN_UNIT);
            let mantissa = if self.exponent >= unit {
                &self.mantissa << (self.exponent - unit) as u64
            } else {
                shift_round(&self.mantissa, (unit - self.exponent) as u64)
            };

            // At most 2^53 and already rounded, so scaling is exact.
            ldexp(mantissa.to_u64().unwrap_or(u64::MAX) as f64, unit)
        };

        if self.negative { -magnitude } else { magnitude }
    }

    /// Value ordering, ignoring precision.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match (self.signum(), other.signum()) {
            (a, b) if a != b => a.cmp(&b),
            (0, _) => Ordering::Equal,
            (sign, _) => {
                let magnitude = self.cmp_magnitude(other);
                if sign < 0 { magnitude.reverse() } else { magnitude }
            }
        }
    }

    fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        // Position of the highest set bit decides unless equal.
        let top_self = self.top_bit();
        let top_other = other.top_bit();
        if top_self != top_other {
            return top_self.cmp(&top_other);
        }

        let exponent = self.exponent.min(other.exponent);
        let lhs = &self.mantissa << exponent_gap(self.exponent, exponent);
        let rhs = &other.mantissa << exponent_gap(other.exponent, exponent);
        lhs.cmp(&rhs)
    }

    fn normalize(negative: bool, mantissa: BigUint, exponent: i64, precision: u32) -> Self {
        let precision = precision.max(1);
        if mantissa.is_zero() {
            return Self::zero(precision);
        }

        let (mut mantissa, mut exponent) = round_mantissa(mantissa, exponent, precision);
        if let Some(zeros) = mantissa.trailing_zeros() {
            mantissa >>= zeros;
            exponent = exponent.saturating_add(zeros as i64);
        }

        Self {
            negative,
            mantissa,
            exponent,
            precision,
        }
    }

    /// Writes the magnitude rounded half-to-even to `places` fractional
    /// decimal digits.
    fn write_rounded(&self, f: &mut Formatter<'_>, places: usize) -> fmt::Result {
        let scale = BigUint::from(10u32).pow(u32::try_from(places).map_err(|_| fmt::Error)?);
        let scaled = &self.mantissa * scale;

        let digits = if self.exponent >= 0 {
            scaled << self.exponent as u64
        } else {
            shift_round(&scaled, self.exponent.unsigned_abs())
        };

        let text = format!("{:0>width$}", digits.to_string(), width = places + 1);
        let (int_part, frac_part) = text.split_at(text.len() - places);
        if places == 0 {
            f.write_str(int_part)
        } else {
            write!(f, "{int_part}.{frac_part}")
        }
    }

    /// Writes the exact decimal expansion of the magnitude.
    ///
    /// A binary fraction with `k` fractional bits has exactly `k`
    /// fractional decimal digits, so the expansion always terminates.
    fn write_exact(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.exponent >= 0 {
            return write!(f, "{}", &self.mantissa << self.exponent as u64);
        }

        let shift = self.exponent.unsigned_abs();
        let int_part = &self.mantissa >> shift;
        let frac_bits = &self.mantissa - (&int_part << shift);
        let fives = BigUint::from(5u32).pow(u32::try_from(shift).map_err(|_| fmt::Error)?);
        let frac_digits = frac_bits * fives;

        let frac = format!("{:0>width$}", frac_digits.to_string(), width = shift as usize);
        write!(f, "{int_part}.{}", frac.trim_end_matches('0'))
    }
}

/// Rounds `mantissa * 2^exponent` to at most `precision` mantissa bits.
fn round_mantissa(mantissa: BigUint, exponent: i64, precision: u32) -> (BigUint, i64) {
    let bits = mantissa.bits();
    if bits <= precision as u64 {
        return (mantissa, exponent);
    }

    let shift = bits - precision as u64;

    // A carry out of the top bit leaves a power of two, which the caller's
    // trailing-zero strip brings back under `precision` bits.
    (shift_round(&mantissa, shift), exponent.saturating_add(shift as i64))
}

/// Returns `value / 2^shift` rounded half-to-even.
fn shift_round(value: &BigUint, shift: u64) -> BigUint {
    if shift == 0 {
        return value.clone();
    }

    let quotient = value >> shift;
    let remainder = value - (&quotient << shift);
    let half = BigUint::one() << (shift - 1);

    match remainder.cmp(&half) {
        Ordering::Greater => quotient + 1u32,
        Ordering::Equal if quotient.bit(0) => quotient + 1u32,
        _ => quotient,
    }
}

/// Distance `from - to` as a shift amount. Requires `from >= to`.
fn exponent_gap(from: i64, to: i64) -> u64 {
    (i128::from(from) - i128::from(to)) as u64
}

/// Exponent of the largest power of two below `f64::MAX`.
const F64_MAX_EXP: i64 = 1023;

/// Exponent of the smallest subnormal `f64`.
const F64_MIN_UNIT: i64 = -1074;

/// Computes `x * 2^exp` in steps that stay inside the normal `f64` range.
fn ldexp(mut x: f64, mut exp: i64) -> f64 {
    while exp > 1000 {
        x *= 2f64.powi(1000);
        exp -= 1000;
        if x.is_infinite() {
            return x;
        }
    }

    while exp < -1000 {
        x *= 2f64.powi(-1000);
        exp += 1000;
        if x == 0.0 {
            return x;
        }
    }

    x * 2f64.powi(exp as i32)
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_value(other))
    }
}

impl Display for BigFloat {
    /// Formats the value in plain decimal notation.
    ///
    /// Without a precision the exact expansion is written, with trailing
    /// zeros removed. `{:.N}` rounds half-to-even to `N` fractional digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }

        match f.precision() {
            Some(places) => self.write_rounded(f, places),
            None if self.is_zero() => f.write_str("0"),
            None => self.write_exact(f),
        }
    }
}
