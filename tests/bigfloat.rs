use std::cmp::Ordering;

use cryptal_rand::primitives::BigFloat;
use num_bigint::{BigInt, BigUint};

fn f(value: f64) -> BigFloat {
    BigFloat::from_f64(value, 256).unwrap()
}

#[test]
fn from_f64_is_exact() {
    assert_eq!(f(0.5).to_string(), "0.5");
    assert_eq!(f(-2.25).to_string(), "-2.25");
    assert_eq!(f(3.0).to_string(), "3");
    assert_eq!(
        f(0.1).to_string(),
        "0.1000000000000000055511151231257827021181583404541015625"
    );
}

#[test]
fn from_f64_rejects_non_finite() {
    assert!(BigFloat::from_f64(f64::NAN, 256).is_none());
    assert!(BigFloat::from_f64(f64::INFINITY, 256).is_none());
}

#[test]
fn zero_renders_as_zero() {
    assert_eq!(BigFloat::zero(256).to_string(), "0");
    assert_eq!(f(0.0).to_string(), "0");
    assert!(f(0.0).is_zero());
}

#[test]
fn add_and_mul() {
    assert_eq!(f(1.5).add(&f(2.25), 256), f(3.75));
    assert_eq!(f(1.5).mul(&f(1.5), 256), f(2.25));
    assert_eq!(f(1.0).add(&f(-1.0), 256), BigFloat::zero(256));
    assert_eq!(f(1.0).add(&f(-3.5), 256), f(-2.5));
    assert_eq!(f(-2.0).mul(&f(0.25), 256), f(-0.5));
}

#[test]
fn rounding_is_half_to_even() {
    let two_53 = BigUint::from(1u64 << 53);

    // 2^53 + 1 is a tie between 2^53 and 2^53 + 2: even wins.
    let tie_down = BigFloat::from_biguint(&two_53 + 1u32, 53);
    assert_eq!(tie_down, BigFloat::from_biguint(two_53.clone(), 53));

    // 2^53 + 3 is a tie between 2^53 + 2 and 2^53 + 4: even wins.
    let tie_up = BigFloat::from_biguint(&two_53 + 3u32, 53);
    assert_eq!(tie_up, BigFloat::from_biguint(&two_53 + 4u32, 53));
}

#[test]
fn precision_limits_mantissa() {
    let sum = BigFloat::from_biguint(BigUint::from(1u32), 8)
        .add(&BigFloat::from_biguint(BigUint::from(255u32), 8).mul_pow2(-8), 8);
    // 1 + 255/256 needs 9 bits; at 8 bits it rounds to 2.
    assert_eq!(sum, f(2.0));
    assert_eq!(sum.precision(), 8);
}

#[test]
fn ordering_follows_value() {
    assert_eq!(f(1.0).cmp_value(&f(2.0)), Ordering::Less);
    assert_eq!(f(-1.0).cmp_value(&f(-2.0)), Ordering::Greater);
    assert_eq!(f(-1.0).cmp_value(&f(0.0)), Ordering::Less);
    assert_eq!(f(0.75).cmp_value(&f(0.5)), Ordering::Greater);
    assert!(f(3.0) == BigFloat::from_bigint(&BigInt::from(3), 16));
}

#[test]
fn to_f64_round_trips_doubles() {
    for value in [0.1, 1.0, -7.25, 1e300, 5e-324, f64::MAX] {
        assert_eq!(f(value).to_f64(), value);
    }
}

#[test]
fn to_f64_saturates() {
    assert_eq!(f(1.0).mul_pow2(2000).to_f64(), f64::INFINITY);
    assert_eq!(f(-1.0).mul_pow2(2000).to_f64(), f64::NEG_INFINITY);
    assert_eq!(f(1.0).mul_pow2(-2000).to_f64(), 0.0);
}

#[test]
fn to_f64_rounds_once_below_normal_range() {
    let smallest = f64::from_bits(1);

    // 2^-1075 + 2^-1135 is just above half the smallest subnormal.
    let mantissa = (BigUint::from(1u32) << 60u32) + 1u32;
    let above_half = BigFloat::from_biguint(mantissa, 256).mul_pow2(-1135);
    assert_eq!(above_half.to_f64(), smallest);

    // Exactly half ties to the even neighbour, zero.
    assert_eq!(f(1.0).mul_pow2(-1075).to_f64(), 0.0);

    // 1.5 units ties between one and two units: two is even.
    assert_eq!(f(3.0).mul_pow2(-1075).to_f64(), f64::from_bits(2));

    // 0.75 units is nearer one unit than zero.
    assert_eq!(f(3.0).mul_pow2(-1076).to_f64(), smallest);
    assert_eq!(f(-3.0).mul_pow2(-1076).to_f64(), -smallest);
}

#[test]
fn to_f64_rounds_wide_mantissas_once() {
    // 1 + 2^-53 + 2^-120 lies just above the midpoint of 1 and 1 + 2^-52.
    let value = f(1.0)
        .add(&f(1.0).mul_pow2(-53), 256)
        .add(&f(1.0).mul_pow2(-120), 256);
    assert_eq!(value.to_f64(), 1.0 + f64::EPSILON);
}

#[test]
fn extreme_exponents_saturate() {
    let huge = f(1.0).mul_pow2(i64::MAX).mul_pow2(i64::MAX);
    assert_eq!(huge.to_f64(), f64::INFINITY);

    let tiny = f(1.0).mul_pow2(i64::MIN).mul_pow2(i64::MIN);
    assert_eq!(tiny.to_f64(), 0.0);
    assert!(tiny.is_positive());

    let product = huge.mul(&huge, 64);
    assert_eq!(product.to_f64(), f64::INFINITY);
}

#[test]
fn add_with_distant_operand_keeps_sticky_bit() {
    let far = f(1.0).mul_pow2(-1_000_000_000_000);

    assert_eq!(f(1.0).add(&far, 53), f(1.0));
    assert_eq!(f(1.0).add(&far.mul(&f(-1.0), 53), 53), f(1.0));

    // 5 at two bits is a tie between 4 and 6; a tiny addend breaks it.
    let five = BigFloat::from_biguint(BigUint::from(5u32), 8);
    assert_eq!(five.add(&BigFloat::zero(8), 2), f(4.0));
    assert_eq!(five.add(&far, 2), f(6.0));
    assert_eq!(five.add(&far.mul(&f(-1.0), 8), 2), f(4.0));
}

#[test]
fn display_rejects_unprintable_exponent() {
    use std::fmt::Write;

    let value = f(1.0).mul_pow2(-(1i64 << 40));
    let mut out = String::new();
    assert!(write!(out, "{value}").is_err());
}

#[test]
fn display_with_precision_rounds_half_to_even() {
    assert_eq!(format!("{:.2}", f(2.675)), "2.67");
    assert_eq!(format!("{:.2}", f(0.125)), "0.12");
    assert_eq!(format!("{:.2}", f(0.375)), "0.38");
    assert_eq!(format!("{:.0}", f(2.5)), "2");
    assert_eq!(format!("{:.3}", f(12.0)), "12.000");
    assert_eq!(format!("{:.1}", f(-0.25)), "-0.2");
}

#[test]
fn large_integers_render_exactly() {
    let value = BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
    assert_eq!(
        BigFloat::from_bigint(&value, 256).to_string(),
        "123456789012345678901234567890"
    );
}
