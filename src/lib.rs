//! Uniform cryptographic randomness
//!
//! This crate supplies cryptographically secure random values whose
//! distribution is exactly uniform over the declared domain: bytes,
//! integers of fixed and arbitrary precision, reals of fixed and arbitrary
//! precision, and symbols drawn from arbitrary alphabets.
//!
//! The focus is on **correct unbiased sampling** over an OS entropy source,
//! rather than on throughput. Every reduction that a naive `byte % n` would
//! bias is replaced by rejection sampling.
//!
//! # Module overview
//!
//! - `os`  
//!   Platform bindings to the operating system's cryptographic generator.
//!   Private; reached through `rng::OsEntropy`.
//!
//! - `rng`  
//!   The buffered entropy reader and the samplers built on it. This is
//!   where all the uniformity guarantees live:
//!   - range-restricted byte reads
//!   - alphabet sampling without modulo bias
//!   - big-integer rejection sampling over minimal covering bit ranges
//!   - fixed- and arbitrary-precision real sampling
//!
//! - `primitives`  
//!   `BigFloat`, the arbitrary-precision binary float produced by the real
//!   samplers.
//!
//! - `value`  
//!   `RandomValue`, a closed sum type over the six producible shapes, with
//!   checked conversions between them.
//!
//! - `generate`  
//!   One function per value shape, each taking an optional reader and
//!   returning a `RandomValue`.
//!
//! - `charset`  
//!   Ordered ASCII alphabets for the string generators.
//!
//! # Design goals
//!
//! - No seeded or deterministic generators anywhere in the output path
//! - Validation before entropy consumption
//! - Entropy failures are reported, never retried with a weaker source
//! - Thread-safe readers with explicit lifetimes

mod os;

pub mod charset;
pub mod generate;
pub mod primitives;
pub mod rng;
pub mod value;
