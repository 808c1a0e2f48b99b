// Mon Jan 19 2026 - Alex

use ahash::RandomState;
use once_cell::sync::Lazy;
use std::hash::{BuildHasher, Hash, Hasher};

/// 32-bit golden ratio constant, used to mark a re-entered node.
pub const GOLDEN_RATIO_32: i32 = 0x9E37_79B9_u32 as i32;

/// Multiplier of the structural combine step.
pub const COMBINE_FACTOR: i32 = 31;

// Fixed seeds keep hashes stable for the lifetime of the process and across runs
// of the same build.
static NATIVE_STATE: Lazy<RandomState> = Lazy::new(|| {
    RandomState::with_seeds(
        0x243F_6A88_85A3_08D3,
        0x1319_8A2E_0370_7344,
        0xA409_3822_299F_31D0,
        0x082E_FA98_EC4E_6C89,
    )
});

/// Hash primitives shared by leaf values and the structural hash builder
pub struct HashComputer;

impl HashComputer {
    /// Native 32-bit hash of any `Hash` value
    pub fn native_hash<T: Hash + ?Sized>(value: &T) -> i32 {
        let mut hasher = NATIVE_STATE.build_hasher();
        value.hash(&mut hasher);
        Self::fold(hasher.finish())
    }

    /// Fold a 64-bit digest into 32 bits
    pub fn fold(digest: u64) -> i32 {
        ((digest as u32) ^ ((digest >> 32) as u32)) as i32
    }

    /// `(h1 * 31) ^ h2` with wrapping arithmetic
    pub fn combine(h1: i32, h2: i32) -> i32 {
        h1.wrapping_mul(COMBINE_FACTOR) ^ h2
    }

    /// Hash of an `f64` consistent with `float_eq`
    pub fn float_hash(value: f64) -> i32 {
        Self::native_hash(&canonical_bits(value))
    }

    /// Float equality where `NaN == NaN` and `0.0 == -0.0`
    pub fn float_eq(a: f64, b: f64) -> bool {
        a == b || (a.is_nan() && b.is_nan())
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_hash_is_deterministic() {
        assert_eq!(HashComputer::native_hash("name"), HashComputer::native_hash("name"));
        assert_ne!(HashComputer::native_hash("name"), HashComputer::native_hash("other"));
    }

    #[test]
    fn test_combine_wraps() {
        let h = HashComputer::combine(i32::MAX, 1);
        assert_eq!(h, i32::MAX.wrapping_mul(31) ^ 1);
        assert_eq!(HashComputer::combine(0, 7), 7);
    }

    #[test]
    fn test_float_canonicalization() {
        assert!(HashComputer::float_eq(f64::NAN, f64::NAN));
        assert!(HashComputer::float_eq(0.0, -0.0));
        assert_eq!(HashComputer::float_hash(0.0), HashComputer::float_hash(-0.0));
        assert_eq!(HashComputer::float_hash(f64::NAN), HashComputer::float_hash(-f64::NAN));
        assert_ne!(HashComputer::float_hash(1.5), HashComputer::float_hash(2.5));
    }

    #[test]
    fn test_golden_ratio_constant() {
        assert_eq!(GOLDEN_RATIO_32 as u32, 0x9E37_79B9);
    }
}
