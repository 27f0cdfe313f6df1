// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Round constant table.
//!
//! The 64 SHA-256 round constants are the first 32 bits of the fractional
//! parts of the cube roots of the first 64 primes (FIPS 180-4 Section 4.2.2).
//! They are derived rather than transcribed: primes come from a sieve, the
//! cube root is estimated in floating point and then pinned down with exact
//! integer arithmetic so the result never depends on libm rounding.

use crate::error::{DigestError, Result};
use std::ops::Index;
use std::sync::OnceLock;

/// Number of compression rounds, and therefore of round constants.
pub const ROUNDS: usize = 64;

/// Sieve bound that contains the first 64 primes (the 64th prime is 311).
pub const PRIME_BOUND: usize = 311;

static SHARED: OnceLock<Result<RoundConstants>> = OnceLock::new();

/// Immutable table of the 64 round constants `K[0..64]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConstants {
    k: [u32; ROUNDS],
}

impl RoundConstants {
    /// Derive the table from a fresh sieve up to [`PRIME_BOUND`].
    pub fn derive() -> Result<Self> {
        let primes = sieve_primes(PRIME_BOUND);
        let table = Self::from_primes(&primes)?;
        log::debug!(
            "Derived {} round constants from primes 2..={} (K[0]={:08x}, K[63]={:08x})",
            ROUNDS,
            primes[ROUNDS - 1],
            table.k[0],
            table.k[ROUNDS - 1]
        );
        Ok(table)
    }

    /// Build the table from an ascending prime list; only the first 64 are used.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::ConstantDerivation`] when fewer than 64 primes
    /// are supplied.
    pub fn from_primes(primes: &[u32]) -> Result<Self> {
        if primes.len() < ROUNDS {
            return Err(DigestError::ConstantDerivation {
                found: primes.len(),
                needed: ROUNDS,
            });
        }

        let mut k = [0u32; ROUNDS];
        for (slot, &p) in k.iter_mut().zip(primes) {
            *slot = cube_root_fraction(p);
        }
        Ok(Self { k })
    }

    /// Process-wide table, derived on first use and shared read-only after.
    pub fn shared() -> Result<&'static Self> {
        SHARED
            .get_or_init(Self::derive)
            .as_ref()
            .map_err(Clone::clone)
    }

    /// The constants as an array.
    pub fn as_array(&self) -> &[u32; ROUNDS] {
        &self.k
    }

    /// Iterate the constants in round order.
    pub fn iter(&self) -> impl Iterator<Item = &u32> {
        self.k.iter()
    }
}

impl Index<usize> for RoundConstants {
    type Output = u32;

    fn index(&self, round: usize) -> &u32 {
        &self.k[round]
    }
}

/// All primes `<= bound`, ascending (sieve of Eratosthenes).
pub fn sieve_primes(bound: usize) -> Vec<u32> {
    if bound < 2 {
        return Vec::new();
    }

    let mut is_prime = vec![true; bound + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i <= bound {
        if is_prime[i] {
            let mut j = i * i;
            while j <= bound {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter(|&(_, &prime)| prime)
        .map(|(n, _)| n as u32)
        .collect()
}

/// `floor(frac(cbrt(p)) * 2^32)`.
///
/// `cbrt(p * 2^96) == cbrt(p) * 2^32`, so the exact integer cube root of
/// `p << 96` holds the integer part in its high bits and the wanted fraction
/// in its low 32 bits.
pub fn cube_root_fraction(p: u32) -> u32 {
    let n = u128::from(p) << 96;

    let mut root = (f64::from(p).cbrt() * 4_294_967_296.0) as u128;
    while cube(root).map_or(true, |c| c > n) {
        root -= 1;
    }
    while cube(root + 1).is_some_and(|c| c <= n) {
        root += 1;
    }

    root as u32
}

fn cube(x: u128) -> Option<u128> {
    x.checked_mul(x)?.checked_mul(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_first_primes() {
        assert_eq!(sieve_primes(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
        assert!(sieve_primes(1).is_empty());
        assert_eq!(sieve_primes(2), vec![2]);
    }

    #[test]
    fn test_sieve_bound_holds_64_primes() {
        let primes = sieve_primes(PRIME_BOUND);
        assert_eq!(primes.len(), 64);
        assert_eq!(primes[63], 311);
    }

    #[test]
    fn test_cube_root_fraction_known_values() {
        // FIPS 180-4: K[0], K[1], K[63]
        assert_eq!(cube_root_fraction(2), 0x428a2f98);
        assert_eq!(cube_root_fraction(3), 0x71374491);
        assert_eq!(cube_root_fraction(311), 0xc67178f2);
    }

    #[test]
    fn test_perfect_cube_has_zero_fraction() {
        assert_eq!(cube_root_fraction(8), 0);
        assert_eq!(cube_root_fraction(27), 0);
        assert_eq!(cube_root_fraction(1), 0);
    }

    #[test]
    fn test_large_input_does_not_overflow() {
        // Only checks the refinement loop terminates without overflow.
        let _ = cube_root_fraction(u32::MAX);
    }

    #[test]
    fn test_too_few_primes() {
        let primes = sieve_primes(100);
        let err = RoundConstants::from_primes(&primes).unwrap_err();
        assert_eq!(
            err,
            DigestError::ConstantDerivation {
                found: 25,
                needed: 64
            }
        );
    }

    #[test]
    fn test_extra_primes_ignored() {
        let long = sieve_primes(1000);
        let exact = sieve_primes(PRIME_BOUND);
        assert_eq!(
            RoundConstants::from_primes(&long).unwrap(),
            RoundConstants::from_primes(&exact).unwrap()
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = RoundConstants::derive().unwrap();
        let b = RoundConstants::derive().unwrap();
        assert_eq!(a, b);
        assert_eq!(RoundConstants::shared().unwrap(), &a);
    }

    #[test]
    fn test_index_matches_array() {
        let k = RoundConstants::derive().unwrap();
        for (i, v) in k.iter().enumerate() {
            assert_eq!(k[i], *v);
            assert_eq!(k.as_array()[i], *v);
        }
    }
}
