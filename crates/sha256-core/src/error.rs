// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Digest errors.
//!
//! Every failure is fatal for the computation that raised it: no digest is
//! ever returned for input that could not be hashed faithfully.

use thiserror::Error;

/// Errors raised by the SHA-256 pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    /// The prime sieve yielded fewer primes than there are rounds.
    #[error("constant derivation failed: found {found} primes, need {needed}")]
    ConstantDerivation {
        /// Number of primes actually available.
        found: usize,
        /// Number of primes required.
        needed: usize,
    },

    /// The padded buffer could not be sized or reserved.
    #[error("allocation failure: cannot reserve {requested} bytes for padded input")]
    AllocationFailure {
        /// Bytes requested, saturated at `usize::MAX` when the size overflowed.
        requested: usize,
    },

    /// Zero-length input under a policy that rejects it.
    #[error("malformed input: empty content")]
    MalformedInput,
}

/// Convenient alias for results carrying a [`DigestError`].
pub type Result<T> = core::result::Result<T, DigestError>;
