// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # sha256-core
//!
//! A self-contained SHA-256 (FIPS 180-4) implementation built as an explicit
//! pipeline:
//!
//! ```text
//! bytes -> pad -> [ MessageSchedule::from_block -> compress ]* -> HashState -> hex
//! ```
//!
//! - [`constants`]: round constants derived from the cube roots of the first 64 primes
//! - [`padding`]: terminator, zero fill and 64-bit length trailer
//! - [`schedule`]: 64-word message schedule per block
//! - [`compress`]: the 64-round compression function
//! - [`digest`]: block driver and hex serialization
//!
//! ## Quick Start
//!
//! ```rust
//! use sha256_core::{digest_hex, Result};
//!
//! fn main() -> Result<()> {
//!     let hex = digest_hex(b"abc")?;
//!     assert_eq!(
//!         hex,
//!         "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! Callers that hash many inputs, or want their own table, can hold an engine:
//!
//! ```rust
//! use sha256_core::{EmptyInput, RoundConstants, Sha256};
//!
//! let k = RoundConstants::derive().unwrap();
//! let engine = Sha256::with_policy(&k, EmptyInput::Reject);
//! assert!(engine.digest(b"").is_err());
//! ```

pub mod compress;
pub mod constants;
pub mod digest;
pub mod error;
pub mod padding;
pub mod schedule;

pub use compress::{compress, HashState};
pub use constants::{sieve_primes, RoundConstants};
pub use digest::{digest, digest_hex, to_hex, Digest, EmptyInput, ParseDigestError, Sha256};
pub use error::{DigestError, Result};
pub use padding::{pad, padded_len};
pub use schedule::MessageSchedule;
