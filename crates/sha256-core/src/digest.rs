// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Digest driver: pad, then schedule and compress each block in order.

use crate::compress::{compress, HashState, STATE_WORDS};
use crate::constants::RoundConstants;
use crate::error::{DigestError, Result};
use crate::padding::{pad, BLOCK_LEN};
use crate::schedule::MessageSchedule;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a digest rendered as hex.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// What to do with zero-length input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInput {
    /// Hash it like any other input.
    #[default]
    Allow,
    /// Fail with [`DigestError::MalformedInput`].
    Reject,
}

/// SHA-256 engine bound to a constant table.
///
/// Holds no mutable state: every call to [`Sha256::digest`] starts from the
/// initial hash values, so one engine can be reused freely.
#[derive(Debug, Clone, Copy)]
pub struct Sha256<'k> {
    constants: &'k RoundConstants,
    empty: EmptyInput,
}

impl<'k> Sha256<'k> {
    /// Engine with the default empty-input policy.
    pub fn new(constants: &'k RoundConstants) -> Self {
        Self::with_policy(constants, EmptyInput::default())
    }

    /// Engine with an explicit empty-input policy.
    pub fn with_policy(constants: &'k RoundConstants, empty: EmptyInput) -> Self {
        Self { constants, empty }
    }

    /// Configured empty-input policy.
    pub fn empty_input(&self) -> EmptyInput {
        self.empty
    }

    /// Hash `data`.
    ///
    /// # Errors
    ///
    /// - [`DigestError::MalformedInput`] for empty input under [`EmptyInput::Reject`].
    /// - [`DigestError::AllocationFailure`] if the padded buffer cannot be built.
    pub fn digest(&self, data: &[u8]) -> Result<Digest> {
        if data.is_empty() && self.empty == EmptyInput::Reject {
            return Err(DigestError::MalformedInput);
        }

        let padded = pad(data)?;
        let state = self.fold_blocks(&padded);

        log::debug!(
            "Hashed {} bytes in {} blocks",
            data.len(),
            padded.len() / BLOCK_LEN
        );
        Ok(Digest(state))
    }

    // Blocks are chained through the state, so they run strictly in order.
    fn fold_blocks(&self, padded: &[u8]) -> HashState {
        debug_assert_eq!(padded.len() % BLOCK_LEN, 0);

        let mut state = HashState::initial();
        let mut block = [0u8; BLOCK_LEN];
        for (index, chunk) in padded.chunks_exact(BLOCK_LEN).enumerate() {
            block.copy_from_slice(chunk);
            let schedule = MessageSchedule::from_block(&block);
            compress(&mut state, &schedule, self.constants);
            log::trace!("block {} -> H0={:08x}", index, state.words()[0]);
        }
        state
    }
}

/// Hash `data` with the shared constant table and default policy.
pub fn digest(data: &[u8]) -> Result<Digest> {
    Sha256::new(RoundConstants::shared()?).digest(data)
}

/// Hash `data` and render it as lowercase hex.
pub fn digest_hex(data: &[u8]) -> Result<String> {
    digest(data).map(|d| d.to_hex())
}

/// Render a state as 64 lowercase hex digits, most significant word first.
pub fn to_hex(state: &HashState) -> String {
    Digest(*state).to_string()
}

/// Final SHA-256 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(HashState);

impl Digest {
    /// The final hash state.
    pub fn state(&self) -> &HashState {
        &self.0
    }

    /// Big-endian byte form.
    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.words()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl From<HashState> for Digest {
    fn from(state: HashState) -> Self {
        Self(state)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0.words() {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

/// Error parsing a hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDigestError {
    /// Input (after trimming) is not 64 bytes long; holds its byte length.
    #[error("expected 64 hex digits, got {0} bytes")]
    InvalidLength(usize),

    /// A character that is not a hex digit.
    #[error("invalid hex digit {digit:?} at offset {offset}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Its position in the trimmed input.
        offset: usize,
    },
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != HEX_LEN {
            return Err(ParseDigestError::InvalidLength(s.len()));
        }

        let mut words = [0u32; STATE_WORDS];
        for (offset, digit) in s.chars().enumerate() {
            let nibble = digit
                .to_digit(16)
                .ok_or(ParseDigestError::InvalidDigit { digit, offset })?;
            words[offset / 8] = (words[offset / 8] << 4) | nibble;
        }
        Ok(Self(HashState::from_words(words)))
    }
}
