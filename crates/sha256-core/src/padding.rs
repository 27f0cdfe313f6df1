// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Message padding (FIPS 180-4 Section 5.1.1).
//!
//! ```text
//! | message (L bytes) | 0x80 | 0x00 * z | bit length (u64 BE) |
//!                                       ^ offset ≡ 56 (mod 64)
//! ```
//!
//! The padded message is built into a fresh buffer of precomputed length;
//! the caller's bytes are never mutated.

use crate::error::{DigestError, Result};

/// Block size in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of the big-endian bit-length trailer.
pub const LENGTH_LEN: usize = 8;

/// Terminator byte appended right after the message.
pub const TERMINATOR: u8 = 0x80;

/// Message length in bits, wrapping modulo 2^64 like the algorithm defines.
pub fn bit_length(len: usize) -> u64 {
    (len as u64).wrapping_mul(8)
}

/// Total length after padding a `len`-byte message, or `None` on overflow.
pub fn padded_len(len: usize) -> Option<usize> {
    // Room for the terminator and the trailer, rounded up to a whole block.
    let min = len.checked_add(1 + LENGTH_LEN)?;
    let rem = min % BLOCK_LEN;
    if rem == 0 {
        Some(min)
    } else {
        min.checked_add(BLOCK_LEN - rem)
    }
}

/// Pad `data` into a new block-aligned buffer.
///
/// # Errors
///
/// Returns [`DigestError::AllocationFailure`] when the padded length does not
/// fit in `usize` or the buffer cannot be reserved.
pub fn pad(data: &[u8]) -> Result<Vec<u8>> {
    let total = padded_len(data.len())
        .ok_or(DigestError::AllocationFailure { requested: usize::MAX })?;

    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| DigestError::AllocationFailure { requested: total })?;

    out.extend_from_slice(data);
    out.push(TERMINATOR);
    out.resize(total - LENGTH_LEN, 0x00);
    out.extend_from_slice(&bit_length(data.len()).to_be_bytes());

    debug_assert_eq!(out.len() % BLOCK_LEN, 0);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trailer(padded: &[u8]) -> u64 {
        let mut buf = [0u8; LENGTH_LEN];
        buf.copy_from_slice(&padded[padded.len() - LENGTH_LEN..]);
        u64::from_be_bytes(buf)
    }

    #[test]
    fn test_padded_len_boundaries() {
        assert_eq!(padded_len(0), Some(64));
        assert_eq!(padded_len(55), Some(64));
        assert_eq!(padded_len(56), Some(128));
        assert_eq!(padded_len(63), Some(128));
        assert_eq!(padded_len(64), Some(128));
        assert_eq!(padded_len(119), Some(128));
        assert_eq!(padded_len(120), Some(192));
    }

    #[test]
    fn test_padded_len_overflow() {
        assert_eq!(padded_len(usize::MAX), None);
        assert_eq!(padded_len(usize::MAX - 8), None);
    }

    #[test]
    fn test_pad_empty() {
        let padded = pad(b"").unwrap();
        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..56].iter().all(|&b| b == 0));
        assert_eq!(trailer(&padded), 0);
    }

    #[test]
    fn test_pad_abc_layout() {
        let padded = pad(b"abc").unwrap();
        assert_eq!(&padded[..4], &[b'a', b'b', b'c', 0x80]);
        assert!(padded[4..56].iter().all(|&b| b == 0));
        assert_eq!(&padded[56..], &[0, 0, 0, 0, 0, 0, 0, 0x18]);
    }

    #[test]
    fn test_pad_55_needs_no_zero_fill() {
        let data = [0xaau8; 55];
        let padded = pad(&data).unwrap();
        assert_eq!(padded.len(), 64);
        assert_eq!(padded[55], TERMINATOR);
        assert_eq!(trailer(&padded), 55 * 8);
    }

    #[test]
    fn test_pad_56_spills_into_second_block() {
        let data = [0xaau8; 56];
        let padded = pad(&data).unwrap();
        assert_eq!(padded.len(), 128);
        assert_eq!(padded[56], TERMINATOR);
        assert!(padded[57..120].iter().all(|&b| b == 0));
        assert_eq!(trailer(&padded), 56 * 8);
    }

    #[test]
    fn test_pad_preserves_message_and_trailer() {
        for len in 0..=200 {
            let data: Vec<u8> = (0..len).map(|i| (i * 7 + 1) as u8).collect();
            let padded = pad(&data).unwrap();
            assert_eq!(padded.len() % BLOCK_LEN, 0, "len={len}");
            assert_eq!(Some(padded.len()), padded_len(len));
            assert_eq!(&padded[..len], &data[..]);
            assert_eq!(padded[len], TERMINATOR);
            assert_eq!(trailer(&padded), (len as u64) * 8);
        }
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(3), 24);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_bit_length_wraps() {
        // 2^61 bytes is 2^64 bits, which wraps to zero.
        assert_eq!(bit_length(1usize << 61), 0);
        assert_eq!(bit_length((1usize << 61) + 1), 8);
    }
}
