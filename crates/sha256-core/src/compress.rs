// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compression function (FIPS 180-4 Section 6.2.2, steps 2-4).

use crate::constants::{RoundConstants, ROUNDS};
use crate::schedule::MessageSchedule;

/// Number of words in the hash state.
pub const STATE_WORDS: usize = 8;

// SHA-256 initial hash values (FIPS 180-4 Section 5.3.3)
const H_INIT: [u32; STATE_WORDS] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Running 8-word hash state `H0..H7`.
///
/// Only [`compress`] mutates it, and only by wrapping addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashState([u32; STATE_WORDS]);

impl HashState {
    /// State before the first block.
    pub const fn initial() -> Self {
        Self(H_INIT)
    }

    /// Wrap raw words, most significant first.
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// The words, most significant first.
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::initial()
    }
}

fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Fold one block's schedule into `state`.
pub fn compress(state: &mut HashState, w: &MessageSchedule, k: &RoundConstants) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state.0;

    for i in 0..ROUNDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k[i])
            .wrapping_add(w[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, working) in state.0.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(working);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::{pad, BLOCK_LEN};

    #[test]
    fn test_initial_state() {
        assert_eq!(HashState::default(), HashState::initial());
        assert_eq!(HashState::initial().words()[0], 0x6a09e667);
        assert_eq!(HashState::initial().words()[7], 0x5be0cd19);
    }

    #[test]
    fn test_boolean_functions() {
        assert_eq!(ch(0xffff0000, 0x12345678, 0x9abcdef0), 0x1234def0);
        assert_eq!(maj(0xff00ff00, 0x0ff00ff0, 0x00ff00ff), 0x0ff00ff0);
        assert_eq!(big_sigma0(0), 0);
        assert_eq!(big_sigma1(1), (1u32 << 26) | (1u32 << 21) | (1u32 << 7));
    }

    #[test]
    fn test_single_block_abc() {
        let padded = pad(b"abc").unwrap();
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(&padded);

        let k = RoundConstants::derive().unwrap();
        let mut state = HashState::initial();
        compress(&mut state, &MessageSchedule::from_block(&block), &k);

        assert_eq!(
            state.words(),
            &[
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223,
                0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad,
            ]
        );
    }

    #[test]
    fn test_compress_is_additive_feed_forward() {
        // Same block from a different starting state gives a different result.
        let block = [0u8; BLOCK_LEN];
        let w = MessageSchedule::from_block(&block);
        let k = RoundConstants::derive().unwrap();

        let mut s1 = HashState::initial();
        let mut s2 = HashState::from_words([0; STATE_WORDS]);
        compress(&mut s1, &w, &k);
        compress(&mut s2, &w, &k);
        assert_ne!(s1, s2);
    }
}
