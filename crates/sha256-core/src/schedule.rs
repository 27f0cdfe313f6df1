// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Message schedule expansion (FIPS 180-4 Section 6.2.2, step 1).

use crate::constants::ROUNDS;
use crate::padding::BLOCK_LEN;
use std::ops::Index;

/// The 64 words consumed by one block's compression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSchedule {
    w: [u32; ROUNDS],
}

impl MessageSchedule {
    /// Expand one 64-byte block.
    pub fn from_block(block: &[u8; BLOCK_LEN]) -> Self {
        let mut w = [0u32; ROUNDS];

        for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in 16..ROUNDS {
            w[i] = small_sigma1(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(small_sigma0(w[i - 15]))
                .wrapping_add(w[i - 16]);
        }

        Self { w }
    }

    /// The schedule as an array.
    pub fn words(&self) -> &[u32; ROUNDS] {
        &self.w
    }
}

impl Index<usize> for MessageSchedule {
    type Output = u32;

    fn index(&self, round: usize) -> &u32 {
        &self.w[round]
    }
}

/// σ0
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}
