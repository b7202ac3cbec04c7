// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// MSB-first bit accumulator.
///
/// Bits are pushed in on the right and taken off the left in fixed-width
/// groups. The codec interleaves pushes of 8 (bytes) with takes of 5
/// (groups) or vice versa, so at most 12 bits are ever buffered and a
/// `u16` accumulator suffices.
pub(crate) struct BitBuffer {
    acc: u16,
    len: u32,
}

impl BitBuffer {
    pub(crate) fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    /// Appends the low `width` bits of `value`.
    pub(crate) fn push(&mut self, value: u8, width: u32) {
        debug_assert!(self.len + width <= u16::BITS);

        self.acc = (self.acc << width) | u16::from(value);
        self.len += width;
    }

    /// Takes the oldest `width` bits, or `None` if fewer are buffered.
    pub(crate) fn take(&mut self, width: u32) -> Option<u8> {
        if self.len < width {
            return None;
        }

        self.len -= width;
        let group = (self.acc >> self.len) & ((1 << width) - 1);

        // Drop the consumed bits so the accumulator never overflows.
        self.acc &= (1u16 << self.len).wrapping_sub(1);

        Some(group as u8)
    }

    /// Right-zero-pads the buffered bits to `width` and takes them.
    ///
    /// Returns `None` when the buffer is empty. Callers drain full groups
    /// with [`take`](Self::take) first, so `width` always exceeds the
    /// buffered length here.
    pub(crate) fn take_padded(&mut self, width: u32) -> Option<u8> {
        if self.len == 0 {
            return None;
        }

        let padding = width - self.len;
        self.acc <<= padding;
        self.len = width;

        self.take(width)
    }

    /// Number of buffered bits.
    #[cfg(test)]
    pub(crate) fn len(&self) -> u32 {
        self.len
    }
}
