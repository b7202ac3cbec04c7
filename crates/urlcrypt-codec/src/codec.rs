// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::alphabet::{Alphabet, GROUP_BITS};
use crate::bits::BitBuffer;
use crate::error::CodecError;

impl Alphabet {
    /// Encodes a message as a token over this alphabet.
    ///
    /// The output is `ceil(8 * message.len() / 5)` symbols long; the empty
    /// message encodes to the empty token.
    pub fn encode(&self, message: &[u8]) -> String {
        let mut token = String::with_capacity((message.len() * 8).div_ceil(GROUP_BITS as usize));
        let mut bits = BitBuffer::new();

        for &byte in message {
            bits.push(byte, u8::BITS);

            while let Some(group) = bits.take(GROUP_BITS) {
                token.push(self.symbol(group));
            }
        }

        // Leftover bits become one final right-zero-padded group.
        if let Some(group) = bits.take_padded(GROUP_BITS) {
            token.push(self.symbol(group));
        }

        token
    }

    /// Decodes a token back into the message bytes.
    ///
    /// Keeps the first `floor(5 * token.len() / 8)` bytes; the remaining
    /// bits are the padding added by [`encode`](Self::encode) plus any
    /// alignment slack, and are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SymbolNotFound`] if the token contains a
    /// symbol outside this alphabet.
    pub fn decode(&self, token: &str) -> Result<Vec<u8>, CodecError> {
        let mut message = Vec::with_capacity(token.len() * GROUP_BITS as usize / 8);
        let mut bits = BitBuffer::new();

        for (position, symbol) in token.chars().enumerate() {
            let group = self
                .index_of(symbol)
                .ok_or(CodecError::SymbolNotFound { symbol, position })?;

            bits.push(group, GROUP_BITS);

            while let Some(byte) = bits.take(u8::BITS) {
                message.push(byte);
            }
        }

        Ok(message)
    }
}
