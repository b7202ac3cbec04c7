// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Alphabet codec error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Token contains a symbol that is not part of the configured alphabet
    #[error("symbol {symbol:?} at position {position} is not part of the alphabet")]
    SymbolNotFound {
        /// The offending symbol.
        symbol: char,
        /// Zero-based position of the symbol in the token.
        position: usize,
    },

    /// Alphabet is not exactly 32 distinct single-byte symbols
    #[error("alphabet must contain exactly 32 distinct single-byte symbols")]
    InvalidAlphabet,
}
