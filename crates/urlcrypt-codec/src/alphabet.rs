// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::CodecError;

/// Default 32-symbol table. URL-safe and free of the easily-confused
/// `0`/`O` and `1`/`l` pairings in the letter positions.
pub const DEFAULT_TABLE: &str = "1bcd2fgh3jklmn4pqrstAvwxyz567890";

/// Number of symbols in an alphabet; one symbol carries five bits.
pub(crate) const ALPHABET_SIZE: usize = 32;

/// Bits carried by a single symbol.
pub(crate) const GROUP_BITS: u32 = 5;

/// Ordered set of 32 distinct single-byte symbols.
///
/// The forward table maps 5-bit groups (0..=31) to symbols; the reverse
/// lookup table is built eagerly at construction so decoding never scans
/// the table.
///
/// Immutable after construction, so a configured alphabet can be shared
/// across threads freely.
#[derive(Clone)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_SIZE],
    reverse: [Option<u8>; 256],
}

impl Alphabet {
    /// Builds an alphabet from a 32-symbol table.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidAlphabet`] if the table does not consist
    /// of exactly 32 distinct single-byte symbols.
    pub fn new(table: &str) -> Result<Self, CodecError> {
        let bytes = table.as_bytes();

        // Multi-byte characters would make byte-wise lookup ambiguous.
        if bytes.len() != ALPHABET_SIZE || !table.is_ascii() {
            return Err(CodecError::InvalidAlphabet);
        }

        let mut symbols = [0u8; ALPHABET_SIZE];
        let mut reverse = [None; 256];

        for (index, &symbol) in bytes.iter().enumerate() {
            if reverse[symbol as usize].is_some() {
                return Err(CodecError::InvalidAlphabet);
            }

            reverse[symbol as usize] = Some(index as u8);
            symbols[index] = symbol;
        }

        Ok(Self { symbols, reverse })
    }

    /// Returns the symbol for a 5-bit group.
    pub(crate) fn symbol(&self, group: u8) -> char {
        self.symbols[group as usize] as char
    }

    /// Returns the 5-bit group for a symbol, or `None` if the symbol is not
    /// part of the alphabet.
    pub(crate) fn index_of(&self, symbol: char) -> Option<u8> {
        let byte = u8::try_from(symbol).ok()?;
        self.reverse[byte as usize]
    }

    /// Returns the table as a string.
    pub fn table(&self) -> String {
        self.symbols.iter().map(|&symbol| symbol as char).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE).expect("default table is a valid alphabet")
    }
}

impl core::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Alphabet").field("table", &self.table()).finish()
    }
}
