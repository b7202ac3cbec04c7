// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # urlcrypt_codec
//!
//! Bit-packing codec over a configurable 32-symbol alphabet.
//!
//! Bytes are expanded to bits MSB-first, right-zero-padded to a multiple of
//! five, split into 5-bit groups and mapped through the alphabet, one symbol
//! per group. Decoding reverses the mapping and keeps only the full bytes,
//! discarding the padding bits.
//!
//! ## Example
//!
//! ```rust
//! use urlcrypt_codec::Alphabet;
//!
//! let alphabet = Alphabet::default();
//!
//! let token = alphabet.encode(b"Atrapalo");
//! assert_eq!(token, "3f5h2ylqmfwg9");
//! assert_eq!(alphabet.decode(&token).unwrap(), b"Atrapalo");
//! ```
//!
//! ## Caveat
//!
//! The codec is not self-describing: it cannot tell padding bits from data
//! bits, so decoding a string that was not produced by [`Alphabet::encode`]
//! may silently drop trailing bits. Round trips are only guaranteed for
//! tokens this codec produced.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod alphabet;
mod bits;
mod codec;
mod error;

pub use alphabet::{Alphabet, DEFAULT_TABLE};
pub use error::CodecError;
