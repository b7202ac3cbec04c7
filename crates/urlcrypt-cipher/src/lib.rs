// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # urlcrypt_cipher
//!
//! AES-128-CBC token envelope for urlcrypt.
//!
//! [`Envelope`] encrypts plaintext under a passphrase-derived key and wraps
//! the result into an alphabet-encoded token. Encryption always produces the
//! modern layout:
//!
//! ```text
//! alphabet_encode( base64(ciphertext) ++ "::" ++ base64(iv) )
//! ```
//!
//! Decryption additionally understands the older layout that predates the
//! base64/separator structuring (raw `iv || ciphertext`, zero-byte padded);
//! the decoded payload is classified by the presence of the separator and
//! dispatched to the matching path.
//!
//! ## Security
//!
//! Confidentiality-only. There is no MAC: decrypting with the wrong key
//! usually surfaces as a padding error from the provider, but can in rare
//! cases return garbage with valid-looking padding. Callers that need to
//! distinguish those outcomes must layer their own integrity check on top.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod envelope;
mod error;
mod key;
mod legacy;
mod payload;

pub use envelope::Envelope;
pub use error::CipherError;
