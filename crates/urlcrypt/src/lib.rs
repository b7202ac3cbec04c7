// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # urlcrypt
//!
//! Securely encode and decode short pieces of arbitrary binary data in URLs.
//!
//! Tokens are strings over a configurable 32-symbol alphabet (URL-safe by
//! default); payloads can either be packed directly or encrypted first with
//! AES-128-CBC under a passphrase-derived key. Tokens issued by the older
//! (pre-envelope) encryption format remain decryptable.
//!
//! # Quick Start
//!
//! ```rust
//! use urlcrypt::UrlCrypt;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let crypt = UrlCrypt::new();
//!
//!     // Plain encoding
//!     let token = crypt.encode(b"Atrapalo");
//!     assert_eq!(token, "3f5h2ylqmfwg9");
//!     assert_eq!(crypt.decode(&token)?, b"Atrapalo");
//!
//!     // Encrypted tokens
//!     let token = crypt.encrypt(b"secret payload", b"passphrase")?;
//!     assert_eq!(crypt.decrypt(&token, b"passphrase")?, b"secret payload");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom alphabets
//!
//! ```rust
//! use urlcrypt::UrlCrypt;
//!
//! let crypt = UrlCrypt::with_alphabet("pqrstAvwxyz5678901bcd2fgh3jklmn4").unwrap();
//! let token = crypt.encode(b"Atrapalo");
//!
//! assert_eq!(crypt.decode(&token).unwrap(), b"Atrapalo");
//! ```
//!
//! # Security
//!
//! Encrypted tokens are confidentiality-only: there is no MAC, and a wrong
//! passphrase usually (but not always) fails with a padding error. Callers
//! that must detect tampering or wrong keys need their own integrity check.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub use urlcrypt_cipher::{CipherError, Envelope};
pub use urlcrypt_codec::{Alphabet, CodecError, DEFAULT_TABLE};
pub use urlcrypt_rand::{EntropyError, EntropySource, SystemEntropySource};

/// Token codec and cipher over a fixed alphabet.
///
/// Wraps an [`Envelope`] backed by the OS CSPRNG. Configuration is
/// read-only after construction and every call derives its key material
/// fresh, so a shared instance is safe to use from multiple threads.
pub struct UrlCrypt {
    envelope: Envelope<SystemEntropySource>,
}

impl UrlCrypt {
    /// Creates an instance with the default alphabet.
    pub fn new() -> Self {
        Self {
            envelope: Envelope::new(Alphabet::default(), SystemEntropySource {}),
        }
    }

    /// Creates an instance with a custom 32-symbol alphabet.
    ///
    /// An empty table falls back to the default alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidAlphabet`] if the table is non-empty
    /// and not exactly 32 distinct single-byte symbols.
    pub fn with_alphabet(table: &str) -> Result<Self, CodecError> {
        if table.is_empty() {
            return Ok(Self::new());
        }

        let alphabet = Alphabet::new(table)?;

        Ok(Self {
            envelope: Envelope::new(alphabet, SystemEntropySource {}),
        })
    }

    /// Encodes a message as a plain (unencrypted) token.
    pub fn encode(&self, message: &[u8]) -> String {
        self.envelope.alphabet().encode(message)
    }

    /// Decodes a plain token back into its message bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SymbolNotFound`] if the token contains a
    /// symbol outside the configured alphabet.
    pub fn decode(&self, token: &str) -> Result<Vec<u8>, CodecError> {
        self.envelope.alphabet().decode(token)
    }

    /// Encrypts plaintext under a passphrase into a token.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MissingKey`] for an empty passphrase, or
    /// [`CipherError::Entropy`] / [`CipherError::Provider`] if IV
    /// generation or the cipher fail.
    pub fn encrypt(&self, plaintext: &[u8], passphrase: &[u8]) -> Result<String, CipherError> {
        self.envelope.encrypt(plaintext, passphrase)
    }

    /// Decrypts a token, transparently handling both the current and the
    /// legacy encryption format.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Codec`] for tokens with foreign symbols,
    /// [`CipherError::MissingKey`] for an empty passphrase, or
    /// [`CipherError::Provider`] if deserialization or decryption fail.
    pub fn decrypt(&self, token: &str, passphrase: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.envelope.decrypt(token, passphrase)
    }
}

impl Default for UrlCrypt {
    fn default() -> Self {
        Self::new()
    }
}
