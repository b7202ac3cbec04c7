// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;
use urlcrypt_codec::CodecError;
use urlcrypt_rand::EntropyError;

/// Cipher envelope error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Passphrase was empty at an encrypt or decrypt entry point
    #[error("no key provided")]
    MissingKey,

    /// Token could not be decoded with the configured alphabet
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The entropy source failed while generating an IV
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// A provider operation (cipher or payload deserialization) failed;
    /// the message aggregates the provider diagnostics
    #[error("cipher provider error: {0}")]
    Provider(String),
}
