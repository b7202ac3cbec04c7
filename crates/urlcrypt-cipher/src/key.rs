// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use md5::{Digest, Md5};

use crate::consts::{KEY_SIZE, LEGACY_DIRECT_KEY_LENGTHS, LEGACY_HEX_KEY_LENGTHS};
use crate::error::CipherError;

/// AES-128 key material.
pub(crate) type Key = [u8; KEY_SIZE];

/// Derives the key for the modern envelope: the raw 16-byte MD5 digest of
/// the passphrase.
pub(crate) fn derive_key(passphrase: &[u8]) -> Result<Key, CipherError> {
    if passphrase.is_empty() {
        return Err(CipherError::MissingKey);
    }

    Ok(Md5::digest(passphrase).into())
}

/// Derives the key for legacy tokens.
///
/// Branch precedence, evaluated in order:
///
/// 1. passphrase of length 32/48/64 consisting of hex digits: hex-decoded
///    into raw bytes;
/// 2. passphrase of length 16/24/32: raw bytes used directly;
/// 3. anything else: the 32-character lowercase hex MD5 digest *text*.
///
/// The ordering decides which of several plausible key representations a
/// historical token was actually encrypted under and must not change.
///
/// Material longer than 16 bytes is truncated to the AES-128 key size,
/// matching the silent truncation of the provider the legacy tokens were
/// issued through; branch 3 always produces 32 bytes and relies on it.
pub(crate) fn derive_legacy_key(passphrase: &[u8]) -> Result<Key, CipherError> {
    if passphrase.is_empty() {
        return Err(CipherError::MissingKey);
    }

    let material = if LEGACY_HEX_KEY_LENGTHS.contains(&passphrase.len()) && is_hex(passphrase) {
        hex_decode(passphrase)
    } else if LEGACY_DIRECT_KEY_LENGTHS.contains(&passphrase.len()) {
        passphrase.to_vec()
    } else {
        hex_digest(passphrase)
    };

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&material[..KEY_SIZE]);

    Ok(key)
}

/// Case-insensitive `[0-9a-f]+` check.
fn is_hex(passphrase: &[u8]) -> bool {
    passphrase.iter().all(|byte| byte.is_ascii_hexdigit())
}

/// Decodes hex digits to raw bytes. Input length is even and pre-validated
/// with [`is_hex`] by the caller.
fn hex_decode(hex: &[u8]) -> Vec<u8> {
    fn nibble(digit: u8) -> u8 {
        match digit {
            b'0'..=b'9' => digit - b'0',
            b'a'..=b'f' => digit - b'a' + 10,
            b'A'..=b'F' => digit - b'A' + 10,
            _ => 0,
        }
    }

    hex.chunks(2)
        .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
        .collect()
}

/// The 32-character lowercase hex MD5 digest of the input, as bytes.
fn hex_digest(data: &[u8]) -> Vec<u8> {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let digest = Md5::digest(data);
    let mut text = Vec::with_capacity(2 * digest.len());

    for byte in digest {
        text.push(HEX[(byte >> 4) as usize]);
        text.push(HEX[(byte & 0x0f) as usize]);
    }

    text
}
