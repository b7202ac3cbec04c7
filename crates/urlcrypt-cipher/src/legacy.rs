// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes::Aes128;
use aes::cipher::block_padding::NoPadding;
use aes::cipher::{BlockDecryptMut, KeyIvInit};

use crate::consts::IV_SIZE;
use crate::error::CipherError;
use crate::key::derive_legacy_key;

type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// Decrypts a payload in the pre-envelope layout: raw `iv || ciphertext`,
/// zero-byte padded to the block boundary (no base64, no separator).
///
/// Padding is not validated or removed by the cipher; the raw block bytes
/// come back as decrypted and the trailing-NUL heuristic decides what to
/// strip.
pub(crate) fn decrypt_legacy(raw: &[u8], passphrase: &[u8]) -> Result<Vec<u8>, CipherError> {
    let key = derive_legacy_key(passphrase)?;

    if raw.len() < IV_SIZE {
        return Err(CipherError::Provider(
            "legacy payload shorter than one IV".into(),
        ));
    }
    let (iv, ciphertext) = raw.split_at(IV_SIZE);

    let plaintext = Aes128CbcDec::new_from_slices(&key, iv)
        .map_err(|err| CipherError::Provider(err.to_string()))?
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|err| CipherError::Provider(err.to_string()))?;

    Ok(strip_zero_padding(plaintext))
}

/// Strips the zero-padding artifact from a legacy plaintext.
///
/// The legacy scheme zero-padded plaintext to the block boundary without
/// recording the original length, so padding and data cannot be told apart
/// exactly. Heuristic: a trailing run of two or more NUL bytes is padding
/// and is stripped entirely; a single trailing NUL is assumed to be genuine
/// data and kept.
pub(crate) fn strip_zero_padding(mut plaintext: Vec<u8>) -> Vec<u8> {
    let trailing = plaintext
        .iter()
        .rev()
        .take_while(|&&byte| byte == 0)
        .count();

    if trailing > 1 {
        plaintext.truncate(plaintext.len() - trailing);
    }

    plaintext
}
