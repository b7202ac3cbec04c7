// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes::Aes128;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use urlcrypt_codec::Alphabet;
use urlcrypt_rand::EntropySource;

use crate::consts::{IV_SIZE, SEPARATOR};
use crate::error::CipherError;
use crate::key::derive_key;
use crate::legacy;
use crate::payload::Payload;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// AES-128-CBC token envelope over an alphabet codec.
///
/// Generic over the entropy source used for IV generation so tests can pin
/// the IV down; production callers use
/// [`SystemEntropySource`](urlcrypt_rand::SystemEntropySource).
///
/// Configuration is read-only after construction, keys and IVs are derived
/// fresh per call, so a shared instance can be used from multiple threads.
pub struct Envelope<E: EntropySource> {
    alphabet: Alphabet,
    entropy: E,
}

impl<E: EntropySource> Envelope<E> {
    /// Creates an envelope over the given alphabet and entropy source.
    pub fn new(alphabet: Alphabet, entropy: E) -> Self {
        Self { alphabet, entropy }
    }

    /// The configured alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encrypts plaintext under a passphrase into a token.
    ///
    /// Always produces the modern layout:
    /// `alphabet_encode(base64(ciphertext) ++ "::" ++ base64(iv))` with a
    /// fresh random IV and PKCS#7 block padding.
    ///
    /// # Errors
    ///
    /// [`CipherError::MissingKey`] for an empty passphrase (checked before
    /// any cryptographic work), [`CipherError::Entropy`] if IV generation
    /// fails.
    pub fn encrypt(&self, plaintext: &[u8], passphrase: &[u8]) -> Result<String, CipherError> {
        let key = derive_key(passphrase)?;

        let mut iv = [0u8; IV_SIZE];
        self.entropy.fill_bytes(&mut iv)?;

        let ciphertext =
            Aes128CbcEnc::new(&key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        let mut payload = STANDARD.encode(&ciphertext).into_bytes();
        payload.extend_from_slice(SEPARATOR);
        payload.extend_from_slice(STANDARD.encode(iv).as_bytes());

        Ok(self.alphabet.encode(&payload))
    }

    /// Decrypts a token produced by [`encrypt`](Self::encrypt) or by the
    /// legacy scheme.
    ///
    /// The alphabet-decoded payload is classified by the `"::"` separator:
    /// present routes to the modern path, absent to the legacy adapter.
    ///
    /// A wrong passphrase is not explicitly detected. It typically surfaces
    /// as a [`CipherError::Provider`] padding error, but can also return
    /// garbage with valid-looking padding; successful decryption is not
    /// proof of the correct key.
    ///
    /// # Errors
    ///
    /// [`CipherError::Codec`] if the token contains foreign symbols,
    /// [`CipherError::MissingKey`] for an empty passphrase,
    /// [`CipherError::Provider`] if deserialization or the cipher fails.
    pub fn decrypt(&self, token: &str, passphrase: &[u8]) -> Result<Vec<u8>, CipherError> {
        let payload = self.alphabet.decode(token)?;

        match Payload::classify(payload) {
            Payload::Modern {
                ciphertext_b64,
                iv_b64,
            } => decrypt_modern(&ciphertext_b64, &iv_b64, passphrase),
            Payload::Legacy(raw) => legacy::decrypt_legacy(&raw, passphrase),
        }
    }
}

fn decrypt_modern(
    ciphertext_b64: &[u8],
    iv_b64: &[u8],
    passphrase: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let key = derive_key(passphrase)?;

    let ciphertext = STANDARD
        .decode(ciphertext_b64)
        .map_err(|err| CipherError::Provider(format!("ciphertext base64: {err}")))?;
    let iv = STANDARD
        .decode(iv_b64)
        .map_err(|err| CipherError::Provider(format!("iv base64: {err}")))?;

    Aes128CbcDec::new_from_slices(&key, &iv)
        .map_err(|err| CipherError::Provider(err.to_string()))?
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|err| CipherError::Provider(err.to_string()))
}
