// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::SEPARATOR;

/// Classification of an alphabet-decoded token payload.
///
/// The two token generations are distinguished by the `"::"` separator:
/// the modern envelope serializes `base64(ciphertext) ++ "::" ++ base64(iv)`,
/// while the legacy format is raw `iv || ciphertext` bytes. A legacy payload
/// that happens to contain the separator bytes is misclassified as modern
/// and fails downstream; the format carries no tag that could resolve this,
/// so the ambiguity is inherited as-is.
pub(crate) enum Payload {
    /// Modern envelope: still-base64-encoded ciphertext and IV.
    Modern {
        /// base64 ciphertext bytes (the part before the separator).
        ciphertext_b64: Vec<u8>,
        /// base64 IV bytes (everything after the first separator).
        iv_b64: Vec<u8>,
    },
    /// Legacy layout: raw `iv || ciphertext` bytes.
    Legacy(Vec<u8>),
}

impl Payload {
    /// Classifies a decoded payload, splitting at the first separator
    /// occurrence when present.
    pub(crate) fn classify(decoded: Vec<u8>) -> Self {
        match find_separator(&decoded) {
            Some(at) => Payload::Modern {
                iv_b64: decoded[at + SEPARATOR.len()..].to_vec(),
                ciphertext_b64: {
                    let mut ciphertext_b64 = decoded;
                    ciphertext_b64.truncate(at);
                    ciphertext_b64
                },
            },
            None => Payload::Legacy(decoded),
        }
    }
}

fn find_separator(payload: &[u8]) -> Option<usize> {
    payload.windows(SEPARATOR.len()).position(|window| window == SEPARATOR)
}
