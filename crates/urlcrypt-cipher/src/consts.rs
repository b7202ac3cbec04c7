// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// AES-128 key size in bytes.
pub(crate) const KEY_SIZE: usize = 16;

/// AES-128-CBC IV size in bytes.
pub(crate) const IV_SIZE: usize = 16;

/// Separator between the base64 ciphertext and the base64 IV in the
/// modern payload. Never produced by the standard base64 alphabet, so the
/// first occurrence is the split point.
pub(crate) const SEPARATOR: &[u8] = b"::";

/// Legacy passphrase lengths interpreted as hex-encoded key material.
pub(crate) const LEGACY_HEX_KEY_LENGTHS: [usize; 3] = [32, 48, 64];

/// Legacy passphrase lengths whose raw bytes are used as key material.
pub(crate) const LEGACY_DIRECT_KEY_LENGTHS: [usize; 3] = [16, 24, 32];
