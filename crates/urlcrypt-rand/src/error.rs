// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Entropy source error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The system entropy source is unavailable or failed to produce data
    #[error("system entropy source unavailable")]
    EntropyNotAvailable,
}
