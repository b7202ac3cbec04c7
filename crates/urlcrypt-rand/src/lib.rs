// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # urlcrypt_rand
//!
//! Entropy source abstraction for urlcrypt.
//!
//! The cipher envelope only needs one thing from the outside world: a
//! cryptographically secure stream of IV bytes. [`EntropySource`] captures
//! that seam, [`SystemEntropySource`] implements it over the OS CSPRNG via
//! `getrandom`, and a deterministic [`test_utils::MockEntropySource`] is
//! available behind the `test-utils` feature.
//!
//! ## Example
//!
//! ```rust
//! use urlcrypt_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut iv = [0u8; 16];
//! entropy.fill_bytes(&mut iv).expect("entropy unavailable");
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
