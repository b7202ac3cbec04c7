// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behaviour for [`MockEntropySource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (delegates to the real entropy source).
    None,
    /// Always fail `fill_bytes`.
    FailAlways,
    /// Fill every request by cycling over a fixed byte pattern.
    ///
    /// An empty pattern fails like [`FailAlways`](Self::FailAlways).
    FixedBytes(Vec<u8>),
}

/// Mock entropy source for testing.
///
/// Either delegates to [`SystemEntropySource`], fails on demand, or replays
/// a fixed pattern so tests can pin down the generated IV.
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
    fill_bytes_count: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behaviour.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource {},
            behaviour,
            fill_bytes_count: Cell::new(0),
        }
    }

    /// Changes the mock behaviour at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of `fill_bytes` calls seen so far.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fill_bytes_count.set(self.fill_bytes_count.get() + 1);

        match &self.behaviour {
            MockEntropySourceBehaviour::None => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockEntropySourceBehaviour::FixedBytes(pattern) => {
                if pattern.is_empty() {
                    return Err(EntropyError::EntropyNotAvailable);
                }

                for (slot, &byte) in dest.iter_mut().zip(pattern.iter().cycle()) {
                    *slot = byte;
                }

                Ok(())
            }
        }
    }
}
