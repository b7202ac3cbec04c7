// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_behaviour_none_delegates_to_system_source() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_behaviour_fail_always() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert_eq!(result, Err(EntropyError::EntropyNotAvailable));
}

#[test]
fn test_behaviour_fixed_bytes_replays_pattern() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FixedBytes(vec![1, 2, 3]));
    let mut buf = [0u8; 8];

    mock.fill_bytes(&mut buf).unwrap();

    assert_eq!(buf, [1, 2, 3, 1, 2, 3, 1, 2]);
}

#[test]
fn test_behaviour_fixed_bytes_is_deterministic_across_calls() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FixedBytes(vec![0xAB]));
    let mut first = [0u8; 16];
    let mut second = [0u8; 16];

    mock.fill_bytes(&mut first).unwrap();
    mock.fill_bytes(&mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, [0xAB; 16]);
}

#[test]
fn test_behaviour_fixed_bytes_empty_pattern_fails() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FixedBytes(Vec::new()));
    let mut buf = [0u8; 4];

    assert_eq!(mock.fill_bytes(&mut buf), Err(EntropyError::EntropyNotAvailable));
}

#[test]
fn test_call_count_and_change_behaviour() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 4];

    assert!(mock.fill_bytes(&mut buf).is_err());
    assert_eq!(mock.call_count(), 1);

    mock.change_behaviour(MockEntropySourceBehaviour::FixedBytes(vec![7]));

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert_eq!(mock.call_count(), 2);
    assert_eq!(buf, [7; 4]);
}
