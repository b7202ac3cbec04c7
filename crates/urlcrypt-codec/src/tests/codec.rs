// Copyright (c) 2025-2026 The urlcrypt developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::alphabet::Alphabet;
use crate::error::CodecError;

#[test]
fn test_defined_encode() {
    let alphabet = Alphabet::default();
    assert_eq!(alphabet.encode(b"Atrapalo"), "3f5h2ylqmfwg9");
}

#[test]
fn test_defined_decode() {
    let alphabet = Alphabet::default();
    assert_eq!(alphabet.decode("3f5h2ylqmfwg9").unwrap(), b"Atrapalo");
}

#[test]
fn test_empty_message_encodes_to_empty_token() {
    let alphabet = Alphabet::default();
    assert_eq!(alphabet.encode(b""), "");
}

#[test]
fn test_empty_token_decodes_to_empty_message() {
    let alphabet = Alphabet::default();
    assert_eq!(alphabet.decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_encode_length_is_ceil_eight_fifths() {
    let alphabet = Alphabet::default();

    for len in 0..64usize {
        let message = vec![0xA5u8; len];
        let token = alphabet.encode(&message);
        assert_eq!(token.len(), (len * 8).div_ceil(5));
    }
}

#[test]
fn test_single_byte_round_trip() {
    let alphabet = Alphabet::default();

    for byte in 0..=255u8 {
        let token = alphabet.encode(&[byte]);
        assert_eq!(token.len(), 2);
        assert_eq!(alphabet.decode(&token).unwrap(), vec![byte]);
    }
}

#[test]
fn test_foreign_symbol_is_an_error_not_index_zero() {
    let alphabet = Alphabet::default();

    // 'a' is not in the default table; it must not decode as group 0.
    let result = alphabet.decode("3f5h2ylqmfwga");
    assert_eq!(
        result,
        Err(CodecError::SymbolNotFound {
            symbol: 'a',
            position: 12,
        })
    );
}

#[test]
fn test_foreign_symbol_position_is_reported() {
    let alphabet = Alphabet::default();

    let result = alphabet.decode("#f5h");
    assert_eq!(
        result,
        Err(CodecError::SymbolNotFound {
            symbol: '#',
            position: 0,
        })
    );
}

#[test]
fn test_short_token_decodes_to_no_full_byte() {
    let alphabet = Alphabet::default();

    // One symbol carries five bits: not a single full byte.
    assert_eq!(alphabet.decode("9").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_permuted_alphabet_changes_encoding() {
    let default = Alphabet::default();
    let permuted = Alphabet::new("pqrstAvwxyz5678901bcd2fgh3jklmn4").unwrap();

    assert_ne!(default.encode(b"Atrapalo"), permuted.encode(b"Atrapalo"));
}

#[test]
fn test_permuted_alphabet_round_trip() {
    let permuted = Alphabet::new("pqrstAvwxyz5678901bcd2fgh3jklmn4").unwrap();

    let token = permuted.encode(b"Atrapalo");
    assert_eq!(permuted.decode(&token).unwrap(), b"Atrapalo");
}

proptest! {
    #[test]
    fn prop_round_trip_default_alphabet(message in proptest::collection::vec(any::<u8>(), 0..256)) {
        let alphabet = Alphabet::default();

        let token = alphabet.encode(&message);
        prop_assert_eq!(alphabet.decode(&token).unwrap(), message);
    }

    #[test]
    fn prop_round_trip_shuffled_alphabet(
        message in proptest::collection::vec(any::<u8>(), 0..256),
        seed in any::<u64>(),
    ) {
        // Fisher-Yates over the default table with a splitmix-style stream.
        let mut table: Vec<u8> = crate::alphabet::DEFAULT_TABLE.bytes().collect();
        let mut state = seed;
        for i in (1..table.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            table.swap(i, j);
        }

        let table = String::from_utf8(table).unwrap();
        let alphabet = Alphabet::new(&table).unwrap();

        let token = alphabet.encode(&message);
        prop_assert_eq!(alphabet.decode(&token).unwrap(), message);
    }

    #[test]
    fn prop_token_stays_within_alphabet(message in proptest::collection::vec(any::<u8>(), 0..128)) {
        let alphabet = Alphabet::default();

        let token = alphabet.encode(&message);
        for symbol in token.chars() {
            prop_assert!(alphabet.index_of(symbol).is_some());
        }
    }
}
