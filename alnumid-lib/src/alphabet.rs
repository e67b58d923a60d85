// -*- coding: utf-8 -*-
//
// alnumid - Alphanumeric identifier generator
//
// Copyright 2024 The alnumid developers
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT
//

/// Number of symbols in the identifier alphabet.
pub const ALPHABET_LEN: usize = 10 + 26 + 26;

/// All identifier symbols in draw-index order:
/// digits, then lower case letters, then upper case letters.
pub const ALPHABET: &[u8; ALPHABET_LEN] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Map a draw index to its alphabet symbol.
///
/// 0..10 are the digits '0'..'9',
/// 10..36 are the letters 'a'..'z' and
/// 36..62 are the letters 'A'..'Z'.
/// Returns None, if the index is outside of the alphabet.
#[inline]
pub fn symbol_at(index: usize) -> Option<char> {
    let (base, offset) = match index {
        0..10 => (b'0', index),
        10..36 => (b'a', index - 10),
        36..ALPHABET_LEN => (b'A', index - 36),
        _ => return None,
    };
    let offset = u8::try_from(offset).ok()?;
    Some(char::from(base + offset))
}

/// Check whether a character is a member of the identifier alphabet.
#[inline]
pub fn is_alphabet_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_at() {
        assert_eq!(symbol_at(0), Some('0'));
        assert_eq!(symbol_at(9), Some('9'));
        assert_eq!(symbol_at(10), Some('a'));
        assert_eq!(symbol_at(35), Some('z'));
        assert_eq!(symbol_at(36), Some('A'));
        assert_eq!(symbol_at(61), Some('Z'));
        assert_eq!(symbol_at(62), None);
        assert_eq!(symbol_at(usize::MAX), None);
    }

    #[test]
    fn test_symbol_at_matches_table() {
        for (i, c) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_at(i), Some(char::from(*c)));
        }
    }

    #[test]
    fn test_is_alphabet_symbol() {
        for c in ALPHABET {
            assert!(is_alphabet_symbol(char::from(*c)));
        }
        let members = (0..=0x10FF_u32)
            .filter_map(char::from_u32)
            .filter(|c| is_alphabet_symbol(*c))
            .count();
        assert_eq!(members, ALPHABET_LEN);
        assert!(!is_alphabet_symbol('-'));
        assert!(!is_alphabet_symbol('_'));
        assert!(!is_alphabet_symbol(' '));
        assert!(!is_alphabet_symbol('ä'));
        assert!(!is_alphabet_symbol('٣'));
    }
}

// vim: ts=4 sw=4 expandtab
