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

use crate::alphabet::ALPHABET_LEN;

/// Number of distinct identifiers of the given length.
/// Returns None, if the number does not fit into u128.
pub fn possible_ids(length: usize) -> Option<u128> {
    let exp = u32::try_from(length).ok()?;
    (ALPHABET_LEN as u128).checked_pow(exp)
}

/// Probability that `count` independently generated identifiers
/// of the given length contain at least one repeated identifier.
///
/// This is the birthday bound approximation 1 - e^(-n(n-1) / 2N).
pub fn repeat_probability(count: u64, length: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    let space = match possible_ids(length) {
        Some(space) => space as f64,
        None => return 0.0,
    };
    let n = count as f64;
    let p = 1.0 - (-(n * (n - 1.0)) / (2.0 * space)).exp();
    p.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possible_ids() {
        assert_eq!(possible_ids(0), Some(1));
        assert_eq!(possible_ids(1), Some(62));
        assert_eq!(possible_ids(2), Some(62 * 62));
        assert_eq!(possible_ids(6), Some(56_800_235_584));
        assert!(possible_ids(21).is_some());
        assert_eq!(possible_ids(22), None);
        assert_eq!(possible_ids(usize::MAX), None);
    }

    #[test]
    fn test_repeat_probability() {
        assert_eq!(repeat_probability(0, 6), 0.0);
        assert_eq!(repeat_probability(1, 0), 0.0);
        assert!(repeat_probability(2, 0) > 0.5);
        assert!(repeat_probability(63, 1) > 0.99);
        assert!(repeat_probability(10, 1) > 0.5);
        assert!(repeat_probability(5, 1) < 0.5);

        // 10000 identifiers of length 6: roughly 0.088 %
        let p = repeat_probability(10000, 6);
        assert!(p > 0.0008 && p < 0.0010);

        assert_eq!(repeat_probability(u64::MAX, 100), 0.0);
    }
}

// vim: ts=4 sw=4 expandtab
