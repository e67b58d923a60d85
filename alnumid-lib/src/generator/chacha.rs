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

use crate::generator::NextRandom;
use rand::{Rng as _, SeedableRng as _};

/// Size of the `ChaCha` key, in bytes.
pub const KEY_SIZE: usize = 256 / 8;

macro_rules! GeneratorChaCha {
    ( $Generator:ident,
      $ChaChaRng:ident,
      $testmodule:ident
    ) => {
        use rand_chacha::$ChaChaRng;

        pub struct $Generator {
            rng: $ChaChaRng,
        }

        impl $Generator {
            pub fn new(key: [u8; KEY_SIZE]) -> $Generator {
                let rng = $ChaChaRng::from_seed(key);
                $Generator { rng }
            }
        }

        impl NextRandom for $Generator {
            fn next_index(&mut self, bound: usize) -> usize {
                debug_assert!(bound > 0);
                self.rng.random_range(0..bound)
            }
        }

        #[cfg(test)]
        mod $testmodule {
            use super::*;

            fn draw(a: &mut $Generator, count: usize) -> Vec<usize> {
                (0..count).map(|_| a.next_index(62)).collect()
            }

            #[test]
            fn test_range() {
                let mut a = $Generator::new([7; 32]);
                assert!(draw(&mut a, 10000).iter().all(|i| *i < 62));
                assert_eq!(a.next_index(1), 0);
            }

            #[test]
            fn test_seed_equal() {
                let mut a = $Generator::new([1; 32]);
                let mut b = $Generator::new([1; 32]);
                let res_a = draw(&mut a, 64);
                let res_b = draw(&mut b, 64);
                assert_eq!(res_a, res_b);
                assert_ne!(res_a, draw(&mut a, 64));
            }

            #[test]
            fn test_seed_diff() {
                let mut key = [1; 32];
                let mut a = $Generator::new(key);
                key[31] = 2;
                let mut b = $Generator::new(key);
                assert_ne!(draw(&mut a, 64), draw(&mut b, 64));
            }

            #[test]
            fn test_concat_equal() {
                let mut a = $Generator::new([3; 32]);
                let mut b = $Generator::new([3; 32]);
                let mut res_a = draw(&mut a, 10);
                res_a.extend(draw(&mut a, 22));
                assert_eq!(res_a, draw(&mut b, 32));
            }
        }
    };
}

GeneratorChaCha!(GeneratorChaCha20, ChaCha20Rng, tests_chacha20);

GeneratorChaCha!(GeneratorChaCha12, ChaCha12Rng, tests_chacha12);

GeneratorChaCha!(GeneratorChaCha8, ChaCha8Rng, tests_chacha8);

// vim: ts=4 sw=4 expandtab
