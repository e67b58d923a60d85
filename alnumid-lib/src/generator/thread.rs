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
use rand::Rng as _;
use rand::rngs::ThreadRng;

/// Generator backed by the thread local, OS seeded random number generator.
pub struct GeneratorThread {
    rng: ThreadRng,
}

impl GeneratorThread {
    pub fn new() -> GeneratorThread {
        GeneratorThread { rng: rand::rng() }
    }
}

impl Default for GeneratorThread {
    fn default() -> Self {
        Self::new()
    }
}

impl NextRandom for GeneratorThread {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        self.rng.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        let mut a = GeneratorThread::new();
        for bound in [1, 2, 7, 62, 1000] {
            for _ in 0..1000 {
                assert!(a.next_index(bound) < bound);
            }
        }
        assert_eq!(a.next_index(1), 0);
    }

    #[test]
    fn test_hits_all() {
        let mut a = GeneratorThread::new();
        let mut seen = [false; 62];
        // The chance to miss one index in 10000 draws is below 1e-60.
        for _ in 0..10000 {
            seen[a.next_index(62)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}

// vim: ts=4 sw=4 expandtab
