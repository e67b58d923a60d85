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

mod chacha;
mod thread;

pub use chacha::{GeneratorChaCha8, GeneratorChaCha12, GeneratorChaCha20, KEY_SIZE};
pub use thread::GeneratorThread;

pub trait NextRandom {
    /// Draw the next index uniformly from the range 0..bound.
    /// bound must not be zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

// vim: ts=4 sw=4 expandtab
