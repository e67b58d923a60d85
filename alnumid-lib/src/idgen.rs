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

use crate::alphabet::{ALPHABET_LEN, symbol_at};
use crate::generator::{
    GeneratorChaCha8, GeneratorChaCha12, GeneratorChaCha20, GeneratorThread, NextRandom,
};
use crate::kdf::kdf;
use anyhow as ah;
use std::io::Write;

/// Random number source of the identifier generator.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IdRngType {
    /// OS seeded thread local generator. Not reproducible.
    Thread,
    /// Seeded `ChaCha` with 8 rounds.
    ChaCha8,
    /// Seeded `ChaCha` with 12 rounds.
    ChaCha12,
    /// Seeded `ChaCha` with 20 rounds.
    ChaCha20,
}

impl IdRngType {
    /// Returns true, if this generator type is driven by a user seed.
    pub fn is_seeded(self) -> bool {
        !matches!(self, IdRngType::Thread)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum IdQuiet {
    Normal = 0,
    NoInfo = 1,
    NoWarn = 2,
}

/// Identifier generator.
pub struct IdGen {
    rng: Box<dyn NextRandom>,
}

impl IdGen {
    /// Default identifier length.
    pub const DEFAULT_LENGTH: usize = 6;

    /// Create a new identifier generator.
    ///
    /// The seeded generator types require a non-empty seed.
    /// The thread generator does not accept a seed.
    pub fn new(rng_type: IdRngType, seed: Option<&[u8]>) -> ah::Result<IdGen> {
        let rng: Box<dyn NextRandom> = match (rng_type, seed) {
            (IdRngType::Thread, None) => Box::new(GeneratorThread::new()),
            (IdRngType::Thread, Some(_)) => {
                return Err(ah::format_err!(
                    "The thread random number generator can't be seeded. \
                     Please select a ChaCha algorithm to use a seed."
                ));
            }
            (_, None) => {
                return Err(ah::format_err!(
                    "The {rng_type:?} random number generator requires a seed."
                ));
            }
            (_, Some([])) => {
                return Err(ah::format_err!("The seed must not be empty."));
            }
            (IdRngType::ChaCha8, Some(seed)) => Box::new(GeneratorChaCha8::new(kdf(seed))),
            (IdRngType::ChaCha12, Some(seed)) => Box::new(GeneratorChaCha12::new(kdf(seed))),
            (IdRngType::ChaCha20, Some(seed)) => Box::new(GeneratorChaCha20::new(kdf(seed))),
        };
        Ok(IdGen { rng })
    }

    /// Draw one symbol uniformly from the alphabet.
    pub fn draw_symbol(&mut self) -> char {
        let index = self.rng.next_index(ALPHABET_LEN);
        symbol_at(index).unwrap_or_else(|| unreachable!("Draw index {index} out of range."))
    }

    /// Generate an identifier of exactly `length` symbols.
    /// The symbols are drawn independently and concatenated in draw order.
    pub fn generate(&mut self, length: usize) -> String {
        (0..length).map(|_| self.draw_symbol()).collect()
    }

    /// Write an identifier of exactly `length` symbols to `out`.
    /// The symbols are written as they are drawn, so the identifier
    /// is never held in memory as a whole.
    pub fn write_id(&mut self, out: &mut impl Write, length: usize) -> std::io::Result<()> {
        let mut buf = [0; 4];
        for _ in 0..length {
            out.write_all(self.draw_symbol().encode_utf8(&mut buf).as_bytes())?;
        }
        Ok(())
    }
}

/// Generate one identifier of the given length
/// with the thread local random number generator.
pub fn new_id(length: usize) -> String {
    let mut idgen = IdGen {
        rng: Box::new(GeneratorThread::new()),
    };
    idgen.generate(length)
}


// vim: ts=4 sw=4 expandtab
