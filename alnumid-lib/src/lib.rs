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

mod alphabet;
mod generator;
mod idgen;
mod kdf;
mod seed;
mod util;

pub use alphabet::{ALPHABET, ALPHABET_LEN, is_alphabet_symbol, symbol_at};
pub use idgen::{IdGen, IdQuiet, IdRngType, new_id};
pub use seed::gen_seed_string;
pub use util::{possible_ids, repeat_probability};

// vim: ts=4 sw=4 expandtab
