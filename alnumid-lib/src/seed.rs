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

use crate::idgen::new_id;

/// Generate a new alphanumeric truly random seed.
///
/// length: The number of ASCII characters to return.
pub fn gen_seed_string(length: usize) -> String {
    new_id(length)
}


// vim: ts=4 sw=4 expandtab
