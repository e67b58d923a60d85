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

use std::io::Write;

/// Print the generated seed to the diagnostics stream `err`.
pub fn print_generated_seed(err: &mut impl Write, seed: &str) -> std::io::Result<()> {
    writeln!(
        err,
        "Generated --seed {seed}\nUse this seed to reproduce the identifiers."
    )
}


// vim: ts=4 sw=4 expandtab
