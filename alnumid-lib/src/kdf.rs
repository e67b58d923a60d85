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

use crate::generator::KEY_SIZE;
use ring::{digest, pbkdf2};
use std::num::NonZeroU32;

const ITERATIONS: NonZeroU32 = NonZeroU32::new(50000).unwrap();

/// Generate a bad salt substitution from the seed.
fn derive_salt(seed: &[u8]) -> digest::Digest {
    // That's not a great salt, but good enough for our purposes.
    let mut salt_hash = digest::Context::new(&digest::SHA512);
    salt_hash.update(b"alnumid salt");
    salt_hash.update(seed);
    salt_hash.finish()
}

/// Key derivation function for the user supplied seed.
pub fn kdf(seed: &[u8]) -> [u8; KEY_SIZE] {
    let mut dk = [0; KEY_SIZE];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA512,
        ITERATIONS,
        derive_salt(seed).as_ref(),
        seed,
        &mut dk,
    );
    dk
}


// vim: ts=4 sw=4 expandtab
