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

use alnumid_lib::{IdGen, IdQuiet, IdRngType, gen_seed_string};
use anyhow as ah;
use clap::error::ErrorKind::{DisplayHelp, DisplayVersion};
use clap::{Parser, ValueEnum, value_parser};
use std::ffi::OsString;

/// Length of the generated seed.
const DEFAULT_GEN_SEED_LEN: usize = 40;

const ABOUT: &str = "\
Random alphanumeric identifier generator.

This program prints random identifiers drawn from the 62 symbols 0-9, a-z and A-Z.
The identifiers are not suitable as secrets and they are not checked for collisions.
";

const EXAMPLE: &str = "\
Example usage:
alnumid --length 12 --count 4";

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "UPPER")]
enum AlgorithmChoice {
    Thread,
    Chacha8,
    Chacha12,
    Chacha20,
}

impl From<AlgorithmChoice> for IdRngType {
    fn from(value: AlgorithmChoice) -> Self {
        match value {
            AlgorithmChoice::Thread => IdRngType::Thread,
            AlgorithmChoice::Chacha8 => IdRngType::ChaCha8,
            AlgorithmChoice::Chacha12 => IdRngType::ChaCha12,
            AlgorithmChoice::Chacha20 => IdRngType::ChaCha20,
        }
    }
}

/// All command line arguments.
pub struct Args {
    pub length: usize,
    pub count: u64,
    pub algorithm: IdRngType,
    pub seed: Option<String>,
    pub user_seed: bool,
    pub quiet: IdQuiet,
}

#[derive(Debug, Parser)]
#[command(
    name = "alnumid",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = ABOUT,
    after_help = EXAMPLE,
    verbatim_doc_comment
)]
struct CliArgs {
    /// Number of symbols in each identifier.
    #[arg(
        verbatim_doc_comment,
        short = 'l',
        long = "length",
        value_name = "NUM",
        default_value_t = IdGen::DEFAULT_LENGTH,
        value_parser = value_parser!(usize)
    )]
    length: usize,

    /// Number of identifiers to generate.
    /// Each identifier is printed on its own line.
    #[arg(
        verbatim_doc_comment,
        short = 'n',
        long = "count",
        value_name = "NUM",
        default_value_t = 1,
        value_parser = value_parser!(u64).range(1..)
    )]
    count: u64,

    /// Select the random number generator algorithm.
    /// THREAD is seeded by the operating system and can't be reproduced.
    /// The CHACHA algorithms generate a reproducible identifier sequence from --seed.
    /// Defaults to THREAD, or to CHACHA20 if a --seed is given.
    #[arg(
        verbatim_doc_comment,
        short = 'A',
        long = "algorithm",
        value_enum,
        ignore_case = true
    )]
    algorithm: Option<AlgorithmChoice>,

    /// The seed to use for reproducible identifier generation.
    /// The seed may be any string (e.g. a long passphrase).
    /// If a CHACHA algorithm is selected and no seed is given, then a random seed
    /// will be generated and printed to stderr.
    #[arg(verbatim_doc_comment, short = 'S', long = "seed", value_name = "SEED")]
    seed: Option<String>,

    /// Quiet level:
    /// 0: Normal verboseness.
    /// 1: No informational output.
    /// 2: No warnings.
    #[arg(
        verbatim_doc_comment,
        short = 'q',
        long = "quiet",
        value_name = "LVL",
        default_value = "0",
        value_parser = parse_quiet
    )]
    quiet: IdQuiet,
}

impl CliArgs {
    fn into_args(self) -> ah::Result<Args> {
        let algorithm: IdRngType = match (self.algorithm, &self.seed) {
            (Some(a), _) => a.into(),
            (None, Some(_)) => IdRngType::ChaCha20,
            (None, None) => IdRngType::Thread,
        };

        if self.seed.as_deref() == Some("") {
            return Err(ah::format_err!("The --seed must not be empty."));
        }
        if !algorithm.is_seeded() && self.seed.is_some() {
            return Err(ah::format_err!(
                "The THREAD algorithm can't be used with --seed. \
                 Please select a ChaCha --algorithm or drop the --seed."
            ));
        }

        let (seed, user_seed) = match self.seed {
            Some(x) => (Some(x), true),
            None if algorithm.is_seeded() => (Some(gen_seed_string(DEFAULT_GEN_SEED_LEN)), false),
            None => (None, false),
        };

        Ok(Args {
            length: self.length,
            count: self.count,
            algorithm,
            seed,
            user_seed,
            quiet: self.quiet,
        })
    }
}

fn parse_quiet(value: &str) -> Result<IdQuiet, String> {
    let lvl = value.parse::<u8>().map_err(|e| e.to_string())?;
    let quiet = match lvl {
        x if x == IdQuiet::Normal as u8 => IdQuiet::Normal,
        x if x == IdQuiet::NoInfo as u8 => IdQuiet::NoInfo,
        x if x == IdQuiet::NoWarn as u8 => IdQuiet::NoWarn,
        _ => {
            return Err(format!(
                "Invalid quiet level '{value}'. Allowed: 0, 1, 2."
            ));
        }
    };
    Ok(quiet)
}

/// Parse all command line arguments and put them into a structure.
pub fn parse_args<I, T>(args: I) -> ah::Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliArgs::try_parse_from(args) {
        Ok(cli) => cli.into_args(),
        Err(e) => {
            match e.kind() {
                DisplayHelp | DisplayVersion => {
                    print!("{e}");
                    std::process::exit(0);
                }
                _ => (),
            }
            Err(ah::format_err!("{e}"))
        }
    }
}


// vim: ts=4 sw=4 expandtab
