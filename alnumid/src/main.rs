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

mod args;
mod seed;

use alnumid_lib::{IdGen, IdQuiet, repeat_probability};
use anyhow as ah;
use args::{Args, parse_args};
use seed::print_generated_seed;
use std::env::args_os;
use std::io::{BufWriter, Write};

/// Write the informational messages and warnings allowed by the quiet level to `err`.
fn print_diagnostics(args: &Args, err: &mut impl Write) -> ah::Result<()> {
    if let Some(seed) = &args.seed {
        if !args.user_seed && args.quiet < IdQuiet::NoInfo {
            print_generated_seed(err, seed)
                .map_err(|e| ah::format_err!("Failed to print the seed: {e}"))?;
        }
    }

    let p = repeat_probability(args.count, args.length);
    if p >= 0.5 && args.quiet < IdQuiet::NoWarn {
        let (count, length, percent) = (args.count, args.length, p * 100.0);
        writeln!(
            err,
            "WARNING: {count} identifiers of length {length} \
             repeat with a probability of {percent:.1} %."
        )
        .map_err(|e| ah::format_err!("Failed to print warning: {e}"))?;
    }
    Ok(())
}

/// Generate all identifiers and write them to `out`, one per line.
fn write_ids(args: &Args, out: &mut impl Write) -> ah::Result<()> {
    let mut idgen = IdGen::new(args.algorithm, args.seed.as_deref().map(str::as_bytes))?;
    for _ in 0..args.count {
        idgen
            .write_id(out, args.length)
            .and_then(|()| out.write_all(b"\n"))
            .map_err(|e| ah::format_err!("Failed to write identifier: {e}"))?;
    }
    out.flush()
        .map_err(|e| ah::format_err!("Failed to flush output: {e}"))?;
    Ok(())
}

/// Main program entry point.
fn main() -> ah::Result<()> {
    let args = parse_args(args_os())?;

    print_diagnostics(&args, &mut std::io::stderr().lock())?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_ids(&args, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alnumid_lib::is_alphabet_symbol;

    fn run(argv: &[&str]) -> String {
        let args = parse_args(argv.iter().copied()).unwrap();
        let mut out = Vec::new();
        write_ids(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn diagnostics(argv: &[&str]) -> String {
        let args = parse_args(argv.iter().copied()).unwrap();
        let mut err = Vec::new();
        print_diagnostics(&args, &mut err).unwrap();
        String::from_utf8(err).unwrap()
    }

    #[test]
    fn test_default_output() {
        let out = run(&["alnumid"]);
        assert_eq!(out.len(), 7);
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 1);
        assert!(out.trim_end().chars().all(is_alphabet_symbol));
    }

    #[test]
    fn test_length_and_count() {
        let out = run(&["alnumid", "-l", "12", "-n", "5"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert_eq!(line.len(), 12);
            assert!(line.chars().all(is_alphabet_symbol));
        }

        assert_eq!(run(&["alnumid", "-l0", "-n2"]), "\n\n");
    }

    #[test]
    fn test_seeded_output() {
        let a = run(&["alnumid", "-S", "mysecret", "-n", "4"]);
        let b = run(&["alnumid", "-S", "mysecret", "-n", "4", "-A", "chacha20"]);
        let c = run(&["alnumid", "-S", "mysecret", "-n", "4", "-A", "chacha8"]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.lines().count(), 4);

        // A shorter run is a prefix of a longer run with the same seed.
        let d = run(&["alnumid", "-S", "mysecret", "-n", "2"]);
        assert!(a.starts_with(&d));
    }

    #[test]
    fn test_diagnostics_default() {
        assert_eq!(diagnostics(&["alnumid"]), "");
        assert_eq!(diagnostics(&["alnumid", "-l", "12", "-n", "1000"]), "");
    }

    #[test]
    fn test_diagnostics_seed() {
        let err = diagnostics(&["alnumid", "-A", "chacha8"]);
        assert!(err.starts_with("Generated --seed "));
        let seed = err.lines().next().unwrap().trim_start_matches("Generated --seed ");
        assert_eq!(seed.len(), 40);
        assert!(seed.chars().all(is_alphabet_symbol));

        assert_eq!(diagnostics(&["alnumid", "-A", "chacha8", "-q1"]), "");
        assert_eq!(diagnostics(&["alnumid", "-A", "chacha8", "-q2"]), "");

        // A user supplied seed is not announced.
        assert_eq!(diagnostics(&["alnumid", "-S", "mysecret"]), "");
    }

    #[test]
    fn test_diagnostics_repeats() {
        let err = diagnostics(&["alnumid", "-n", "100", "-l", "1"]);
        assert_eq!(
            err,
            "WARNING: 100 identifiers of length 1 repeat with a probability of 100.0 %.\n"
        );

        // Warnings are still shown at quiet level 1.
        assert_eq!(diagnostics(&["alnumid", "-n", "100", "-l", "1", "-q1"]), err);
        assert_eq!(diagnostics(&["alnumid", "-n", "100", "-l", "1", "-q2"]), "");
    }

    #[test]
    fn test_write_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let args = parse_args(["alnumid"]).unwrap();
        assert!(write_ids(&args, &mut Broken).is_err());
        let args = parse_args(["alnumid", "-A", "chacha20"]).unwrap();
        assert!(print_diagnostics(&args, &mut Broken).is_err());
    }
}

// vim: ts=4 sw=4 expandtab
