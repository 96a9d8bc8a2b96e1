//! Command-line enumerator for balanced parenthesis sequences.

use anyhow::{bail, Result};
use clap::Parser;
use dyck::{text, word};
use std::io::{self, BufWriter, ErrorKind, Write};

#[derive(Debug, Parser)]
#[command(name = "dyck")]
#[command(about = "Enumerate all Dyck words of a given half-length", long_about = None)]
#[command(version)]
struct Cli {
    /// Half-length: each printed word has N opens and N closes
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    n: Option<u64>,

    /// Use the in-place string engine instead of the bit-packed one
    /// (no width limit, O(n) per word)
    #[arg(short, long)]
    strings: bool,

    /// Enumerate every half-length starting at 1, forever. This mode never
    /// terminates; interrupt the process to stop. Implies the string engine.
    #[arg(long, conflicts_with = "strings")]
    all: bool,

    /// Symbol printed for an open (must be a single ASCII character)
    #[arg(long, default_value = "(", value_parser = parse_symbol)]
    one: u8,

    /// Symbol printed for a close (must be a single ASCII character)
    #[arg(long, default_value = ")", value_parser = parse_symbol)]
    zero: u8,
}

fn parse_symbol(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("'{}' is not a single ASCII character", s)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.one == cli.zero {
        bail!("--one and --zero must differ");
    }

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);

    let result = if cli.all {
        print_forever(&mut out, cli.one, cli.zero)
    } else {
        let n = cli.n.expect("clap requires N unless --all");
        if n == 0 {
            bail!("N must be at least 1");
        }
        if cli.strings {
            print_strings(&mut out, n as usize, cli.one, cli.zero)
        } else {
            if n > word::MAX_HALF_LENGTH as u64 {
                bail!(
                    "N must be at most {} for the bit-packed engine; \
                     pass --strings for larger sizes",
                    word::MAX_HALF_LENGTH
                );
            }
            print_words(&mut out, n as u32, cli.one, cli.zero)
        }
    };

    match result {
        // Downstream closed the pipe (e.g. `dyck 10 | head`); not an error.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}

/// Enumerate with the bit-packed engine: O(1) per word.
fn print_words(out: &mut impl Write, n: u32, one: u8, zero: u8) -> io::Result<()> {
    for w in word::Words::new(n) {
        out.write_all(&word::render(w, n, one, zero))?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Enumerate with the string engine: one buffer, rewritten in place.
fn print_strings(out: &mut impl Write, n: usize, one: u8, zero: u8) -> io::Result<()> {
    let mut buf = text::minimum(n, one, zero);
    while !buf.is_empty() {
        out.write_all(&buf)?;
        out.write_all(b"\n")?;
        text::next(&mut buf, one, zero);
    }
    out.flush()
}

/// Walk half-lengths 1, 2, 3, … without end. Intentionally unbounded: the
/// sequence of all Dyck words is infinite, so the user interrupts when done.
fn print_forever(out: &mut impl Write, one: u8, zero: u8) -> io::Result<()> {
    for n in 1usize.. {
        print_strings(out, n, one, zero)?;
    }
    unreachable!("half-length range is unbounded")
}
