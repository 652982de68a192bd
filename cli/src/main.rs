//! Prints the uhdf5 integer boundary-value test program on standard output.
//!
//! Typical use from a build:
//!
//! ```text
//! geninttests > tests/t_integer_types.cpp
//! ```
//!
//! Diagnostics go to standard error and are controlled with `RUST_LOG`.
#![warn(
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    unused_qualifications
)]

use std::io::{self, Write as _};

use anyhow::Context as _;
use clap::Parser;
use env_logger::Env;

/// Print the C++ program that writes the minimum and maximum of every fixed-width integer type
/// to a uhdf5 file.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let Args {} = Args::parse();

    let source = uhdf5_inttests::generate();
    log::info!(
        "generated {} datasets, {} bytes",
        uhdf5_inttests::IntegerTypeCase::ALL.len(),
        source.len()
    );

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(source.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write the generated program to stdout")?;
    Ok(())
}
