//! Generates the C++ program that round-trips the boundary values of every fixed-width integer
//! type through `uhdf5`.
//!
//! The generated program takes an output path as its only argument, creates a file there and, for
//! each of `int8_t`, `int16_t`, `int32_t`, `int64_t`, `uint8_t`, `uint16_t`, `uint32_t` and
//! `uint64_t` (in that order), creates a two-element dataset named after the type holding the
//! type's minimum and maximum. [`generate`] returns its source; [`expected_datasets`] describes
//! the file it produces.
//!
//! ```
//! let source = uhdf5_inttests::generate();
//! assert!(source.contains("uint32_t v[2] = { 0UL, 4294967295UL };"));
//! ```
//!
//! # Features
//!
//! - `serde`: Implement `Serialize` and `Deserialize` for [`IntegerTypeCase`] (as its type name)
//! and `Serialize` for [`ExpectedDataset`].
//! - `arbitrary`: Implement `Arbitrary` for [`IntegerTypeCase`] and [`Width`].
#![warn(
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    unused_qualifications
)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]

use core::fmt;

mod case;
mod manifest;
mod parse;
mod render;

pub use case::{IntegerTypeCase, Literal, Width};
pub use manifest::{expected_datasets, ExpectedDataset};
pub use parse::{ParseError, ParseErrorKind};

/// The number of elements in every dataset of the generated program.
pub const EXTENT: usize = 2;

/// Produce the complete C++ translation unit.
///
/// The output is the same on every call.
#[must_use]
pub fn generate() -> String {
    let mut source = String::new();
    // Formatting into a `String` is infallible.
    let _ = write_fixture(&mut source);
    source
}

/// Stream the translation unit returned by [`generate`] into `out`.
///
/// # Errors
///
/// Only errors reported by `out` itself are returned.
pub fn write_fixture<W: fmt::Write>(out: &mut W) -> fmt::Result {
    render::generate(out)
}
