//! Byte-oriented string utilities.
//!
//! A small collection of pure functions over byte slices: ASCII case
//! conversion, prefix/suffix testing, splitting on a delimiter token,
//! first-split, fixed-width chunking, and substring replacement. Everything
//! operates on in-memory `[u8]` data with no I/O and no hidden state, so
//! every function is deterministic and safe to call from any thread.
//!
//! Inputs are bytes, not text: comparisons are bytewise and case mapping is
//! the C-locale ASCII mapping applied to each byte independently. Unicode
//! case folding, normalization, and locale-aware comparison are out of
//! scope.
//!
//! Borrowing functions ([`split`], [`split_first`], [`chunk`]) return views
//! into the source buffer; the borrow checker ties their lifetime to the
//! source. The `_copy` variants and [`replace`] return owned `Vec<u8>`
//! fragments instead.
//!
//! # Examples
//!
//! ```
//! use stringops::{replace, split, split_first};
//!
//! let record = b"name=widget;color=red";
//! let (head, tail) = split_first(record, b";");
//! assert_eq!(split_first(head, b"="), (&b"name"[..], &b"widget"[..]));
//! assert_eq!(split(tail, b"=", true), [&b"color"[..], &b"red"[..]]);
//!
//! assert_eq!(replace(record, b";", b"\n"), b"name=widget\ncolor=red");
//! ```
//!
//! # Degenerate inputs
//!
//! No function fails: every operation is defined over its whole input
//! domain and returns a possibly empty result. Two inputs deserve calling
//! out because the obvious contract ("scan for the token") degenerates:
//!
//! - [`split`] / [`split_copy`] with an empty token treat the token as
//!   never occurring, so the usual no-occurrence rule applies: the whole
//!   input as the single fragment, or nothing when a discarded-empty split
//!   runs over empty input.
//! - [`replace`] with an empty search is a no-op returning a copy of the
//!   input.
//!
//! Both policies are deterministic and cannot loop. [`split_first`] is
//! different: an empty token there matches at offset zero, following the
//! usual substring-search convention, so the head is empty and the tail is
//! the whole input.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod affix;
mod ascii;
mod replace;
mod split;


pub use affix::{ends_with, starts_with};
pub use ascii::{as_lower, as_upper, chunk, to_lower_inplace, to_upper_inplace};
pub use replace::replace;
pub use split::{split, split_copy, split_first, split_first_copy};
