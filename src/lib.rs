//! # Dyck
//!
//! Successor-based enumeration of balanced parenthesis sequences (Dyck words).
//!
//! A Dyck word of half-length `n` is a sequence of `n` opens and `n` closes in
//! which every prefix has at least as many opens as closes. This crate walks
//! all such words of a fixed length in increasing order, one successor call at
//! a time, over two interchangeable representations:
//!
//! - [`word`] — the word packed into a `u64`, most-significant bit first
//!   (`1` = open, `0` = close). The successor is a closed-form, branch-free
//!   bit transform: O(1) per call.
//! - [`text`] — the word as a caller-owned byte buffer over a two-byte
//!   alphabet (defaults `b'('` / `b')'`). The successor is a single backward
//!   scan that rewrites the buffer in place: O(length) per call.
//!
//! Both representations enumerate the same sequence. The count of words
//! visited for half-length `n` is the `n`-th Catalan number.
//!
//! ## Quick Start
//!
//! ```
//! use dyck::word;
//!
//! // All 5 Dyck words of half-length 3, smallest first
//! let rendered: Vec<Vec<u8>> = word::Words::new(3)
//!     .map(|w| word::render(w, 3, b'(', b')'))
//!     .collect();
//!
//! assert_eq!(rendered[0], b"()()()");
//! assert_eq!(rendered[4], b"((()))");
//! assert_eq!(rendered.len() as u64, dyck::catalan(3));
//! ```
//!
//! ## Features
//!
//! - `std` (default) - standard library support; without it the crate is
//!   `no_std` + `alloc`
//! - `popcount-suffix` - compute the regenerated suffix length with popcount
//!   instead of integer division (bit-identical results)
//! - `cli` (default) - the `dyck` command-line enumerator

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

pub mod text;
pub mod word;

pub use word::{catalan, Word};
