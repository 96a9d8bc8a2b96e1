//! Dyck words as byte buffers, rewritten in place by their successor.
//!
//! The buffer form trades the bit form's O(1) transform for freedom from any
//! width limit: a word of half-length `n` is `2n` bytes over a two-byte
//! alphabet (`one` before `zero` in the ordering; defaults `b'('` / `b')'`).
//! [`next`] rewrites the buffer in place to the lexicographically next word,
//! or clears it when the input was the maximum — an empty buffer is the
//! termination signal, not an error.
//!
//! The rewrite is a single backward scan: locate the rightmost `zero, one`
//! adjacent pair, flip it to `one, zero`, restore balance with the zeros that
//! scan counted, and lay down the minimal alternating tail. O(length), no
//! allocation.

use alloc::vec::Vec;

/// Outcome of the backward pivot scan.
///
/// The scan walks from the last byte down to index 1 counting trailing
/// `zero`s (`trailing_zeros`) and the `one`s above them (`preceding_ones`),
/// and either lands on the pivot or exhausts the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scan {
    /// `buf[pivot]` is `one` and `buf[pivot - 1]` is `zero`; flipping the
    /// pair yields the next-larger prefix.
    Found {
        pivot: usize,
        trailing_zeros: usize,
        preceding_ones: usize,
    },
    /// No such pair: the word is `n` ones followed by `n` zeros, the maximum.
    Exhausted,
}

/// Locate the rightmost `zero, one` adjacent pair. Only `zero` is needed to
/// classify bytes; anything else is `one`.
fn scan_for_pivot(buf: &[u8], zero: u8) -> Scan {
    let mut trailing_zeros = 0;
    let mut preceding_ones = 0;

    for i in (1..buf.len()).rev() {
        if buf[i] == zero {
            trailing_zeros += 1;
        } else if buf[i - 1] == zero {
            return Scan::Found {
                pivot: i,
                trailing_zeros,
                preceding_ones,
            };
        } else {
            preceding_ones += 1;
        }
    }
    Scan::Exhausted
}

/// The minimum Dyck word of half-length `n` as a fresh buffer: `one, zero`
/// repeated `n` times.
///
/// # Example
///
/// ```
/// use dyck::text::minimum;
///
/// assert_eq!(minimum(3, b'(', b')'), b"()()()");
/// assert!(minimum(0, b'(', b')').is_empty());
/// ```
pub fn minimum(n: usize, one: u8, zero: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 * n);
    for _ in 0..n {
        buf.push(one);
        buf.push(zero);
    }
    buf
}

/// Rewrite `buf` in place to the next Dyck word of the same length, or clear
/// it if `buf` holds the maximum word (no successor exists).
///
/// The cleared buffer is the normal termination signal for an enumeration
/// loop; see the module docs. An already-empty buffer stays empty.
///
/// # Precondition
///
/// `buf` must hold a valid Dyck word over the `one`/`zero` alphabet. No
/// validation is performed; the rewrite of a malformed buffer is unspecified.
///
/// # Example
///
/// ```
/// use dyck::text::next;
///
/// let mut w = b"()(())".to_vec();
/// next(&mut w, b'(', b')');
/// assert_eq!(w, b"(())()");
///
/// let mut w = b"((()))".to_vec();
/// next(&mut w, b'(', b')');
/// assert!(w.is_empty());
/// ```
pub fn next(buf: &mut Vec<u8>, one: u8, zero: u8) {
    match scan_for_pivot(buf, zero) {
        Scan::Found {
            pivot,
            trailing_zeros,
            preceding_ones,
        } => {
            let m = buf.len() - 1;
            let mut i = pivot;

            // Flip the pivot pair: zero, one -> one, zero.
            buf[i - 1] = one;
            buf[i] = zero;

            // Restore balance: the flipped one displaced this many closes.
            for _ in 0..trailing_zeros - preceding_ones {
                i += 1;
                buf[i] = zero;
            }

            // Minimal completion: strict alternation up to the end.
            while i < m {
                i += 1;
                buf[i] = one;
                i += 1;
                buf[i] = zero;
            }
        }
        Scan::Exhausted => buf.clear(),
    }
}

/// Iterator over every Dyck word of half-length `n` as owned buffers, from
/// the minimum to the maximum, in increasing order.
///
/// Unlike the bit form this has no width limit; only available memory bounds
/// `n`.
///
/// # Example
///
/// ```
/// use dyck::text::Texts;
///
/// let words: Vec<Vec<u8>> = Texts::new(2, b'(', b')').collect();
/// assert_eq!(words, vec![b"()()".to_vec(), b"(())".to_vec()]);
/// ```
#[derive(Clone, Debug)]
pub struct Texts {
    buf: Vec<u8>,
    one: u8,
    zero: u8,
}

impl Texts {
    /// Enumerate all Dyck words of half-length `n` over the given alphabet.
    pub fn new(n: usize, one: u8, zero: u8) -> Self {
        Self {
            buf: minimum(n, one, zero),
            one,
            zero,
        }
    }
}

impl Iterator for Texts {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.buf.is_empty() {
            return None;
        }
        let current = self.buf.clone();
        next(&mut self.buf, self.one, self.zero);
        Some(current)
    }
}

impl core::iter::FusedIterator for Texts {}
