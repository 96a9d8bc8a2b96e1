//! Bit-packed Dyck words and their constant-time successor.
//!
//! A Dyck word of half-length `n` lives in the low `2n` bits of a [`Word`],
//! read most-significant bit first: `1` = open `(`, `0` = close `)`. All
//! higher bits are zero. The numeric value of the integer orders all Dyck
//! words of the same half-length, and [`next`] produces the least word
//! strictly greater than its input in that order.
//!
//! # Key Operations
//!
//! | Operation | Description |
//! |-----------|-------------|
//! | `minimum(n)` | Smallest word of half-length `n`: `1010…10` |
//! | `maximum(n)` | Largest word of half-length `n`: `1…10…0`, has no successor |
//! | `next(w)` | Successor of `w`, O(1), branch-free |
//! | `render(w, n, one, zero)` | Top-down byte rendering of the low `2n` bits |
//!
//! # Implementation
//!
//! [`next`] is the closed-form transform due to Cassio Neri: isolate the
//! lowest set bit, carry it into the run of ones above it, then regenerate
//! the cleared low-order bits as the minimal alternating suffix. The length
//! of that suffix is recovered either by integer division (default) or by
//! popcount (`popcount-suffix` feature); both are bit-identical.

use alloc::vec::Vec;

/// The integer type a bit-packed Dyck word is stored in.
pub type Word = u64;

/// Width of [`Word`] in bits.
pub const WIDTH: u32 = Word::BITS;

/// Largest representable half-length: a word holds at most `WIDTH / 2` pairs.
pub const MAX_HALF_LENGTH: u32 = WIDTH / 2;

/// Alternating mask `10…10` across the full word width.
///
/// This is the minimum Dyck word of half-length `WIDTH / 2`, and the source
/// pattern every shorter minimum is cut from. Computed rather than written as
/// a literal so the definition tracks the word width.
pub const ALTERNATING: Word = {
    let mut mask: Word = 0;
    let mut k = 0;
    while k < MAX_HALF_LENGTH {
        mask |= 1 << (2 * k + 1);
        k += 1;
    }
    mask
};

/// The minimum Dyck word of half-length `n`: the pattern `10` repeated `n`
/// times, i.e. `()()…()`.
///
/// This is the canonical starting point for enumeration.
///
/// # Example
///
/// ```
/// use dyck::word::minimum;
///
/// assert_eq!(minimum(1), 0b10);
/// assert_eq!(minimum(3), 0b101010);
/// ```
#[inline]
pub const fn minimum(n: u32) -> Word {
    debug_assert!(1 <= n && n <= MAX_HALF_LENGTH);
    ALTERNATING >> (WIDTH - 2 * n)
}

/// The maximum Dyck word of half-length `n`: `n` ones followed by `n` zeros,
/// i.e. `((…))`, value `(2^n − 1) · 2^n`.
///
/// This is the terminal word of the enumeration; it has no successor, and
/// [`next`] must not be called on it.
///
/// # Example
///
/// ```
/// use dyck::word::maximum;
///
/// assert_eq!(maximum(1), 0b10);
/// assert_eq!(maximum(3), 0b111000);
/// ```
#[inline]
pub const fn maximum(n: u32) -> Word {
    debug_assert!(1 <= n && n <= MAX_HALF_LENGTH);
    (((1 as Word) << n) - 1) << n
}

/// The successor of the Dyck word `w`: the next Dyck word of the same
/// half-length, with no valid word numerically between them.
///
/// Constant time, branch-free. The half-length is implicit: the transform
/// preserves it.
///
/// # Precondition
///
/// `w` must be a valid Dyck word and not [`maximum`] of its half-length.
/// No validation is performed; violating the precondition yields a
/// meaningless value (the arithmetic wraps rather than panics). Callers must
/// compare against `maximum(n)` *before* calling — or use [`Words`], which
/// encodes that stop condition.
///
/// # Example
///
/// ```
/// use dyck::word::{maximum, minimum, next};
///
/// // ()()() -> ()(()) -> (())() -> (()()) -> ((()))
/// let mut w = minimum(3);
/// assert_eq!(w, 0b101010);
/// w = next(w);
/// assert_eq!(w, 0b101100);
/// w = next(w);
/// assert_eq!(w, 0b110010);
/// w = next(w);
/// assert_eq!(w, 0b110100);
/// w = next(w);
/// assert_eq!(w, maximum(3));
/// ```
#[inline]
pub fn next(w: Word) -> Word {
    debug_assert!(w != 0);

    // Lowest set bit, isolated via two's-complement negation.
    let a = w & w.wrapping_neg();
    // Adding it carries through the run of ones above, clearing the run and
    // setting the bit one past it.
    let b = w.wrapping_add(a);
    // The changed bits: the cleared run plus the newly set bit.
    let c = w ^ b;

    let suffix = {
        #[cfg(feature = "popcount-suffix")]
        {
            suffix_popcount(c)
        }
        #[cfg(not(feature = "popcount-suffix"))]
        {
            suffix_division(c, a)
        }
    };

    suffix | b
}

/// Minimal alternating suffix, division path.
///
/// `c / a` renormalizes the changed-bit run to start at bit 0, giving
/// `2^(r+1) − 1` for a run of `r` ones. Shifting by 2 and adding 1 yields
/// `2^(r−1)`, whose square minus 1 is a block of `2(r−1)` ones; masking with
/// [`ALTERNATING`] cuts that block down to the minimum Dyck word of
/// half-length `r − 1`.
#[inline]
fn suffix_division(c: Word, a: Word) -> Word {
    let t = (c / a >> 2).wrapping_add(1);
    t.wrapping_mul(t).wrapping_sub(1) & ALTERNATING
}

/// Minimal alternating suffix, popcount path.
///
/// `c` has `r + 1` bits set for a changed run of `r` ones, so the suffix
/// half-length is `popcount(c) − 2`. Same result as [`suffix_division`];
/// selected by the `popcount-suffix` feature where a hardware popcount beats
/// a 64-bit divide.
#[inline]
#[allow(dead_code)] // alternate strategy, kept compiled and tested for agreement
fn suffix_popcount(c: Word) -> Word {
    let pairs = c.count_ones().wrapping_sub(2);
    (1 as Word).wrapping_shl(2 * pairs).wrapping_sub(1) & ALTERNATING
}

/// Render the low `2n` bits of `w` as bytes, most-significant bit first,
/// `1 → one`, `0 → zero`.
///
/// # Example
///
/// ```
/// use dyck::word::render;
///
/// assert_eq!(render(0b101010, 3, b'(', b')'), b"()()()");
/// assert_eq!(render(0b110010, 3, b'(', b')'), b"(())()");
/// assert_eq!(render(0b110100, 3, b'1', b'0'), b"110100");
/// ```
pub fn render(w: Word, n: u32, one: u8, zero: u8) -> Vec<u8> {
    debug_assert!(1 <= n && n <= MAX_HALF_LENGTH);
    let mut out = Vec::with_capacity(2 * n as usize);
    let mut mask: Word = 1 << (2 * n - 1);
    while mask != 0 {
        out.push(if w & mask != 0 { one } else { zero });
        mask >>= 1;
    }
    out
}

/// The `n`-th Catalan number: the count of Dyck words of half-length `n`.
///
/// `catalan(n) = C(2n, n) / (n + 1)`. Exact for all `n ≤ MAX_HALF_LENGTH`;
/// the intermediate products stay within `u64`.
///
/// # Example
///
/// ```
/// assert_eq!(dyck::catalan(0), 1);
/// assert_eq!(dyck::catalan(4), 14);
/// assert_eq!(dyck::catalan(10), 16796);
/// ```
pub fn catalan(n: u32) -> u64 {
    debug_assert!(n <= MAX_HALF_LENGTH);
    let mut c: u64 = 1;
    for k in 0..n as u64 {
        // C(k+1) = C(k) * 2(2k+1) / (k+2), exact when multiplied first
        c = c * (2 * (2 * k + 1)) / (k + 2);
    }
    c
}

/// Iterator over every Dyck word of half-length `n`, from [`minimum`] to
/// [`maximum`] inclusive, in increasing order.
///
/// Encapsulates the caller-side stop condition: [`next`] is only ever
/// invoked on words strictly below the maximum.
///
/// # Example
///
/// ```
/// use dyck::word::Words;
///
/// let words: Vec<u64> = Words::new(2).collect();
/// assert_eq!(words, vec![0b1010, 0b1100]);
/// ```
#[derive(Clone, Debug)]
pub struct Words {
    /// Next word to yield, or `None` once the maximum has been yielded.
    pending: Option<Word>,
    last: Word,
}

impl Words {
    /// Enumerate all Dyck words of half-length `n` (`1 ≤ n ≤ MAX_HALF_LENGTH`).
    pub fn new(n: u32) -> Self {
        debug_assert!(1 <= n && n <= MAX_HALF_LENGTH);
        Self {
            pending: Some(minimum(n)),
            last: maximum(n),
        }
    }
}

impl Iterator for Words {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let w = self.pending?;
        self.pending = if w == self.last { None } else { Some(next(w)) };
        Some(w)
    }
}

impl core::iter::FusedIterator for Words {}
