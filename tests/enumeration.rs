//! End-to-end enumeration tests: exact sequences, Catalan counts, and
//! agreement between the bit-packed and string engines.

use dyck::{catalan, text, word};

/// Collect the full bit-engine enumeration, rendered as parentheses.
fn bit_sequence(n: u32) -> Vec<Vec<u8>> {
    word::Words::new(n)
        .map(|w| word::render(w, n, b'(', b')'))
        .collect()
}

/// Collect the full string-engine enumeration.
fn text_sequence(n: usize) -> Vec<Vec<u8>> {
    text::Texts::new(n, b'(', b')').collect()
}

#[test]
fn test_n1_single_word() {
    assert_eq!(bit_sequence(1), vec![b"()".to_vec()]);
    assert_eq!(text_sequence(1), vec![b"()".to_vec()]);
}

#[test]
fn test_n2_exact_sequence() {
    let expected = vec![b"()()".to_vec(), b"(())".to_vec()];
    assert_eq!(bit_sequence(2), expected);
    assert_eq!(text_sequence(2), expected);
}

#[test]
fn test_n3_exact_sequence() {
    let expected: Vec<Vec<u8>> = [
        &b"()()()"[..],
        b"()(())",
        b"(())()",
        b"(()())",
        b"((()))",
    ]
    .iter()
    .map(|s| s.to_vec())
    .collect();
    assert_eq!(bit_sequence(3), expected);
    assert_eq!(text_sequence(3), expected);
}

#[test]
fn test_counts_match_catalan() {
    for n in 1..=11u32 {
        assert_eq!(bit_sequence(n).len() as u64, catalan(n), "bit n={}", n);
    }
    for n in 1..=9usize {
        assert_eq!(
            text_sequence(n).len() as u64,
            catalan(n as u32),
            "text n={}",
            n
        );
    }
}

#[test]
fn test_engines_agree() {
    for n in 1..=9u32 {
        assert_eq!(bit_sequence(n), text_sequence(n as usize), "n={}", n);
    }
}

#[test]
fn test_enumeration_ends_at_maximum() {
    for n in 1..=10u32 {
        let last = word::Words::new(n).last().unwrap();
        assert_eq!(last, word::maximum(n), "n={}", n);
    }
}

#[test]
fn test_string_maximum_has_no_successor() {
    // n opens then n closes is the terminal word; next() must clear it.
    for n in 1..=10usize {
        let mut buf: Vec<u8> = Vec::new();
        buf.extend(std::iter::repeat(b'(').take(n));
        buf.extend(std::iter::repeat(b')').take(n));
        text::next(&mut buf, b'(', b')');
        assert!(buf.is_empty(), "n={}", n);
    }
}

#[test]
fn test_stop_condition_guards_successor() {
    // The iterator's advance step only runs below the maximum, so a word
    // equal to maximum(n) is yielded and then the iterator is done. If the
    // successor were (incorrectly) applied at the maximum, the extra yield
    // would show up here.
    for n in 1..=8u32 {
        let words: Vec<u64> = word::Words::new(n).collect();
        assert_eq!(*words.last().unwrap(), word::maximum(n));
        assert_eq!(words.len() as u64, catalan(n));
        let mut fused = word::Words::new(n).skip(words.len() - 1);
        assert_eq!(fused.next(), Some(word::maximum(n)));
        assert_eq!(fused.next(), None);
    }
}

#[test]
fn test_large_half_length_prefix() {
    // Full enumeration at n=32 is infeasible; check the walk starts correctly
    // and stays valid for a prefix.
    let n = word::MAX_HALF_LENGTH;
    let mut it = word::Words::new(n);
    let first = it.next().unwrap();
    assert_eq!(first, word::minimum(n));
    let mut prev = first;
    for w in it.take(10_000) {
        assert!(w > prev);
        assert_eq!(w.count_ones(), n);
        prev = w;
    }
}
