//! Ternary-string term utilities.
//!
//! Terms are fixed-width strings over the alphabet `{'0', '1', <dash>}`.
//! Every function here is pure and operates purely on `char` positions, so
//! a multi-byte dash symbol (the default is `'−'`, U+2212) is handled
//! correctly. Callers are responsible for only comparing terms of equal
//! width; that invariant is enforced once, at construction, in
//! [`super::problem`].

/// Default dash symbol, matching the external-interface default.
pub const DEFAULT_DASH: char = '−';

/// Count of positions where `a` and `b` differ.
pub fn hamming(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// The unique index at which `a` and `b` differ.
///
/// # Panics
/// Panics if `hamming(a, b) != 1`. Callers only call this after checking.
pub fn diff_pos(a: &str, b: &str) -> usize {
    diff_positions(a, b)
        .into_iter()
        .next()
        .expect("diff_pos requires exactly one differing position")
}

/// All indices at which `a` and `b` differ.
pub fn diff_positions(a: &str, b: &str) -> Vec<usize> {
    a.chars()
        .zip(b.chars())
        .enumerate()
        .filter_map(|(i, (x, y))| (x != y).then_some(i))
        .collect()
}

/// Count of `'1'` symbols in `t` (dashes and zeros do not count).
pub fn count_ones(t: &str) -> usize {
    t.chars().filter(|&c| c == '1').count()
}

/// Render `n` as a `width`-character binary string, MSB first.
///
/// Returns `None` if `n` does not fit in `width` bits.
pub fn to_bits(n: u64, width: usize) -> Option<String> {
    if width < u64::BITS as usize && n >= (1u64 << width) {
        return None;
    }
    Some(
        (0..width)
            .map(|i| {
                let shift = width - 1 - i;
                // A shift this large would overflow u64; n can't have a bit
                // set that far up anyway, so the position is just '0'.
                if shift >= u64::BITS as usize {
                    '0'
                } else if (n >> shift) & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect(),
    )
}

/// True iff `term` agrees with `pattern` on every non-dash position of `pattern`.
pub fn mask_match(pattern: &str, term: &str, dash: char) -> bool {
    pattern
        .chars()
        .zip(term.chars())
        .all(|(p, t)| p == dash || p == t)
}

/// All `terms` that `mask_match` against `pattern`.
pub fn mask_matches<'a>(
    pattern: &str,
    terms: impl IntoIterator<Item = &'a String>,
    dash: char,
) -> Vec<String> {
    terms
        .into_iter()
        .filter(|t| mask_match(pattern, t, dash))
        .cloned()
        .collect()
}
