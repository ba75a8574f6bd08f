//! Boolean expression rendering.
//!
//! Turns ternary-string implicants back into readable Boolean expressions
//! over named variables. Which polarity and which group separator apply
//! depends on whether the problem was built from minterms or maxterms.

/// Whether a cover renders as a sum of AND-groups (minterm-based) or a
/// product of OR-groups (maxterm-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// `1` bare, `0` negated, literals concatenated, groups joined by `" + "`.
    Product,
    /// `1` negated, `0` bare, literals joined by `" + "`, groups concatenated.
    Sum,
}

/// Render a single implicant as one group (a product or a sum of literals,
/// per `mode`), without the surrounding parentheses.
///
/// The all-dash implicant (the constant-true term) renders as `""`.
pub fn render_term(term: &str, names: &[String], dash: char, mode: RenderMode) -> String {
    let literals: Vec<String> = term
        .chars()
        .zip(names)
        .filter_map(|(bit, name)| match (bit, mode) {
            ('1', RenderMode::Product) => Some(name.clone()),
            ('0', RenderMode::Product) => Some(format!("{name}'")),
            ('1', RenderMode::Sum) => Some(format!("{name}'")),
            ('0', RenderMode::Sum) => Some(name.clone()),
            (b, _) if b == dash => None,
            (other, _) => panic!("unexpected term symbol '{other}'"),
        })
        .collect();

    match mode {
        RenderMode::Product => literals.concat(),
        RenderMode::Sum => literals.join(" + "),
    }
}

/// Render a cover as a parenthesized expression: each implicant's group is
/// wrapped in parentheses, then joined (`" + "` for [`RenderMode::Product`],
/// concatenated for [`RenderMode::Sum`]).
///
/// An empty cover (the impossible-cover case, never reached in practice for
/// well-formed inputs) renders as `"0"`.
pub fn render_cover(cover: &[String], names: &[String], dash: char, mode: RenderMode) -> String {
    if cover.is_empty() {
        return "0".to_string();
    }
    let groups: Vec<String> = cover
        .iter()
        .map(|term| format!("({})", render_term(term, names, dash, mode)))
        .collect();

    match mode {
        RenderMode::Product => groups.join(" + "),
        RenderMode::Sum => groups.concat(),
    }
}

/// Render every cover in `covers`, one expression per entry.
pub fn render_covers(covers: &[Vec<String>], names: &[String], dash: char, mode: RenderMode) -> Vec<String> {
    covers.iter().map(|cover| render_cover(cover, names, dash, mode)).collect()
}
