//! Problem object / driver: holds inputs, orchestrates generation, search, and rendering.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::QmError;

use super::alphabet::default_variable_names;
use super::primes::{generate_primes, PrimeMap};
use super::reduce::{column_dominance, find_essentials as reduce_find_essentials, row_dominance};
use super::render::{render_covers, RenderMode};
use super::search::{search, Cover, SearchPreferences};
use super::term::{to_bits, DEFAULT_DASH};

/// A single term, as a caller may supply it: either the integer index of a
/// W-bit assignment (MSB first), or an explicit ternary string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermSpec {
    Index(u64),
    Bits(String),
}

impl From<u64> for TermSpec {
    fn from(n: u64) -> Self {
        TermSpec::Index(n)
    }
}

impl From<&str> for TermSpec {
    fn from(s: &str) -> Self {
        TermSpec::Bits(s.to_string())
    }
}

/// Which required-term family the problem was built from, and so which
/// rendering polarity applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermKind {
    Minterms,
    Maxterms,
}

fn default_true() -> bool {
    true
}

fn default_dash() -> char {
    DEFAULT_DASH
}

/// Construction parameters recognized by the problem object, matching the
/// external-interface keys.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemConfig {
    pub width: usize,
    #[serde(default)]
    pub minterms: Vec<TermSpec>,
    #[serde(default)]
    pub maxterms: Vec<TermSpec>,
    #[serde(default)]
    pub dontcares: Vec<TermSpec>,
    #[serde(default = "default_dash")]
    pub dc: char,
    #[serde(default)]
    pub vars: Option<Vec<String>>,
    #[serde(default = "default_true")]
    pub minonly: bool,
    #[serde(default = "default_true")]
    pub sortterms: bool,
}

fn normalize_term(spec: &TermSpec, width: usize) -> Result<String, QmError> {
    match spec {
        TermSpec::Index(n) => to_bits(*n, width).ok_or(QmError::TermOutOfRange { term: *n, width }),
        TermSpec::Bits(s) => {
            if s.chars().count() == width && s.chars().all(|c| c == '0' || c == '1') {
                Ok(s.clone())
            } else {
                Err(QmError::MalformedTermString { term: s.clone(), width })
            }
        }
    }
}

fn normalize_terms(specs: &[TermSpec], width: usize) -> Result<BTreeSet<String>, QmError> {
    specs.iter().map(|s| normalize_term(s, width)).collect()
}

/// Holds a minimization request and the intermediate artifacts computed
/// along the way (prime map, essentials, covers, rendered expressions),
/// exposing each stage as a public hook for step-wise use.
pub struct QmProblem {
    width: usize,
    dash: char,
    vars: Vec<String>,
    minonly: bool,
    sortterms: bool,
    kind: TermKind,
    required: BTreeSet<String>,
    dont_cares: BTreeSet<String>,
    primes: Option<PrimeMap>,
    steps: Vec<String>,
    essentials: Option<BTreeSet<String>>,
    covers: Option<Vec<Cover>>,
}

impl QmProblem {
    pub fn new(config: ProblemConfig) -> Result<Self, QmError> {
        if config.width == 0 {
            return Err(QmError::InvalidWidth);
        }
        if config.dc == '0' || config.dc == '1' {
            return Err(QmError::InvalidDash { dash: config.dc });
        }

        let kind = match (config.minterms.is_empty(), config.maxterms.is_empty()) {
            (false, false) => return Err(QmError::MixedTermKinds),
            (true, true) => return Err(QmError::NoTermsSupplied),
            (false, true) => TermKind::Minterms,
            (true, false) => TermKind::Maxterms,
        };

        let required_specs = match kind {
            TermKind::Minterms => &config.minterms,
            TermKind::Maxterms => &config.maxterms,
        };
        let required = normalize_terms(required_specs, config.width)?;
        let dont_cares = normalize_terms(&config.dontcares, config.width)?;

        let vars = match config.vars {
            Some(names) => {
                if names.len() < config.width {
                    return Err(QmError::TooFewVariableNames { needed: config.width, got: names.len() });
                }
                names.into_iter().take(config.width).collect()
            }
            None => default_variable_names(config.width),
        };

        Ok(QmProblem {
            width: config.width,
            dash: config.dc,
            vars,
            minonly: config.minonly,
            sortterms: config.sortterms,
            kind,
            required,
            dont_cares,
            primes: None,
            steps: Vec::new(),
            essentials: None,
            covers: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn kind(&self) -> TermKind {
        self.kind
    }

    /// Run (or reuse) prime-implicant generation.
    pub fn find_primes(&mut self) -> &PrimeMap {
        if self.primes.is_none() {
            let generation = generate_primes(&self.required, &self.dont_cares, self.dash);
            self.steps.extend(generation.steps);
            self.primes = Some(generation.primes);
        }
        self.primes.as_ref().unwrap()
    }

    /// Prime-implicant strings, sorted.
    pub fn prime_implicants(&mut self) -> Vec<String> {
        self.find_primes().keys().cloned().collect()
    }

    /// Essential primes over the freshly generated prime map.
    pub fn find_essentials(&mut self) -> &BTreeSet<String> {
        if self.essentials.is_none() {
            let primes = self.find_primes().clone();
            self.essentials = Some(reduce_find_essentials(&primes));
        }
        self.essentials.as_ref().unwrap()
    }

    /// Essential prime-implicant strings, sorted.
    pub fn essential_implicants(&mut self) -> Vec<String> {
        self.find_essentials().iter().cloned().collect()
    }

    /// One pass of row dominance over the current prime map, without
    /// mutating stored state: a read-only step-wise hook.
    pub fn row_dom(&mut self) -> PrimeMap {
        row_dominance(self.find_primes())
    }

    /// One pass of column dominance over the current prime map.
    pub fn col_dom(&mut self) -> PrimeMap {
        column_dominance(self.find_primes())
    }

    /// Render already-computed covers as Boolean expression strings.
    pub fn to_boolean(&self, covers: &[Cover]) -> Vec<String> {
        let mode = match self.kind {
            TermKind::Minterms => RenderMode::Product,
            TermKind::Maxterms => RenderMode::Sum,
        };
        render_covers(covers, &self.vars, self.dash, mode)
    }

    /// Run the full pipeline: prime generation (if not already run), then
    /// cover search, then rendering.
    pub fn solve(&mut self) -> Result<Vec<String>, QmError> {
        let primes = self.find_primes().clone();
        let prefs = SearchPreferences { dash: self.dash, minonly: self.minonly, sortterms: self.sortterms };
        let covers = search(&primes, &prefs);
        if covers.is_empty() {
            return Err(QmError::ImpossibleCover);
        }
        self.steps.push(format!("found {} minimal cover(s)", covers.len()));
        self.covers = Some(covers.clone());
        Ok(self.to_boolean(&covers))
    }

    /// Trace of notable steps taken so far, for the ambient step log.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// The covers computed by the last call to [`Self::solve`], if any.
    pub fn covers(&self) -> Option<&[Cover]> {
        self.covers.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::term::mask_match;

    fn config(width: usize, minterms: &[u64], dontcares: &[u64]) -> ProblemConfig {
        ProblemConfig {
            width,
            minterms: minterms.iter().map(|&n| TermSpec::Index(n)).collect(),
            maxterms: Vec::new(),
            dontcares: dontcares.iter().map(|&n| TermSpec::Index(n)).collect(),
            dc: DEFAULT_DASH,
            vars: None,
            minonly: true,
            sortterms: true,
        }
    }

    #[test]
    fn rejects_mixed_minterms_and_maxterms() {
        let mut cfg = config(3, &[1, 2], &[]);
        cfg.maxterms = vec![TermSpec::Index(0)];
        assert_eq!(QmProblem::new(cfg).unwrap_err(), QmError::MixedTermKinds);
    }

    #[test]
    fn rejects_no_terms_supplied() {
        let cfg = config(3, &[], &[]);
        assert_eq!(QmProblem::new(cfg).unwrap_err(), QmError::NoTermsSupplied);
    }

    #[test]
    fn rejects_zero_width() {
        let cfg = config(0, &[0], &[]);
        assert_eq!(QmProblem::new(cfg).unwrap_err(), QmError::InvalidWidth);
    }

    #[test]
    fn rejects_an_out_of_range_integer_term() {
        let cfg = config(2, &[7], &[]);
        assert_eq!(QmProblem::new(cfg).unwrap_err(), QmError::TermOutOfRange { term: 7, width: 2 });
    }

    #[test]
    fn rejects_a_malformed_string_term() {
        let mut cfg = config(3, &[], &[]);
        cfg.minterms = vec![TermSpec::Bits("12".to_string())];
        assert_eq!(
            QmProblem::new(cfg).unwrap_err(),
            QmError::MalformedTermString { term: "12".to_string(), width: 3 }
        );
    }

    #[test]
    fn rejects_too_few_variable_names() {
        let mut cfg = config(3, &[1], &[]);
        cfg.vars = Some(vec!["X".to_string(), "Y".to_string()]);
        assert_eq!(QmProblem::new(cfg).unwrap_err(), QmError::TooFewVariableNames { needed: 3, got: 2 });
    }

    #[test]
    fn width_one_single_minterm() {
        let mut p = QmProblem::new(config(1, &[1], &[])).unwrap();
        assert_eq!(p.solve().unwrap(), vec!["(A)".to_string()]);
    }

    #[test]
    fn width_one_single_complemented_minterm() {
        let mut p = QmProblem::new(config(1, &[0], &[])).unwrap();
        assert_eq!(p.solve().unwrap(), vec!["(A')".to_string()]);
    }

    #[test]
    fn all_minterms_render_as_the_constant_true_expression() {
        let mut p = QmProblem::new(config(2, &[0, 1, 2, 3], &[])).unwrap();
        assert_eq!(p.solve().unwrap(), vec!["()".to_string()]);
    }

    #[test]
    fn a_single_minterm_renders_the_full_product() {
        let mut p = QmProblem::new(config(3, &[5], &[])).unwrap();
        assert_eq!(p.solve().unwrap(), vec!["(AB'C)".to_string()]);
    }

    #[test]
    fn scenario_three_variables_odd_parity_collapses_to_one_literal() {
        // W=3, minterms {1,3,5,7}: every assignment with C=1.
        let mut p = QmProblem::new(config(3, &[1, 3, 5, 7], &[])).unwrap();
        assert_eq!(p.solve().unwrap(), vec!["(C)".to_string()]);
    }

    #[test]
    fn scenario_three_variables_even_parity_on_c() {
        let mut p = QmProblem::new(config(3, &[0, 2, 4, 6], &[])).unwrap();
        assert_eq!(p.solve().unwrap(), vec!["(C')".to_string()]);
    }

    #[test]
    fn scenario_two_variables_xor_has_two_equal_cost_covers() {
        // W=2, minterms {1,2}: XOR, two essential primes, single cover.
        let mut p = QmProblem::new(config(2, &[1, 2], &[])).unwrap();
        let result = p.solve().unwrap();
        assert_eq!(result.len(), 1);
        let expr = &result[0];
        assert!(expr.contains("A'B") || expr.contains("AB'"));
    }

    #[test]
    fn maxterm_based_problems_render_as_a_product_of_sums() {
        let mut cfg = config(2, &[], &[]);
        cfg.maxterms = vec![TermSpec::Index(0), TermSpec::Index(3)];
        let mut p = QmProblem::new(cfg).unwrap();
        let result = p.solve().unwrap();
        assert_eq!(result.len(), 1);
        // Each maxterm's implicant renders as a negated-OR group; groups
        // concatenate without an infix separator.
        assert!(result[0].starts_with('('));
    }

    #[test]
    fn step_trace_accumulates_across_the_pipeline() {
        let mut p = QmProblem::new(config(2, &[1, 2], &[])).unwrap();
        p.solve().unwrap();
        assert!(!p.steps().is_empty());
    }

    #[test]
    fn a_prime_built_only_from_dont_cares_does_not_panic_the_search() {
        // W=2, minterm {0}="00", don't care {3}="11": "11" only combines
        // with other don't-cares/minterms it's adjacent to, and here it is
        // hamming-2 away from "00", so it stays prime but covers nothing.
        let mut p = QmProblem::new(config(2, &[0], &[3])).unwrap();
        assert_eq!(p.solve().unwrap(), vec!["(A'B')".to_string()]);
    }

    fn literal_cost(expr: &str) -> usize {
        expr.chars().filter(|c| c.is_ascii_alphabetic()).count()
    }

    #[test]
    fn scenario_one_reaches_the_documented_minimum_cost_and_covers_every_minterm() {
        // W=4, minterms {4,8,10,11,12,15}, don't-cares {9,14}: documented
        // minimum cost is 7 literals, e.g. "(AB) + (AC) + (BC'D')".
        let mut p = QmProblem::new(config(4, &[4, 8, 10, 11, 12, 15], &[9, 14])).unwrap();
        let result = p.solve().unwrap();
        assert!(!result.is_empty());
        for expr in &result {
            assert_eq!(literal_cost(expr), 7, "unexpected cost for {expr}");
        }

        let covers = p.covers().unwrap();
        let minterms: Vec<String> =
            [4u64, 8, 10, 11, 12, 15].iter().map(|&n| to_bits(n, 4).unwrap()).collect();
        for cover in covers {
            for m in &minterms {
                assert!(
                    cover.iter().any(|prime| mask_match(prime, m, DEFAULT_DASH)),
                    "minterm {m} not covered by cover {cover:?}"
                );
            }
        }
    }

    #[test]
    fn scenario_two_reaches_the_documented_minimum_cost_and_covers_every_minterm() {
        // W=5, minterms {0,5,7,8,10,11,15,17,18,23,26,27},
        // don't-cares {2,16,19,21,24,25}: the documented cover
        // "(B'CE) + (C'E') + (AC') + (A'BDE)" costs 3+4+2+4 = 13 literals.
        let minterms = [0u64, 5, 7, 8, 10, 11, 15, 17, 18, 23, 26, 27];
        let dontcares = [2u64, 16, 19, 21, 24, 25];
        let mut p = QmProblem::new(config(5, &minterms, &dontcares)).unwrap();
        let result = p.solve().unwrap();
        assert!(!result.is_empty());
        for expr in &result {
            assert_eq!(literal_cost(expr), 13, "unexpected cost for {expr}");
        }

        let covers = p.covers().unwrap();
        let minterm_bits: Vec<String> = minterms.iter().map(|&n| to_bits(n, 5).unwrap()).collect();
        for cover in covers {
            for m in &minterm_bits {
                assert!(
                    cover.iter().any(|prime| mask_match(prime, m, DEFAULT_DASH)),
                    "minterm {m} not covered by cover {cover:?}"
                );
            }
        }
    }

    /// Exhaustive cross-check of minimum cost (small W): brute-force every
    /// subset of the generated prime implicants that covers all minterms,
    /// and confirm the search's minimum cost matches the true minimum.
    #[test]
    fn minimum_cost_matches_brute_force_search_over_all_prime_subsets() {
        let cfg = config(4, &[4, 8, 10, 11, 12, 15], &[9, 14]);
        let mut p = QmProblem::new(cfg).unwrap();
        let primes: Vec<(String, BTreeSet<String>)> =
            p.find_primes().iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let minterms: BTreeSet<String> =
            [4u64, 8, 10, 11, 12, 15].iter().map(|&n| to_bits(n, 4).unwrap()).collect();

        let mut brute_force_min = usize::MAX;
        let n = primes.len();
        for mask in 1u32..(1 << n) {
            let mut covered: BTreeSet<String> = BTreeSet::new();
            let mut cost = 0usize;
            for (i, (term, terms)) in primes.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    covered.extend(terms.iter().cloned());
                    cost += term.chars().filter(|&c| c != DEFAULT_DASH).count();
                }
            }
            if minterms.is_subset(&covered) && cost < brute_force_min {
                brute_force_min = cost;
            }
        }

        let result = p.solve().unwrap();
        let found_cost = literal_cost(&result[0]);
        assert_eq!(found_cost, brute_force_min);
    }
}
