//! Implicant generator: combine input terms into prime implicants.

use std::collections::{BTreeMap, BTreeSet};

use super::term::{count_ones, diff_pos, hamming, mask_matches};

/// Mapping from a prime implicant string to the required terms it covers.
pub type PrimeMap = BTreeMap<String, BTreeSet<String>>;

/// Result of running the combination phase: the prime map plus a trace of
/// what happened, for the solver's step log.
pub struct PrimeGeneration {
    pub primes: PrimeMap,
    pub steps: Vec<String>,
}

/// Run the Quine–McCluskey combination phase.
///
/// `required` is minterms ∪ maxterms (whichever the problem is defined
/// over); `dont_cares` may be combined into larger implicants but never
/// appear as a covered term in the returned map.
pub fn generate_primes(required: &BTreeSet<String>, dont_cares: &BTreeSet<String>, dash: char) -> PrimeGeneration {
    let mut steps = Vec::new();
    let mut pool: BTreeMap<String, bool> = BTreeMap::new();
    let mut level: BTreeMap<usize, Vec<String>> = BTreeMap::new();

    for term in required.iter().chain(dont_cares.iter()) {
        pool.entry(term.clone()).or_insert(false);
        level.entry(count_ones(term)).or_default().push(term.clone());
    }
    steps.push(format!(
        "bucketed {} term(s) into {} bit-count level(s)",
        pool.len(),
        level.len()
    ));

    let mut generation = 0usize;
    loop {
        let mut next: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
        let bit_counts: Vec<usize> = level.keys().copied().collect();

        for &k in &bit_counts {
            let Some(higher) = level.get(&(k + 1)) else {
                continue;
            };
            for a in &level[&k] {
                for b in higher {
                    if hamming(a, b) == 1 {
                        let pos = diff_pos(a, b);
                        let mut combined: Vec<char> = a.chars().collect();
                        combined[pos] = dash;
                        let combined: String = combined.into_iter().collect();

                        *pool.entry(a.clone()).or_insert(false) = true;
                        *pool.entry(b.clone()).or_insert(false) = true;
                        pool.entry(combined.clone()).or_insert(false);

                        next.entry(k + 1).or_default().insert(combined);
                    }
                }
            }
        }

        generation += 1;
        let produced: usize = next.values().map(|bin| bin.len()).sum();
        if produced == 0 {
            steps.push(format!("level {generation}: no further combinations, stopping"));
            break;
        }
        steps.push(format!("level {generation}: produced {produced} combined implicant(s)"));

        level = next
            .into_iter()
            .map(|(k, set)| (k, set.into_iter().collect()))
            .collect();
    }

    let mut primes: PrimeMap = BTreeMap::new();
    for (term, used) in &pool {
        if !*used {
            let covered: BTreeSet<String> = mask_matches(term, required, dash).into_iter().collect();
            // A prime built entirely from don't-cares covers no required term
            // and contributes nothing to any cover; drop it so the cover
            // search never has to handle a row with an empty column set.
            if !covered.is_empty() {
                primes.insert(term.clone(), covered);
            }
        }
    }
    steps.push(format!("found {} prime implicant(s)", primes.len()));

    PrimeGeneration { primes, steps }
}
