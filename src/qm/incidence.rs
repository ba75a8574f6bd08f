//! Incidence table: the column view of a prime map.

use std::collections::{BTreeMap, BTreeSet};

use super::primes::PrimeMap;

/// For every term that still appears in some row of `primes`, the set of
/// primes covering it: `T -> {P | T in primes[P]}`.
///
/// Terms that no row covers simply do not appear as keys, which is exactly
/// the "terms that still appear in any primes[P]" restriction the cover
/// search needs for branch selection.
pub fn columns(primes: &PrimeMap) -> BTreeMap<String, BTreeSet<String>> {
    let mut cols: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (prime, covered) in primes {
        for term in covered {
            cols.entry(term.clone()).or_default().insert(prime.clone());
        }
    }
    cols
}
