//! Table reducers: essentials, row dominance, column dominance.

use std::collections::BTreeSet;

use super::incidence::columns;
use super::primes::PrimeMap;

/// Primes that are the unique cover of at least one term still in `primes`.
pub fn find_essentials(primes: &PrimeMap) -> BTreeSet<String> {
    let cols = columns(primes);
    let mut essentials = BTreeSet::new();
    for covering in cols.values() {
        if covering.len() == 1 {
            essentials.insert(covering.iter().next().unwrap().clone());
        }
    }
    essentials
}

/// Remove the essential rows and every column they cover.
pub fn purge_essentials(primes: &mut PrimeMap, essentials: &BTreeSet<String>) {
    let mut covered_by_essentials: BTreeSet<String> = BTreeSet::new();
    for essential in essentials {
        if let Some(terms) = primes.get(essential) {
            covered_by_essentials.extend(terms.iter().cloned());
        }
    }
    for essential in essentials {
        primes.remove(essential);
    }
    for covered in primes.values_mut() {
        for term in &covered_by_essentials {
            covered.remove(term);
        }
    }
}

/// Drop any prime whose coverage is a proper subset of another prime's.
///
/// Ties (equal coverage) are retained on both sides, preserving alternative
/// minimum covers; see the expanded spec's open-question resolution.
pub fn row_dominance(primes: &PrimeMap) -> PrimeMap {
    let mut dominated: BTreeSet<&String> = BTreeSet::new();
    for (p1, set1) in primes {
        for (p2, set2) in primes {
            if p1 != p2 && set1.len() < set2.len() && set1.is_subset(set2) {
                dominated.insert(p1);
                break;
            }
        }
    }

    primes
        .iter()
        .filter(|(p, _)| !dominated.contains(p))
        .map(|(p, ts)| (p.clone(), ts.clone()))
        .collect()
}

/// Drop any required term whose covering-prime set is a proper superset of
/// another term's: a cover of the smaller column always covers the larger one.
pub fn column_dominance(primes: &PrimeMap) -> PrimeMap {
    let cols = columns(primes);
    let terms: Vec<&String> = cols.keys().collect();

    let mut dominated: BTreeSet<&String> = BTreeSet::new();
    for &t1 in &terms {
        for &t2 in &terms {
            if t1 != t2 && cols[t1].len() < cols[t2].len() && cols[t1].is_subset(&cols[t2]) {
                dominated.insert(t2);
            }
        }
    }

    primes
        .iter()
        .map(|(p, covered)| {
            let retained: BTreeSet<String> = covered
                .iter()
                .filter(|t| !dominated.contains(t))
                .cloned()
                .collect();
            (p.clone(), retained)
        })
        .collect()
}
