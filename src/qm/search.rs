//! Cover search: essentials fixed point, branching, cost pruning, dedup.

use std::collections::{BTreeSet, HashSet};

use super::incidence::columns;
use super::primes::PrimeMap;
use super::reduce::{column_dominance, find_essentials, purge_essentials, row_dominance};

/// An ordered collection of prime-implicant strings covering every required term.
pub type Cover = Vec<String>;

/// Preferences that shape the search, mirroring the construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct SearchPreferences {
    pub dash: char,
    pub minonly: bool,
    pub sortterms: bool,
}

/// Total literal count (non-dash symbols) across a cover's implicants.
pub fn cost(cover: &[String], dash: char) -> usize {
    cover
        .iter()
        .map(|term| term.chars().filter(|&c| c != dash).count())
        .sum()
}

/// Find every minimum-cost cover of `primes`, deduplicated.
///
/// Each branch works on its own deep copy of the residual map; no mutable
/// state is shared across branches.
pub fn search(primes: &PrimeMap, prefs: &SearchPreferences) -> Vec<Cover> {
    let mut table = primes.clone();
    let mut frame_prefix: BTreeSet<String> = BTreeSet::new();

    loop {
        let essentials = find_essentials(&table);
        if essentials.is_empty() {
            break;
        }
        purge_essentials(&mut table, &essentials);
        frame_prefix.extend(essentials);
        table = row_dominance(&table);
        table = column_dominance(&table);
    }

    let prefix: Vec<String> = frame_prefix.into_iter().collect();

    if table.is_empty() {
        return vec![order_cover(prefix, prefs)];
    }

    let cols = columns(&table);
    let (_target_term, covering) = cols
        .iter()
        .min_by_key(|(term, covering)| (covering.len(), (*term).clone()))
        .expect("a non-empty table has at least one column");
    let candidates: Vec<String> = covering.iter().cloned().collect();

    let mut results: Vec<Cover> = Vec::new();
    for candidate in &candidates {
        let mut reduced = table.clone();
        let covered_by_candidate = table[candidate].clone();
        for covered in reduced.values_mut() {
            for term in &covered_by_candidate {
                covered.remove(term);
            }
        }
        reduced.remove(candidate);
        reduced.retain(|_, terms| !terms.is_empty());

        for child in search(&reduced, prefs) {
            let mut combined = prefix.clone();
            combined.push(candidate.clone());
            combined.extend(child);
            results.push(order_cover(combined, prefs));
        }
    }

    prune_to_minimum_cost(&mut results, prefs);
    dedup_covers(results)
}

fn order_cover(mut cover: Cover, prefs: &SearchPreferences) -> Cover {
    if prefs.sortterms {
        cover.sort_by(|a, b| b.cmp(a));
    }
    cover
}

fn prune_to_minimum_cost(results: &mut Vec<Cover>, prefs: &SearchPreferences) {
    if !prefs.minonly || results.is_empty() {
        return;
    }
    let min_cost = results.iter().map(|c| cost(c, prefs.dash)).min().unwrap();
    results.retain(|c| cost(c, prefs.dash) == min_cost);
}

fn dedup_covers(covers: Vec<Cover>) -> Vec<Cover> {
    let mut seen: HashSet<Cover> = HashSet::new();
    let mut out = Vec::new();
    for cover in covers {
        let mut key = cover.clone();
        key.sort();
        if seen.insert(key) {
            out.push(cover);
        }
    }
    out
}
