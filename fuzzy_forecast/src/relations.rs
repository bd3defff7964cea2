//! Fuzzy logical relationships between consecutive time steps

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An observed transition between the fuzzy states of two consecutive steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flr {
    /// Fuzzy set id at step i - 1
    pub from: usize,
    /// Fuzzy set id at step i
    pub to: usize,
}

/// Build the ordered transition sequence of a fuzzified series.
///
/// One relationship per adjacent pair, `(fuzzified[i - 1], fuzzified[i])`,
/// so the output is one shorter than the input.
pub fn build_relationships(fuzzified: &[usize]) -> Vec<Flr> {
    let mut flrs = Vec::with_capacity(fuzzified.len().saturating_sub(1));
    for i in 1..fuzzified.len() {
        flrs.push(Flr {
            from: fuzzified[i - 1],
            to: fuzzified[i],
        });
    }
    flrs
}

/// Transitions grouped by source state.
///
/// Each source id maps to every target id reached from it across the whole
/// history, first-seen to last-seen, duplicates retained. A state that never
/// occurs as a source has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlrGroups {
    groups: BTreeMap<usize, Vec<usize>>,
}

impl FlrGroups {
    /// Group a relationship sequence by source state
    pub fn from_relationships(flrs: &[Flr]) -> Self {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for flr in flrs {
            groups.entry(flr.from).or_default().push(flr.to);
        }

        Self { groups }
    }

    /// Target ids recorded for a source state, in observation order
    pub fn targets(&self, from: usize) -> Option<&[usize]> {
        self.groups.get(&from).map(|targets| targets.as_slice())
    }

    /// Number of distinct source states
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no transitions were recorded
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over (source, targets) pairs in ascending source order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.groups
            .iter()
            .map(|(from, targets)| (*from, targets.as_slice()))
    }
}
