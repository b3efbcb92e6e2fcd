//! Shot sampling and outcome histograms.

use rand::Rng;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Draw one basis index from `probabilities`.
///
/// Returns the first index whose running sum exceeds a uniform draw in
/// `[0, 1)`. When rounding leaves the total below the draw, the last index
/// is returned.
pub fn sample_index<R: Rng + ?Sized>(probabilities: &[f64], rng: &mut R) -> usize {
    let r: f64 = rng.r#gen();
    let mut cumulative = 0.0;
    for (i, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if r < cumulative {
            return i;
        }
    }
    probabilities.len().saturating_sub(1)
}

/// Format `index` as a zero-padded binary string, qubit `width - 1` first.
pub fn bitstring(index: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    format!("{index:0width$b}")
}

/// Shot counts per basis index, remembering first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    counts: FxHashMap<usize, u64>,
    order: Vec<usize>,
}

impl Histogram {
    /// An empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `index`.
    pub fn record(&mut self, index: usize) {
        let count = self.counts.entry(index).or_insert(0);
        if *count == 0 {
            self.order.push(index);
        }
        *count += 1;
    }

    /// Occurrences of `index`.
    pub fn count(&self, index: usize) -> u64 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Total number of recorded shots.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The index with the highest count; ties go to the one seen first.
    pub fn most_frequent(&self) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for &index in &self.order {
            let count = self.count(index);
            match best {
                Some((_, c)) if c >= count => {}
                _ => best = Some((index, count)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Counts keyed by bitstring of the given width.
    pub fn to_bitstrings(&self, width: usize) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|(&index, &count)| (bitstring(index, width), count))
            .collect()
    }
}
