//! Bounded top-K accumulation for ranked retrieval.
//!
//! [`TopK`] keeps the best `limit` entries seen so far, ordered by descending
//! score with ties broken by ascending enumeration index. Buffers built over
//! disjoint slices of a candidate set merge into the same result the single
//! sequential pass would produce, which is what lets the ranked path fan out
//! over worker threads.

/// A candidate identifier paired with its final 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub id: u32,
    pub score: f64,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    score: f64,
    index: usize,
    id: u32,
}

impl Entry {
    /// Whether this entry sorts strictly before `other` in result order.
    fn outranks(&self, score: f64, index: usize) -> bool {
        self.score > score || (self.score == score && self.index < index)
    }
}

/// Sorted buffer of at most `limit` scored entries.
#[derive(Debug, Clone)]
pub struct TopK {
    limit: usize,
    entries: Vec<Entry>,
}

impl TopK {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: Vec::new(),
        }
    }

    /// Offer an entry. `index` is the candidate's position in the original
    /// enumeration and decides ties; entries that would sort past a full
    /// buffer's tail are dropped without shifting anything.
    pub fn insert(&mut self, id: u32, score: f64, index: usize) {
        if self.limit == 0 {
            return;
        }

        if self.entries.len() == self.limit {
            let worst = self.entries[self.entries.len() - 1];
            if worst.outranks(score, index) {
                return;
            }
        }

        let at = self
            .entries
            .partition_point(|e| e.outranks(score, index));
        self.entries.insert(at, Entry { score, index, id });
        self.entries.truncate(self.limit);
    }

    /// Fold another buffer into this one. Entry order is recomputed, so the
    /// two sides may cover any split of the original enumeration.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for e in other.entries {
            self.insert(e.id, e.score, e.index);
        }
        self
    }

    /// Consume the buffer into its final descending-score ordering.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<ScoredCandidate> {
        self.entries
            .into_iter()
            .map(|e| ScoredCandidate {
                id: e.id,
                score: e.score,
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}
