use super::types::Lit;

/// Per-literal branching statistics.
///
/// Weights are bumped during propagation and undone through the trail, so they only ever
/// describe the current branch. Conflict counts are history: they survive backtracking and
/// keep steering the search towards literals that keep showing up in failing clauses.
pub struct ActivityLedger {
    // Lit -> activity weight
    weights: Vec<u64>,
    // Lit -> number of conflicting clauses it appeared in
    conflicts: Vec<u64>,
    // Sum of the sizes of all conflicting clauses, seeded at 1.
    total_conflicts: u64,
}

impl ActivityLedger {
    pub fn new(n_lits: usize, initial_weight: u64) -> Self {
        Self {
            weights: vec![initial_weight; n_lits],
            conflicts: vec![0; n_lits],
            total_conflicts: 1,
        }
    }

    pub fn weight(&self, l: Lit) -> u64 {
        self.weights[l.idx()]
    }

    pub fn bump_weight(&mut self, l: Lit, delta: u64) {
        self.weights[l.idx()] += delta;
    }

    pub fn unbump_weight(&mut self, l: Lit, delta: u64) {
        self.weights[l.idx()] -= delta;
    }

    pub fn conflicts(&self, l: Lit) -> u64 {
        self.conflicts[l.idx()]
    }

    #[cfg(test)]
    pub fn total_conflicts(&self) -> u64 {
        self.total_conflicts
    }

    /// Records a conflicting clause: each of its literals gets a count, and the total grows by
    /// the clause size.
    pub fn register_conflict<I>(&mut self, lits: I)
    where
        I: IntoIterator<Item = Lit>,
    {
        for l in lits {
            self.conflicts[l.idx()] += 1;
            self.total_conflicts += 1;
        }
    }

    /// Branching score for asserting l, given how many clauses l still occurs in.
    pub fn score(&self, l: Lit, n_active: usize) -> f64 {
        // +1 so literals that never conflicted still rank by their clauses
        let conflicts = (self.conflicts(l) + 1) as f64;
        n_active as f64 * self.weight(l) as f64 * conflicts / self.total_conflicts as f64
    }

    /// Snapshot of the reversible part of the ledger.
    #[cfg(test)]
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }
}
