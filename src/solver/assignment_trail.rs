use super::{clause::ClauseKey, types::Lit};

/// A reversible side effect, or the boundary between two decision levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// The literal was made true (by decision, propagation or the pure rule).
    Assign(Lit),
    /// The clause became satisfied; the occurrences of its then-unassigned literals were
    /// dropped from their active lists.
    DeactivateClause(ClauseKey),
    /// The literal's activity weight was raised by the given amount.
    BumpWeight(Lit, u64),
    /// Start of a decision level; the decision literal is the next Assign above it.
    DecisionMark,
}

// Undo log during search and inference. Read bottom-up it replays every mutation since load;
// the BCP index into it doubles as the propagation queue.
pub struct AssignmentTrail {
    pub trail: Vec<Action>,
    // Index from which to continue BCP
    // - Reset to the trail head after backtracking
    pub bcp_idx: usize,
}

impl AssignmentTrail {
    pub fn new(n_vars: usize) -> Self {
        Self {
            trail: Vec::with_capacity(n_vars),
            bcp_idx: 0,
        }
    }

    // Pushes an action onto the trail.
    pub fn push(&mut self, a: Action) {
        self.trail.push(a);
    }

    pub fn pop(&mut self) -> Option<Action> {
        self.trail.pop()
    }

    pub fn mark_decision(&mut self) {
        self.trail.push(Action::DecisionMark);
    }

    // Gets the next assigned Lit at or after the BCP index, moving the index past it.
    pub fn get_next_bcp_lit(&mut self) -> Option<Lit> {
        while self.bcp_idx < self.trail.len() {
            let a = self.trail[self.bcp_idx];
            self.bcp_idx += 1;
            if let Action::Assign(lit) = a {
                return Some(lit);
            }
        }
        None
    }

    // Sets the BCP index up to the trail head.
    pub fn set_bcp_idx_to_trail_head(&mut self) {
        self.bcp_idx = self.trail.len();
    }
}
