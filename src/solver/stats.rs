#[derive(Clone, Debug, Default)]
pub struct RuntimeStats {
    /// Record total (i.e. monotonically increasing) number of:
    /// - solves: number of solve attempts.
    /// - decisions: number of decisions made.
    /// - propagations: number of trail literals propagated.
    /// - conflicts: number of conflicts that occur
    /// - backtracks: number of decision levels undone
    /// - deactivations: number of clauses found satisfied during propagation
    /// - pure_lits: number of literals assigned by the pure rule
    pub solves: u64,
    pub decisions: u64,
    pub propagations: u64,
    pub conflicts: u64,
    pub backtracks: u64,
    pub deactivations: u64,
    pub pure_lits: u64,

    /// Record current values of:
    /// - n_clauses: num constraint clauses
    /// - n_clause_lits: num lits in constraint clauses
    /// - max_decision_level: deepest decision level reached
    pub n_clauses: u64,
    pub n_clause_lits: u64,
    pub max_decision_level: u64,
}
