use fxhash::FxHashSet;
use log::{debug, trace};

use crate::dimacs::sat_instance::SATInstance;

use super::{
    active_list::ActiveList,
    activity::ActivityLedger,
    assignment_trail::{Action, AssignmentTrail},
    clause::{Clause, ClauseAllocator, ClauseKey, Occurrence},
    config::{DecisionConfig, HeuristicOption, SolverConfig},
    occurrence_list::OccurrenceLists,
    stats::RuntimeStats,
    types::{lits_from_vars, DecisionLevel, LBool, Lit, SolveStatus, Var},
};

pub struct DPLLSolver {
    ca: ClauseAllocator,
    /// Problem clauses, in load order.
    clauses: Vec<ClauseKey>,
    n_vars: usize,

    /// Search/inference fields.
    ///
    /// Current decision level in search.
    decision_level: DecisionLevel,
    /// Every reversible mutation since load, delimited by decision marks; also the BCP queue.
    trail: AssignmentTrail,
    /// Lit -> clauses it occurs in, with the not-yet-satisfied ones linked as active.
    occs: OccurrenceLists,
    /// Unassigned variables in id order (slot == var; slot 0 is never active).
    unassigned: ActiveList,

    // General options and decision heuristics
    pure_literals: bool,
    check_model: bool,
    dh_conf: DecisionConfig,

    /// Variable/Literal metadata.
    ///
    /// Var -> assignment
    assigned: Vec<LBool>,
    /// Lit -> weights and conflict history for branching.
    ledger: ActivityLedger,

    /// Outcome so far; loading alone can already prove UNSAT.
    status: SolveStatus,
    stats: RuntimeStats,
}

impl DPLLSolver {
    pub fn new(c: SolverConfig, instance: SATInstance) -> Self {
        let n_vars = instance.n_vars;
        let n_lits = lits_from_vars(n_vars);
        let dh_conf = c.decision_config();

        let mut unassigned = ActiveList::with_capacity(n_vars + 1);
        for _ in 0..=n_vars {
            unassigned.push();
        }
        unassigned.remove(0);

        let mut solver = Self {
            ca: ClauseAllocator::new(instance.n_clauses),
            clauses: Vec::with_capacity(instance.n_clauses),
            n_vars,
            decision_level: 0,
            trail: AssignmentTrail::new(n_vars),
            occs: OccurrenceLists::new(n_lits),
            unassigned,
            pure_literals: c.pure_literals,
            check_model: c.check_model,
            dh_conf,
            assigned: vec![LBool::Undef; n_vars + 1],
            ledger: ActivityLedger::new(n_lits, dh_conf.initial_weight),
            status: SolveStatus::Unknown,
            stats: RuntimeStats::default(),
        };
        // Init solver with instance clauses
        solver.init(instance);
        solver
    }

    fn init(&mut self, instance: SATInstance) {
        for c in &instance.clauses {
            let lits = c
                .lits
                .iter()
                .map(|&l| Lit::from_dimacs(l))
                .collect::<Vec<_>>();
            self.add_clause(&lits);
        }

        // Take care of initial unit (and empty) clauses, if any
        for i in 0..self.clauses.len() {
            let (size, first) = {
                let c = &self.ca[self.clauses[i]];
                (c.size, c.occs.first().map(|o| o.lit))
            };
            match (size, first) {
                (0, _) => {
                    debug!("Empty clause in input");
                    self.status = SolveStatus::UNSAT;
                    return;
                }
                (1, Some(lit)) => match self.value(lit) {
                    LBool::False => {
                        debug!("Contradicting unit clauses on {}", lit.var());
                        self.status = SolveStatus::UNSAT;
                        return;
                    }
                    LBool::Undef => self.add_to_trail(lit),
                    LBool::True => (),
                },
                _ => (),
            }
        }

        if self.pure_literals {
            for v in 1..=self.n_vars {
                if self.assigned[v] != LBool::Undef {
                    continue;
                }
                let pos = Lit::new(v, false);
                if self.occs.get(!pos).is_empty() {
                    self.assert_pure(pos);
                } else if self.occs.get(pos).is_empty() {
                    self.assert_pure(!pos);
                }
            }
        }
    }

    pub fn solve(&mut self) -> SolveStatus {
        self.stats.solves += 1;
        if self.status != SolveStatus::Unknown {
            return self.status;
        }

        loop {
            if let Some(ck) = self.propagate() {
                self.stats.conflicts += 1;
                debug!("Conflict at DL {}: {:?}", self.decision_level, self.ca[ck]);

                // If conflict occurred at DL 0, there's no decision left to flip
                if self.decision_level == 0 {
                    self.status = SolveStatus::UNSAT;
                    return self.status;
                }
                match self.backtrack() {
                    Some(lit) => {
                        self.stats.backtracks += 1;
                        debug!("Flipping decision {} at DL {}", lit, self.decision_level);
                        self.add_to_trail(!lit);
                    }
                    None => {
                        self.status = SolveStatus::UNSAT;
                        return self.status;
                    }
                }
                continue;
            }

            // Decide new variable
            let next = self.decide();
            debug!("Deciding lit: {:?}", next);
            match next {
                // If no next one found, we've found a satisfying assignment, so return
                None => {
                    if self.check_model {
                        if let Some(ck) = self.unsatisfied_clause() {
                            panic!("Model violates {:?}", self.ca[ck]);
                        }
                    }
                    self.status = SolveStatus::SAT;
                    return self.status;
                }
                Some(lit) => {
                    self.stats.decisions += 1;
                    self.make_decision(lit);
                }
            }
        }
    }

    // Emit assignments back in DIMACS form; unassigned variables are reported positive.
    pub fn assignments(&self) -> Vec<Lit> {
        (1..=self.n_vars)
            .map(|v| Lit::new(v, self.assigned[v] == LBool::False))
            .collect()
    }

    pub fn stats(&self) -> &RuntimeStats {
        &self.stats
    }

    /// Current value of a variable.
    pub fn var_value(&self, v: Var) -> LBool {
        self.assigned[v]
    }

    // Implements BCP (unit propagation) over the unconsumed part of the trail. Stops at the
    // first conflict, leaving the trail as it stands for backtracking.
    fn propagate(&mut self) -> Option<ClauseKey> {
        let mut conflict = None;
        let mut n_props = 0;

        while let Some(l) = self.trail.get_next_bcp_lit() {
            n_props += 1;

            trace!("Propagating {}", l);
            conflict = self.propagate_lit(l);
            if conflict.is_some() {
                break;
            }
        }
        // Update stats
        self.stats.propagations += n_props;

        conflict
    }

    fn propagate_lit(&mut self, l: Lit) -> Option<ClauseKey> {
        // l's own lists can't change underneath us: only unassigned literals get disabled.
        //
        // Clauses containing l are now satisfied.
        let mut i = self.occs.get(l).first();
        while let Some(pos) = i {
            i = self.occs.get(l).next(pos);
            let ck = self.occs.get(l).clause(pos);
            self.deactivate_clause(ck);
        }

        // Clauses containing !l just lost a literal.
        let fl = !l;
        let mut i = self.occs.get(fl).first();
        while let Some(pos) = i {
            i = self.occs.get(fl).next(pos);
            let ck = self.occs.get(fl).clause(pos);
            if self.check_clause(ck) {
                return Some(ck);
            }
        }

        None
    }

    /// Drops a satisfied clause from the active lists of its unassigned literals.
    fn deactivate_clause(&mut self, ck: ClauseKey) {
        let mut deactivated = false;
        for k in 0..self.ca[ck].size {
            let occ = self.ca[ck][k];
            if self.value(occ.lit) != LBool::Undef {
                continue;
            }
            if !deactivated {
                self.trail.push(Action::DeactivateClause(ck));
                self.stats.deactivations += 1;
                deactivated = true;
            }
            // That was the literal's last open clause, so its negation is safe.
            if self.occs.disable(occ.lit, occ.pos) && self.pure_literals {
                self.assert_pure(!occ.lit);
            }
        }
    }

    /// Inverse of deactivate_clause. Undoing in trail order means the literals that are
    /// unassigned now are exactly those that were unassigned when the clause was dropped.
    fn reactivate_clause(&mut self, ck: ClauseKey) {
        for k in 0..self.ca[ck].size {
            let occ = self.ca[ck][k];
            if self.value(occ.lit) == LBool::Undef {
                self.occs.enable(occ.lit, occ.pos);
            }
        }
    }

    /// Inspects a clause that just had a literal falsified. Returns whether it is now in
    /// conflict; assigns its last open literal if it became unit.
    fn check_clause(&mut self, ck: ClauseKey) -> bool {
        let mut n_undef = 0;
        let mut open = [Lit::default(); 2];
        for occ in &self.ca[ck].occs {
            match self.value(occ.lit) {
                LBool::True => return false,
                LBool::Undef => {
                    if n_undef < 2 {
                        open[n_undef] = occ.lit;
                    }
                    n_undef += 1;
                }
                LBool::False => (),
            }
        }

        match n_undef {
            0 => {
                self.ledger.register_conflict(self.ca[ck].lits());
                true
            }
            1 => {
                self.add_to_trail(open[0]);
                false
            }
            2 => {
                let delta = self.dh_conf.weight_bump;
                if delta > 0 {
                    for l in open {
                        self.ledger.bump_weight(l, delta);
                        self.trail.push(Action::BumpWeight(l, delta));
                    }
                }
                false
            }
            _ => false,
        }
    }

    // Undo the trail down to (and including) the latest decision mark. Returns the decision
    // made at that level.
    fn backtrack(&mut self) -> Option<Lit> {
        let mut decision = None;
        while let Some(a) = self.trail.pop() {
            match a {
                Action::Assign(l) => {
                    self.unassign(l);
                    decision = Some(l);
                }
                Action::DeactivateClause(ck) => self.reactivate_clause(ck),
                Action::BumpWeight(l, delta) => self.ledger.unbump_weight(l, delta),
                Action::DecisionMark => {
                    self.decision_level -= 1;
                    // After clearing the trail, update bcp to trail head
                    self.trail.set_bcp_idx_to_trail_head();
                    return decision;
                }
            }
        }
        None
    }

    // Decide the next branch following the configured heuristic.
    fn decide(&self) -> Option<Lit> {
        match self.dh_conf.heuristic {
            HeuristicOption::Activity => self.decide_by_activity(),
            HeuristicOption::Occurrence => self.decide_by_occurrence(),
        }
    }

    /// Strict maximum of the summed polarity scores, first variable wins ties; the polarity
    /// is positive only if it scores strictly higher.
    fn decide_by_activity(&self) -> Option<Lit> {
        let mut best: Option<(f64, Lit)> = None;
        for v in self.unassigned.iter() {
            let pos = Lit::new(v, false);
            let neg = !pos;
            let s_pos = self.ledger.score(pos, self.occs.get(pos).len());
            let s_neg = self.ledger.score(neg, self.occs.get(neg).len());
            let score = s_pos + s_neg;
            if best.map_or(true, |(max, _)| score > max) {
                best = Some((score, if s_pos > s_neg { pos } else { neg }));
            }
        }
        best.map(|(_, l)| l)
    }

    fn decide_by_occurrence(&self) -> Option<Lit> {
        let mut best: Option<(usize, Var)> = None;
        for v in self.unassigned.iter() {
            let pos = Lit::new(v, false);
            let n = self.occs.get(pos).len() + self.occs.get(!pos).len();
            if best.map_or(true, |(max, _)| n > max) {
                best = Some((n, v));
            }
        }
        best.map(|(_, v)| Lit::new(v, false))
    }

    /// Clause functions
    ///
    /// Adds a constraint clause, filing each literal in its occurrence list.
    fn add_clause(&mut self, lits: &[Lit]) -> ClauseKey {
        // Repeated literals are merged so each open literal is counted once
        let mut seen = FxHashSet::default();
        let lits = lits
            .iter()
            .copied()
            .filter(|&l| seen.insert(l))
            .collect::<Vec<_>>();

        let occs = &mut self.occs;
        let ck = self.ca.create_clause(|ck| {
            lits.iter()
                .map(|&l| Occurrence::new(l, occs.add_occurrence(l, ck)))
                .collect()
        });
        self.clauses.push(ck);
        self.stats.n_clauses += 1;
        self.stats.n_clause_lits += lits.len() as u64;
        ck
    }

    /// Check if a clause is satisfied.
    fn satisfied(&self, c: &Clause) -> bool {
        c.lits().any(|l| self.value(l) == LBool::True)
    }

    /// First clause the current assignment leaves without a true literal, if any.
    fn unsatisfied_clause(&self) -> Option<ClauseKey> {
        self.clauses
            .iter()
            .copied()
            .find(|&ck| !self.satisfied(&self.ca[ck]))
    }

    /// Auxiliary structure methods
    ///
    /// Add to the trail, updating the assignment and the unassigned list
    fn add_to_trail(&mut self, lit: Lit) {
        debug_assert!(self.value(lit) == LBool::Undef);
        self.assigned[lit.var()] = LBool::from_sign(lit.sign());
        self.unassigned.remove(lit.var());
        self.trail.push(Action::Assign(lit));
    }

    fn unassign(&mut self, lit: Lit) {
        self.assigned[lit.var()] = LBool::Undef;
        self.unassigned.insert(lit.var());
    }

    fn assert_pure(&mut self, lit: Lit) {
        trace!("Pure literal {}", lit);
        self.stats.pure_lits += 1;
        self.add_to_trail(lit);
    }

    /// Makes the decision for lit. Does all of add_to_trail, after opening a new level.
    fn make_decision(&mut self, lit: Lit) {
        self.decision_level += 1;
        self.stats.max_decision_level = self
            .stats
            .max_decision_level
            .max(self.decision_level as u64);
        self.trail.mark_decision();
        self.add_to_trail(lit);
    }

    /// Literal/Variable accesses
    ///
    /// Calculate value
    fn value(&self, l: Lit) -> LBool {
        self.assigned[l.var()] ^ LBool::from(l.sign() as u8)
    }
}
