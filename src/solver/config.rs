// Decision policy configs.
pub const INITIAL_WEIGHT_DEFAULT: u64 = 1;
pub const WEIGHT_BUMP_DEFAULT: u64 = 1;

#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Log filter. Set using `log::set_max_level().`
    pub verbosity: log::LevelFilter,

    /// Whether to assign pure literals, both up front and whenever a literal runs out of
    /// unsatisfied clauses during search.
    pub pure_literals: bool,
    /// Whether to re-check every clause against the final model.
    pub check_model: bool,

    pub decision_policy: DecisionPolicy,
}

impl SolverConfig {
    pub fn decision_config(&self) -> DecisionConfig {
        DecisionConfig {
            heuristic: self.decision_policy.heuristic,
            initial_weight: self.decision_policy.initial_weight,
            weight_bump: self.decision_policy.weight_bump,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            verbosity: log::max_level(),

            pure_literals: true,
            check_model: true,

            // Policies
            decision_policy: DecisionPolicy {
                heuristic: HeuristicOption::Activity,
                initial_weight: INITIAL_WEIGHT_DEFAULT,
                weight_bump: WEIGHT_BUMP_DEFAULT,
            },
        }
    }
}

// Config options for decision heuristics.
#[derive(Clone, Debug)]
pub struct DecisionPolicy {
    // Branching heuristic to use
    pub heuristic: HeuristicOption,
    // Starting activity weight of every literal.
    pub initial_weight: u64,
    // How much to raise both open literals of a clause that is down to two; 0 disables it.
    pub weight_bump: u64,
}

// Heuristic configs
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum HeuristicOption {
    /// Active clauses x activity weight x conflict history, per polarity.
    Activity,
    /// Active clauses in both polarities; always branches positive.
    Occurrence,
}

// Decision heuristics config.
#[derive(Clone, Copy, Debug)]
pub struct DecisionConfig {
    pub heuristic: HeuristicOption,
    pub initial_weight: u64,
    pub weight_bump: u64,
}
