use std::fmt::Debug;

use fxhash::FxHashSet;

#[derive(Clone)]
pub struct SATInstance {
    pub n_vars: usize,
    pub n_clauses: usize,
    pub clauses: Vec<Clause>,
    // (Positive) list of all variables referenced by some clause
    pub vars: FxHashSet<Variable>,
}

impl SATInstance {
    /// Builds an instance from DIMACS-style signed literals. Literals are taken as given; range
    /// checks are the parser's job.
    pub fn from_clauses(n_vars: usize, clauses: Vec<Vec<Literal>>) -> Self {
        let mut vars = FxHashSet::default();
        let clauses = clauses
            .into_iter()
            .map(|lits| {
                vars.extend(lits.iter().map(|l| l.abs()));
                Clause { lits }
            })
            .collect::<Vec<_>>();
        Self {
            n_vars,
            n_clauses: clauses.len(),
            clauses,
            vars,
        }
    }
}

impl Debug for SATInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "n_vars: {}\tn_clauses: {}", self.n_vars, self.n_clauses)?;
        for c in &self.clauses {
            write!(f, "Clause:")?;
            for l in &c.lits {
                write!(f, " {l}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    pub lits: Vec<Literal>,
}

pub type Literal = i64;
pub type Variable = i64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_clauses_collects_referenced_vars() {
        let instance = SATInstance::from_clauses(4, vec![vec![1, -3], vec![-1]]);
        assert_eq!(instance.n_vars, 4);
        assert_eq!(instance.n_clauses, 2);
        assert_eq!(instance.clauses[0].lits, vec![1, -3]);

        let mut vars = instance.vars.iter().copied().collect::<Vec<_>>();
        vars.sort();
        assert_eq!(vars, vec![1, 3]);
    }
}
