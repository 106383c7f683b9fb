use std::fmt::Debug;
use std::ops::Index;

use super::types::Lit;
use slotmap::{new_key_type, SlotMap};

// Note that default is ClauseKey::null()
new_key_type! {
  pub struct ClauseKey;
}

#[derive(Default)]
pub struct ClauseAllocator {
    sm: SlotMap<ClauseKey, Clause>,
}

impl ClauseAllocator {
    pub fn new(n_clauses: usize) -> Self {
        Self {
            sm: SlotMap::with_capacity_and_key(n_clauses),
        }
    }

    /// Create a new clause. The occurrences need the key they'll be filed under, so the caller
    /// builds them from it.
    pub fn create_clause<F>(&mut self, make_occs: F) -> ClauseKey
    where
        F: FnOnce(ClauseKey) -> Vec<Occurrence>,
    {
        self.sm
            .insert_with_key(|ck| Clause::new(make_occs(ck)))
    }

}

impl Index<ClauseKey> for ClauseAllocator {
    type Output = Clause;
    fn index(&self, index: ClauseKey) -> &Self::Output {
        &self.sm[index]
    }
}

/// One literal of a clause, plus where the clause sits in that literal's occurrence list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occurrence {
    pub lit: Lit,
    pub pos: usize,
}

impl Occurrence {
    pub fn new(lit: Lit, pos: usize) -> Self {
        Self { lit, pos }
    }
}

#[derive(Default, Clone)]
pub struct Clause {
    /// Size (# literals)
    pub size: usize,
    pub occs: Vec<Occurrence>,
}

impl Clause {
    fn new(occs: Vec<Occurrence>) -> Self {
        Self {
            size: occs.len(),
            occs,
        }
    }

    pub fn lits(&self) -> impl Iterator<Item = Lit> + '_ {
        self.occs.iter().map(|o| o.lit)
    }
}

impl Debug for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lit_str = self
            .lits()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "Clause {{ size: {}, lits: {} }}", self.size, lit_str)
    }
}

impl Index<usize> for Clause {
    type Output = Occurrence;
    fn index(&self, i: usize) -> &Occurrence {
        &self.occs[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_clause_hands_out_its_key() {
        let mut ca = ClauseAllocator::new(1);
        let mut seen = None;
        let ck = ca.create_clause(|ck| {
            seen = Some(ck);
            vec![
                Occurrence::new(Lit::from_dimacs(1), 0),
                Occurrence::new(Lit::from_dimacs(-2), 3),
            ]
        });
        assert_eq!(seen, Some(ck));

        let c = &ca[ck];
        assert_eq!(c.size, 2);
        assert_eq!(c[1], Occurrence::new(Lit::from_dimacs(-2), 3));
        assert_eq!(format!("{:?}", c), "Clause { size: 2, lits: 1,-2 }");
    }
}
