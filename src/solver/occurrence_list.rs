use super::{active_list::ActiveList, clause::ClauseKey, types::Lit};

/// The clauses in which one literal occurs. Every occurrence keeps its slot for the lifetime of
/// the solver; the active sublist holds the ones whose clause isn't satisfied yet.
#[derive(Clone, Debug, Default)]
pub struct OccurrenceList {
    clauses: Vec<ClauseKey>,
    active: ActiveList,
}

impl OccurrenceList {
    fn push(&mut self, ck: ClauseKey) -> usize {
        self.clauses.push(ck);
        self.active.push()
    }

    pub fn clause(&self, pos: usize) -> ClauseKey {
        self.clauses[pos]
    }

    pub fn first(&self) -> Option<usize> {
        self.active.first()
    }

    pub fn next(&self, pos: usize) -> Option<usize> {
        self.active.next(pos)
    }

    /// Number of clauses still worth watching.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Positions of the active occurrences, in load order.
    #[cfg(test)]
    pub fn iter_active(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.iter()
    }
}

pub struct OccurrenceLists {
    // Literal -> List of occurrences (i.e. clauses in which this Lit appears)
    occs: Vec<OccurrenceList>,
}

impl OccurrenceLists {
    // Creates occurrence lists for n literals.
    pub fn new(n_lits: usize) -> Self {
        Self {
            occs: vec![OccurrenceList::default(); n_lits],
        }
    }

    /// Files clause ck under l, returning the occurrence's position in l's list.
    pub fn add_occurrence(&mut self, l: Lit, ck: ClauseKey) -> usize {
        self.occs[l.idx()].push(ck)
    }

    pub fn get(&self, l: Lit) -> &OccurrenceList {
        &self.occs[l.idx()]
    }

    /// Drops the occurrence from l's active list. Returns true iff that emptied the list.
    pub fn disable(&mut self, l: Lit, pos: usize) -> bool {
        self.occs[l.idx()].active.remove(pos)
    }

    pub fn enable(&mut self, l: Lit, pos: usize) {
        self.occs[l.idx()].active.insert(pos)
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;
    use crate::solver::types::lits_from_vars;

    #[test]
    fn occurrences_per_polarity() {
        let mut keys: SlotMap<ClauseKey, ()> = SlotMap::with_key();
        let (c0, c1, c2) = (keys.insert(()), keys.insert(()), keys.insert(()));

        let mut occs = OccurrenceLists::new(lits_from_vars(2));
        let x1 = Lit::from_dimacs(1);
        assert_eq!(occs.add_occurrence(x1, c0), 0);
        assert_eq!(occs.add_occurrence(!x1, c1), 0);
        assert_eq!(occs.add_occurrence(x1, c2), 1);

        assert_eq!(occs.get(x1).len(), 2);
        assert_eq!(occs.get(!x1).len(), 1);
        assert_eq!(occs.get(x1).clause(1), c2);
        assert!(occs.get(Lit::from_dimacs(2)).is_empty());

        assert!(!occs.disable(x1, 0));
        assert_eq!(occs.get(x1).iter_active().collect::<Vec<_>>(), vec![1]);
        assert!(occs.disable(x1, 1));
        assert!(occs.get(x1).is_empty());
        assert_eq!(occs.get(x1).clause(0), c0);

        occs.enable(x1, 1);
        occs.enable(x1, 0);
        assert_eq!(occs.get(x1).iter_active().collect::<Vec<_>>(), vec![0, 1]);
    }
}
