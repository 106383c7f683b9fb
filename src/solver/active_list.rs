/// A doubly-linked sublist threaded through a fixed arena of slots.
///
/// Slots are allocated once with `push` and never move, so callers can keep a slot index as a
/// stable handle. Removing a slot unlinks it in O(1); reinserting it relinks it between its
/// nearest active neighbours, which keeps the active slots in ascending index order. Both
/// operations are idempotent.
#[derive(Clone, Debug, Default)]
pub struct ActiveList {
    nodes: Vec<Node>,
    first: Option<usize>,
    size: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Node {
    active: bool,
    prev: Option<usize>,
    next: Option<usize>,
}

impl ActiveList {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
            first: None,
            size: 0,
        }
    }

    /// Allocates a new slot at the end of the arena, active, and returns its index.
    pub fn push(&mut self) -> usize {
        let pos = self.nodes.len();
        self.nodes.push(Node::default());
        self.insert(pos);
        pos
    }

    /// Unlinks the slot. Returns true iff this removal emptied the list.
    pub fn remove(&mut self, pos: usize) -> bool {
        let node = self.nodes[pos];
        if !node.active {
            return false;
        }
        self.nodes[pos].active = false;
        self.size -= 1;
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.first = node.next,
        }
        if let Some(n) = node.next {
            self.nodes[n].prev = node.prev;
        }
        self.size == 0
    }

    /// Relinks the slot at its ordered position.
    pub fn insert(&mut self, pos: usize) {
        if self.nodes[pos].active {
            return;
        }
        // Only scan when the slot lands behind the head; undo order usually makes this short.
        let prev = match self.first {
            Some(f) if f < pos => (f..pos).rev().find(|&k| self.nodes[k].active),
            _ => None,
        };
        let next = match prev {
            Some(k) => self.nodes[k].next,
            None => self.first,
        };
        self.nodes[pos] = Node {
            active: true,
            prev,
            next,
        };
        match prev {
            Some(k) => self.nodes[k].next = Some(pos),
            None => self.first = Some(pos),
        }
        if let Some(n) = next {
            self.nodes[n].prev = Some(pos);
        }
        self.size += 1;
    }


    pub fn first(&self) -> Option<usize> {
        self.first
    }

    pub fn next(&self, pos: usize) -> Option<usize> {
        self.nodes[pos].next
    }

    /// Number of active slots.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cur: self.first,
        }
    }
}

pub struct Iter<'a> {
    list: &'a ActiveList,
    cur: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let pos = self.cur?;
        self.cur = self.list.next(pos);
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(n: usize) -> ActiveList {
        let mut l = ActiveList::with_capacity(n);
        for i in 0..n {
            assert_eq!(l.push(), i);
        }
        l
    }

    fn active(l: &ActiveList) -> Vec<usize> {
        l.iter().collect()
    }

    #[test]
    fn push_links_in_order() {
        let l = list_of(4);
        assert_eq!(active(&l), vec![0, 1, 2, 3]);
        assert_eq!(l.len(), 4);
        assert_eq!(l.nodes.len(), 4);
    }

    #[test]
    fn remove_head_middle_tail() {
        let mut l = list_of(4);
        assert!(!l.remove(0));
        assert!(!l.remove(2));
        assert_eq!(active(&l), vec![1, 3]);
        assert!(!l.remove(3));
        assert!(l.remove(1));
        assert!(l.is_empty());
        assert_eq!(l.first(), None);
        // Already inactive: no-op, and it doesn't re-signal emptiness
        assert!(!l.remove(1));
    }

    #[test]
    fn reinsert_restores_order() {
        let mut l = list_of(6);
        for pos in [1, 4, 2, 0, 5] {
            l.remove(pos);
        }
        assert_eq!(active(&l), vec![3]);

        // Reverse removal order, as backtracking does
        for pos in [5, 0, 2, 4, 1] {
            l.insert(pos);
        }
        assert_eq!(active(&l), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(l.len(), 6);
    }

    #[test]
    fn reinsert_out_of_order_and_idempotent() {
        let mut l = list_of(5);
        for pos in 0..5 {
            l.remove(pos);
        }
        for pos in [3, 1, 4, 0, 2] {
            l.insert(pos);
            l.insert(pos);
        }
        assert_eq!(active(&l), vec![0, 1, 2, 3, 4]);
        assert_eq!(l.len(), 5);

        // Back pointers must agree with forward links
        let mut prev = None;
        for pos in l.iter() {
            assert_eq!(l.nodes[pos].prev, prev);
            prev = Some(pos);
        }
    }
}
