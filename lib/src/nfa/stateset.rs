use bitvec::vec::BitVec;

/// A set of NFA states.
///
/// States are identified by their index in the automaton, which goes from
/// zero to the number of states, so membership is tracked with one bit per
/// state. States are also kept in a vector, which allows iterating them in
/// insertion order and clearing the set without touching the whole bitmap.
#[derive(Debug, Default)]
pub(crate) struct StateSet {
    // States in the set, in insertion order.
    items: Vec<usize>,
    // The bit N is set if state N is in the set.
    bitmap: BitVec<usize>,
}

impl StateSet {
    /// Creates a set for states in the range `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self { items: Vec::new(), bitmap: BitVec::repeat(false, capacity) }
    }

    /// Adds a state to the set.
    ///
    /// Returns `true` if the state was not in the set.
    ///
    /// # Panics
    ///
    /// If `state` is not lower than the capacity of the set.
    #[inline]
    pub fn insert(&mut self, state: usize) -> bool {
        if self.bitmap[state] {
            return false;
        }
        self.bitmap.set(state, true);
        self.items.push(state);
        true
    }

    #[inline]
    pub fn contains(&self, state: usize) -> bool {
        self.bitmap.get(state).map(|bit| *bit).unwrap_or(false)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all states from the set.
    #[inline]
    pub fn clear(&mut self) {
        for state in self.items.drain(0..) {
            self.bitmap.set(state, false);
        }
    }

    /// Returns an iterator for the states in the set, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }
}
