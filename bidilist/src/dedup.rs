use crate::{Edge, EdgeMap};

/// Remembers, per edge, the collection length at which that edge last fired.
///
/// A loader is allowed once per observed length: repeated scroll events at the same length are
/// filtered out until the collection grows or shrinks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DedupTracker {
    fired_at: EdgeMap<Option<usize>>,
}

impl DedupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_fire(&self, edge: Edge, len: usize) -> bool {
        self.fired_at[edge] != Some(len)
    }

    pub fn mark_fired(&mut self, edge: Edge, len: usize) {
        self.fired_at[edge] = Some(len);
    }

    /// Combined `should_fire` + `mark_fired`. Returns `true` when the edge may fire.
    pub fn try_fire(&mut self, edge: Edge, len: usize) -> bool {
        if !self.should_fire(edge, len) {
            return false;
        }
        self.mark_fired(edge, len);
        true
    }

    pub fn triggered_for_len(&self, edge: Edge) -> Option<usize> {
        self.fired_at[edge]
    }

    /// Lets `edge` fire again at the current length (caller-driven retry).
    pub fn forget(&mut self, edge: Edge) {
        self.fired_at[edge] = None;
    }

    pub fn reset(&mut self) {
        self.fired_at = EdgeMap::default();
    }
}
