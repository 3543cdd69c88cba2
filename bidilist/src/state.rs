use crate::{EdgeMap, LoadPhase};

/// A lightweight, serializable snapshot of one edge's load tracking.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeState {
    /// Collection length at which this edge last fired its loader.
    pub triggered_for_len: Option<usize>,
    pub phase: LoadPhase,
}

impl EdgeState {
    pub fn in_progress(&self) -> bool {
        self.phase == LoadPhase::Loading
    }
}

/// A combined snapshot of the controller state, useful for debugging overlays and for asserting
/// on state transitions without reaching into the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListState {
    pub len: usize,
    pub first_render_index: i64,
    pub edges: EdgeMap<EdgeState>,
    pub refreshing: bool,
}
