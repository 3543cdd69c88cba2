use crate::{Edge, EdgeMap, LoadOutcome};

/// Lifecycle of one edge's loader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadPhase {
    #[default]
    Idle,
    /// Requested while the opposite edge was loading; starts when that load settles.
    Queued,
    Loading,
}

/// Result of [`LoadSerializer::request`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// The caller must invoke the loader for this edge now.
    Start(Edge),
    /// The opposite edge is loading; this edge will be released by its settlement.
    Queued,
    /// The edge was already loading or queued.
    Dropped,
}

/// Runs at most one loader at a time.
///
/// Both loaders usually splice into the same collection, so a start load and an end load must
/// never overlap. A request for the other edge while one is in flight is queued rather than
/// dropped; a repeated request for the same edge is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSerializer {
    phases: EdgeMap<LoadPhase>,
}

impl LoadSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, edge: Edge) -> LoadPhase {
        self.phases[edge]
    }

    /// `true` while the loader for `edge` has been invoked and has not settled.
    pub fn in_progress(&self, edge: Edge) -> bool {
        self.phases[edge] == LoadPhase::Loading
    }

    /// The edge currently loading, if any.
    pub fn loading(&self) -> Option<Edge> {
        Edge::ALL.into_iter().find(|&e| self.in_progress(e))
    }

    pub fn is_idle(&self) -> bool {
        Edge::ALL
            .into_iter()
            .all(|e| self.phases[e] == LoadPhase::Idle)
    }

    pub fn request(&mut self, edge: Edge) -> Request {
        if self.phases[edge] != LoadPhase::Idle {
            ltrace!(?edge, phase = ?self.phases[edge], "LoadSerializer::request dropped");
            return Request::Dropped;
        }
        if self.in_progress(edge.opposite()) {
            self.phases[edge] = LoadPhase::Queued;
            ltrace!(?edge, "LoadSerializer::request queued");
            return Request::Queued;
        }
        self.phases[edge] = LoadPhase::Loading;
        Request::Start(edge)
    }

    /// Marks the loader for `edge` as settled.
    ///
    /// Returns the queued opposite edge when it is released by this settlement; the caller must
    /// invoke that loader next. Settling an edge that is not loading is ignored.
    pub fn settle(&mut self, edge: Edge, outcome: LoadOutcome) -> Option<Edge> {
        if !self.in_progress(edge) {
            lwarn!(?edge, ?outcome, "LoadSerializer::settle for an edge that is not loading");
            return None;
        }
        self.phases[edge] = LoadPhase::Idle;

        let other = edge.opposite();
        if self.phases[other] != LoadPhase::Queued {
            return None;
        }
        self.phases[other] = LoadPhase::Loading;
        Some(other)
    }
}
