use core::ops::{Index, IndexMut};

/// One end of the item collection, in data order.
///
/// `Start` is the front of the collection (what the start loader prepends to), `End` is the back.
/// Which of the two is drawn at the top of the list depends on `inverted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Start,
    End,
}

impl Edge {
    pub const ALL: [Edge; 2] = [Edge::Start, Edge::End];

    pub fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }

    /// The edge drawn at the top of the list (render index side of the anchor).
    pub fn leading(inverted: bool) -> Self {
        if inverted { Self::End } else { Self::Start }
    }

    /// The edge drawn at the bottom of the list.
    pub fn trailing(inverted: bool) -> Self {
        Self::leading(inverted).opposite()
    }
}

/// A fixed-size map from [`Edge`] to `V`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeMap<V> {
    pub start: V,
    pub end: V,
}

impl<V> EdgeMap<V> {
    pub fn new(start: V, end: V) -> Self {
        Self { start, end }
    }

    pub fn get(&self, edge: Edge) -> &V {
        match edge {
            Edge::Start => &self.start,
            Edge::End => &self.end,
        }
    }

    pub fn get_mut(&mut self, edge: Edge) -> &mut V {
        match edge {
            Edge::Start => &mut self.start,
            Edge::End => &mut self.end,
        }
    }
}

impl<V> Index<Edge> for EdgeMap<V> {
    type Output = V;

    fn index(&self, edge: Edge) -> &V {
        self.get(edge)
    }
}

impl<V> IndexMut<Edge> for EdgeMap<V> {
    fn index_mut(&mut self, edge: Edge) -> &mut V {
        self.get_mut(edge)
    }
}

/// Scroll geometry reported by the host list on every scroll/layout/content-size event.
///
/// All values are in layout units along the scroll axis, measured from the visual top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub offset_from_start: u64,
    pub viewport_len: u32,
    pub content_len: u64,
}

impl ScrollMetrics {
    pub fn new(offset_from_start: u64, viewport_len: u32, content_len: u64) -> Self {
        Self {
            offset_from_start,
            viewport_len,
            content_len,
        }
    }

    /// Distance between the bottom of the viewport and the end of the content.
    ///
    /// Negative when the host reports an overscrolled (bouncing) offset.
    pub fn offset_from_end(&self) -> i64 {
        self.content_len as i64 - self.viewport_len as i64 - self.offset_from_start as i64
    }

    /// `true` when the whole content fits in the viewport.
    pub fn fits_viewport(&self) -> bool {
        self.content_len <= self.viewport_len as u64
    }
}

/// Which visual edges are within their configured thresholds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeHits {
    pub at_start: bool,
    pub at_end: bool,
}

/// How a caller-supplied loader settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadOutcome {
    Done,
    Failed,
}

/// A scroll request addressed in render-index space, ready for the host list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub render_index: i64,
    pub animated: bool,
}
