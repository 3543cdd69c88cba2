/// Where a collection length change came from, relative to what is drawn on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationSide {
    /// Items were spliced at the top of the list (prepend, or append when inverted).
    Leading,
    /// Items were spliced at the bottom of the list.
    Trailing,
}

/// Render-index bias that keeps on-screen items stable while items are added above them.
///
/// The host list addresses rows by *render index*. For a collection of length `len`, valid render
/// indexes are `first_render_index..first_render_index + len`. Prepending `k` items moves
/// `first_render_index` down by `k`, so every row that existed before keeps its render index and
/// the host does not see content jump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    first_render_index: i64,
}

impl Anchor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_render_index(&self) -> i64 {
        self.first_render_index
    }

    /// Magnitude of the bias (number of rows added at the top since the last reset).
    pub fn offset(&self) -> u64 {
        self.first_render_index.unsigned_abs()
    }

    pub fn reset(&mut self) {
        self.first_render_index = 0;
    }

    /// Applies a length change. Only leading-side changes move the anchor.
    ///
    /// Returns the signed shift applied to `first_render_index`.
    pub fn apply(&mut self, prev_len: usize, new_len: usize, side: MutationSide) -> i64 {
        if side == MutationSide::Trailing {
            return 0;
        }
        let delta = new_len as i64 - prev_len as i64;
        self.first_render_index -= delta;
        -delta
    }

    /// Translates a render index into a data index for a collection of length `len`.
    ///
    /// Returns `None` for render indexes outside the addressable range.
    pub fn data_index(&self, render_index: i64, len: usize, inverted: bool) -> Option<usize> {
        let visual = render_index.checked_sub(self.first_render_index)?;
        if visual < 0 || visual >= len as i64 {
            return None;
        }
        let visual = visual as usize;
        Some(if inverted { len - 1 - visual } else { visual })
    }

    /// Translates a data index into a render index for a collection of length `len`.
    pub fn render_index(&self, data_index: usize, len: usize, inverted: bool) -> Option<i64> {
        if data_index >= len {
            return None;
        }
        let visual = if inverted {
            len - 1 - data_index
        } else {
            data_index
        };
        Some(self.first_render_index + visual as i64)
    }

    /// Render index of the bottom-most row, if any.
    pub fn last_render_index(&self, len: usize) -> Option<i64> {
        if len == 0 {
            return None;
        }
        Some(self.first_render_index + len as i64 - 1)
    }
}
