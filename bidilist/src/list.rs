use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::anchor::{Anchor, MutationSide};
use crate::dedup::DedupTracker;
use crate::indicator::{Slot, SlotComponents, select_slot};
use crate::refresh::{PullFrame, PullToRefresh, Release};
use crate::serializer::{LoadPhase, LoadSerializer, Request};
use crate::state::{EdgeState, ListState};
use crate::threshold;
use crate::{Edge, EdgeMap, ListOptions, LoadOutcome, ScrollCommand, ScrollMetrics};

/// Whether an edge's loader may still deliver a collection change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum PendingData {
    #[default]
    None,
    Running,
    /// Settled without a length change yet; expires on the next scroll event. Ordered by
    /// settlement so that data is handed to loads in the order they finished.
    Settled(u64),
}

/// One row handed to the caller's render callback.
#[derive(Debug)]
pub struct RenderSlot<'a, T> {
    /// Index in the host list's render space.
    pub index: i64,
    /// Index into the item collection.
    pub data_index: usize,
    pub item: &'a T,
}

/// Headless controller for a list that loads more items at both ends.
///
/// This type does not hold any UI objects and does not run loaders itself. Adapters drive it by:
/// - forwarding host events to `on_scroll` / `on_layout` / `on_content_size`, and invoking the
///   loader for the edge those calls return
/// - reporting loader settlement with `settle`, which may release a queued loader
/// - handing every new item collection to `set_data`, and forwarding any returned
///   [`ScrollCommand`] to the host list
///
/// Row addressing follows the host list's *render index* space; see [`Anchor`].
#[derive(Clone, Debug)]
pub struct BidirectionalList<T> {
    options: ListOptions,
    data: Arc<[T]>,
    dedup: DedupTracker,
    serializer: LoadSerializer,
    anchor: Anchor,
    pending: EdgeMap<PendingData>,
    settlements: u64,
    resets: u64,
    refresh: PullToRefresh,
    last_metrics: Option<ScrollMetrics>,
}

impl<T> BidirectionalList<T> {
    pub fn new(options: ListOptions) -> Self {
        Self::with_data(options, Arc::from(Vec::new()))
    }

    pub fn with_data(options: ListOptions, data: Arc<[T]>) -> Self {
        ldebug!(
            len = data.len(),
            inverted = options.inverted,
            start_threshold = options.start_threshold,
            end_threshold = options.end_threshold,
            "BidirectionalList::new"
        );
        Self {
            options,
            data,
            dedup: DedupTracker::new(),
            serializer: LoadSerializer::new(),
            anchor: Anchor::new(),
            pending: EdgeMap::default(),
            settlements: 0,
            resets: 0,
            refresh: PullToRefresh::new(),
            last_metrics: None,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Flipping `inverted` changes which edge is drawn on top, so load tracking and the anchor
    /// start over.
    pub fn set_options(&mut self, options: ListOptions) {
        let inverted_changed = self.options.inverted != options.inverted;
        self.options = options;
        ltrace!(
            inverted = self.options.inverted,
            start_threshold = self.options.start_threshold,
            end_threshold = self.options.end_threshold,
            "BidirectionalList::set_options"
        );
        if inverted_changed {
            self.reset_tracking();
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn data(&self) -> &Arc<[T]> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn last_metrics(&self) -> Option<ScrollMetrics> {
        self.last_metrics
    }

    pub fn in_progress(&self, edge: Edge) -> bool {
        self.serializer.in_progress(edge)
    }

    pub fn phase(&self, edge: Edge) -> LoadPhase {
        self.serializer.phase(edge)
    }

    pub fn triggered_for_len(&self, edge: Edge) -> Option<usize> {
        self.dedup.triggered_for_len(edge)
    }

    /// Returns a snapshot of the load tracking and anchor state.
    pub fn state(&self) -> ListState {
        let edge_state = |edge| EdgeState {
            triggered_for_len: self.dedup.triggered_for_len(edge),
            phase: self.serializer.phase(edge),
        };
        ListState {
            len: self.data.len(),
            first_render_index: self.anchor.first_render_index(),
            edges: EdgeMap::new(edge_state(Edge::Start), edge_state(Edge::End)),
            refreshing: self.refresh.is_refreshing(),
        }
    }

    /// Handles a scroll event from the host list.
    ///
    /// Returns the edge whose loader the caller must invoke now, if any. When both edges are
    /// within their thresholds, the top one starts and the bottom one is queued behind it.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<Edge> {
        ltrace!(
            offset = metrics.offset_from_start,
            viewport = metrics.viewport_len,
            content = metrics.content_len,
            "BidirectionalList::on_scroll"
        );
        self.last_metrics = Some(metrics);
        for edge in Edge::ALL {
            if let PendingData::Settled(_) = self.pending[edge] {
                self.pending[edge] = PendingData::None;
            }
        }

        let inverted = self.options.inverted;
        let hits = threshold::evaluate(
            metrics,
            self.options.threshold_for(Edge::leading(inverted)),
            self.options.threshold_for(Edge::trailing(inverted)),
        );

        let mut started = None;
        for (hit, edge) in [
            (hits.at_start, Edge::leading(inverted)),
            (hits.at_end, Edge::trailing(inverted)),
        ] {
            if !hit {
                continue;
            }
            // The second edge is still requested so that it queues behind the first.
            if let Some(edge) = self.maybe_request(edge) {
                started.get_or_insert(edge);
            }
        }
        started
    }

    /// Handles a viewport size change. Same contract as [`Self::on_scroll`].
    pub fn on_layout(&mut self, metrics: ScrollMetrics) -> Option<Edge> {
        self.on_scroll(metrics)
    }

    /// Handles a content size change. Same contract as [`Self::on_scroll`].
    ///
    /// This matters for short lists: when content fits the viewport no scroll event will ever
    /// arrive, but both edges are considered reached.
    pub fn on_content_size(&mut self, metrics: ScrollMetrics) -> Option<Edge> {
        self.on_scroll(metrics)
    }

    fn maybe_request(&mut self, edge: Edge) -> Option<Edge> {
        if self.serializer.phase(edge) != LoadPhase::Idle {
            return None;
        }
        let len = self.data.len();
        if !self.dedup.try_fire(edge, len) {
            return None;
        }
        ldebug!(?edge, len, "edge reached");
        match self.serializer.request(edge) {
            Request::Start(edge) => {
                self.begin_load(edge);
                Some(edge)
            }
            Request::Queued | Request::Dropped => None,
        }
    }

    fn begin_load(&mut self, edge: Edge) {
        self.pending[edge] = PendingData::Running;
        self.notify_progress(edge, true);
    }

    fn notify_progress(&self, edge: Edge, in_progress: bool) {
        ltrace!(?edge, in_progress, "load progress");
        if let Some(cb) = &self.options.on_progress_change {
            cb(edge, in_progress);
        }
    }

    /// Reports that the loader for `edge` settled.
    ///
    /// Success and failure both clear the in-progress flag. Returns the queued opposite edge when
    /// this settlement releases it; the caller must invoke that loader next. Settlements for an
    /// edge that is not loading are ignored.
    pub fn settle(&mut self, edge: Edge, outcome: LoadOutcome) -> Option<Edge> {
        if !self.serializer.in_progress(edge) {
            lwarn!(?edge, ?outcome, "settle ignored: edge is not loading");
            return None;
        }
        let next = self.serializer.settle(edge, outcome);
        self.settle_pending(edge, outcome);
        self.notify_progress(edge, false);

        let next = next?;
        self.begin_load(next);
        Some(next)
    }

    fn settle_pending(&mut self, edge: Edge, outcome: LoadOutcome) {
        if self.pending[edge] == PendingData::None {
            return;
        }
        self.pending[edge] = match outcome {
            LoadOutcome::Done => {
                self.settlements += 1;
                PendingData::Settled(self.settlements)
            }
            LoadOutcome::Failed => {
                ldebug!(?edge, "loader failed");
                PendingData::None
            }
        };
    }

    /// Lets `edge` fire again at the current collection length.
    ///
    /// Loaders are never retried automatically; call this from your own retry policy.
    pub fn retry(&mut self, edge: Edge) {
        self.dedup.forget(edge);
    }

    /// Accepts a new item collection and keeps the visible rows in place.
    ///
    /// The length change is attributed to whichever loader (or refresh) is awaiting data. Rows
    /// added on the top side move the anchor; rows added at the bottom do not. Unattributed
    /// growth is treated as bottom growth and unattributed shrinking as a full replacement.
    ///
    /// Returns a scroll command when autoscroll to the newest row applies.
    pub fn set_data(&mut self, data: Arc<[T]>) -> Option<ScrollCommand> {
        if Arc::ptr_eq(&self.data, &data) {
            return None;
        }
        let prev_len = self.data.len();
        let new_len = data.len();
        self.data = data;

        if prev_len == 0 || new_len == 0 {
            self.reset_tracking();
            return None;
        }
        if prev_len == new_len {
            return None;
        }

        let side = if let Some(edge) = self.take_pending() {
            if edge == Edge::leading(self.options.inverted) {
                MutationSide::Leading
            } else {
                MutationSide::Trailing
            }
        } else if new_len < prev_len {
            ldebug!(prev_len, new_len, "collection shrank without a load, resetting");
            self.reset_tracking();
            return None;
        } else {
            MutationSide::Trailing
        };
        self.apply_mutation(prev_len, new_len, side)
    }

    /// The load a collection change belongs to: the earliest settled one, else the running one.
    fn take_pending(&mut self) -> Option<Edge> {
        let settled = Edge::ALL
            .into_iter()
            .filter_map(|edge| match self.pending[edge] {
                PendingData::Settled(seq) => Some((seq, edge)),
                _ => None,
            })
            .min()
            .map(|(_, edge)| edge);
        let edge = settled.or_else(|| {
            Edge::ALL
                .into_iter()
                .find(|&edge| self.pending[edge] == PendingData::Running)
        })?;
        self.pending[edge] = PendingData::None;
        Some(edge)
    }

    /// Like [`Self::set_data`], but the caller states which data edge the items were added to or
    /// removed from.
    pub fn set_data_at(&mut self, data: Arc<[T]>, edge: Edge) -> Option<ScrollCommand> {
        if Arc::ptr_eq(&self.data, &data) {
            return None;
        }
        let prev_len = self.data.len();
        let new_len = data.len();
        self.data = data;

        if prev_len == 0 || new_len == 0 {
            self.reset_tracking();
            return None;
        }
        if prev_len == new_len {
            return None;
        }
        self.pending[edge] = PendingData::None;
        let side = if edge == Edge::leading(self.options.inverted) {
            MutationSide::Leading
        } else {
            MutationSide::Trailing
        };
        self.apply_mutation(prev_len, new_len, side)
    }

    /// Replaces the collection and starts load tracking and anchoring over.
    ///
    /// Use this when the new collection is not an incremental change of the previous one (e.g.
    /// switching conversations). Loads that are already running still settle normally.
    pub fn reset_data(&mut self, data: Arc<[T]>) {
        self.data = data;
        self.reset_tracking();
    }

    fn reset_tracking(&mut self) {
        ldebug!(len = self.data.len(), "reset load tracking");
        self.dedup.reset();
        self.anchor.reset();
        self.pending = EdgeMap::default();
        self.resets += 1;
    }

    /// Counts how often load tracking and the anchor were reset.
    ///
    /// Hosts compare it across a data or options change: a new value means render indexes were
    /// renumbered from scratch rather than shifted by a prepend.
    pub fn reset_generation(&self) -> u64 {
        self.resets
    }

    fn apply_mutation(
        &mut self,
        prev_len: usize,
        new_len: usize,
        side: MutationSide,
    ) -> Option<ScrollCommand> {
        let shift = self.anchor.apply(prev_len, new_len, side);
        ldebug!(
            prev_len,
            new_len,
            ?side,
            shift,
            first_render_index = self.anchor.first_render_index(),
            "applied collection change"
        );

        if side == MutationSide::Leading || new_len < prev_len {
            return None;
        }
        if !self.options.enable_autoscroll_to_newest {
            return None;
        }
        let near_newest = self.last_metrics.is_some_and(|m| {
            m.fits_viewport() || m.offset_from_end() < self.options.autoscroll_threshold as i64
        });
        if !near_newest {
            return None;
        }
        let render_index = self.anchor.last_render_index(new_len)?;
        ltrace!(render_index, "autoscroll to newest");
        Some(ScrollCommand {
            render_index,
            animated: true,
        })
    }

    /// Translates a render index to a data index, or `None` when it is out of range.
    pub fn data_index(&self, render_index: i64) -> Option<usize> {
        self.anchor
            .data_index(render_index, self.data.len(), self.options.inverted)
    }

    /// Translates a data index to a render index, or `None` when it is out of range.
    pub fn render_index(&self, data_index: usize) -> Option<i64> {
        self.anchor
            .render_index(data_index, self.data.len(), self.options.inverted)
    }

    /// The render indexes currently addressable by the host list.
    pub fn render_range(&self) -> Range<i64> {
        let first = self.anchor.first_render_index();
        first..first + self.data.len() as i64
    }

    pub fn item_at(&self, render_index: i64) -> Option<&T> {
        let data_index = self.data_index(render_index)?;
        self.data.get(data_index)
    }

    /// Calls `render` with the row at `render_index`. Returns `None` for out-of-range rows.
    pub fn render_with<R>(
        &self,
        render_index: i64,
        render: impl FnOnce(RenderSlot<'_, T>) -> R,
    ) -> Option<R> {
        let data_index = self.data_index(render_index)?;
        let item = self.data.get(data_index)?;
        Some(render(RenderSlot {
            index: render_index,
            data_index,
            item,
        }))
    }

    /// Render index the host should show first when it mounts.
    pub fn initial_render_index(&self) -> Option<i64> {
        let len = self.data.len();
        if len == 0 {
            return None;
        }
        self.render_index(self.options.initial_scroll_index.min(len - 1))
    }

    /// Scroll command for the last item of the collection.
    pub fn scroll_to_end(&self, animated: bool) -> Option<ScrollCommand> {
        let last = self.data.len().checked_sub(1)?;
        self.scroll_to_index(last, animated)
    }

    /// Scroll command for a data index. `None` when the index is out of range.
    pub fn scroll_to_index(&self, index: usize, animated: bool) -> Option<ScrollCommand> {
        let render_index = self.render_index(index)?;
        Some(ScrollCommand {
            render_index,
            animated,
        })
    }

    /// Scroll command for the first item equal to `item`. `None` when there is no such item.
    pub fn scroll_to_item(&self, item: &T, animated: bool) -> Option<ScrollCommand>
    where
        T: PartialEq,
    {
        let index = self.data.iter().position(|d| d == item)?;
        self.scroll_to_index(index, animated)
    }

    /// Content for the slot above the first row.
    pub fn header_slot(&self, parts: SlotComponents) -> Slot {
        let edge = Edge::leading(self.options.inverted);
        select_slot(
            self.options.show_default_loading_indicators,
            self.serializer.in_progress(edge),
            parts,
        )
    }

    /// Content for the slot below the last row.
    pub fn footer_slot(&self, parts: SlotComponents) -> Slot {
        let edge = Edge::trailing(self.options.inverted);
        select_slot(
            self.options.show_default_loading_indicators,
            self.serializer.in_progress(edge),
            parts,
        )
    }

    fn offset_from_start(&self) -> u64 {
        self.last_metrics.map_or(0, |m| m.offset_from_start)
    }

    fn top_blocked(&self) -> bool {
        self.serializer
            .in_progress(Edge::leading(self.options.inverted))
    }

    pub fn pull_frame(&self) -> PullFrame {
        self.refresh.frame()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_refreshing()
    }

    /// A drag gesture started on the list.
    pub fn pull_grant(&mut self) {
        let offset = self.offset_from_start();
        let blocked = self.top_blocked();
        self.refresh.grant(offset, blocked);
    }

    /// The drag moved by `dy` (positive is downward) since it started.
    pub fn pull_drag(&mut self, dy: f32) -> PullFrame {
        let offset = self.offset_from_start();
        let blocked = self.top_blocked();
        self.refresh.drag(dy, offset, blocked)
    }

    /// The drag ended. On [`Release::Refresh`] the caller must run its refresh loader and then
    /// call [`Self::finish_refresh`].
    pub fn pull_release(&mut self, dy: f32) -> Release {
        let offset = self.offset_from_start();
        let release = self.refresh.release(dy, offset);
        if release == Release::Refresh {
            self.pending[Edge::leading(self.options.inverted)] = PendingData::Running;
        }
        release
    }

    /// Starts a refresh without a gesture (e.g. the caller's `refreshing` flag turned on).
    ///
    /// Returns `false` if a refresh is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if !self.refresh.begin_refresh() {
            return false;
        }
        self.pending[Edge::leading(self.options.inverted)] = PendingData::Running;
        true
    }

    pub fn finish_refresh(&mut self, outcome: LoadOutcome) {
        if !self.refresh.is_refreshing() {
            return;
        }
        self.refresh.finish_refresh();
        self.settle_pending(Edge::leading(self.options.inverted), outcome);
    }
}
