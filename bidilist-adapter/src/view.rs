use alloc::boxed::Box;
use alloc::sync::Arc;
use core::cell::Cell;
use core::fmt;
use core::future::{Future, poll_fn};
use core::task::{Context, Poll};

use bidilist::{
    BidirectionalList, Edge, EdgeMap, ListOptions, LoadOutcome, PullFrame, Release, RenderSlot,
    ScrollCommand, Slot, SlotComponents,
};
use futures::future::{FutureExt, LocalBoxFuture};

use crate::{HostList, LoadError, ScrollHandle};

/// The future a loader returns. It runs on the caller's executor via [`ListView::poll_settled`].
pub type LoadFuture = LocalBoxFuture<'static, Result<(), LoadError>>;

type Loader = Box<dyn FnMut() -> LoadFuture>;
type RenderItem<T, R> = Box<dyn Fn(RenderSlot<'_, T>) -> R>;

/// Which loader settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadSource {
    Edge(Edge),
    Refresh,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    pub source: LoadSource,
    pub outcome: LoadOutcome,
}

/// A [`BidirectionalList`] wired to a host list widget and to the caller's async loaders.
///
/// Scroll, layout and content-size events read their metrics from the host. Edges reached by
/// those events invoke the matching loader; the returned future is owned here and advanced by
/// [`Self::poll_settled`] / [`Self::next_settled`]. At most one edge loader and one refresh run
/// at a time. Dropping the view drops any running future.
pub struct ListView<T, H, R = ()> {
    list: BidirectionalList<T>,
    host: H,
    loaders: EdgeMap<Option<Loader>>,
    refresh_loader: Option<Loader>,
    in_flight: Option<(Edge, LoadFuture)>,
    refresh: Option<LoadFuture>,
    render_item: Option<RenderItem<T, R>>,
    warned_missing_render: Cell<bool>,
    header: SlotComponents,
    footer: SlotComponents,
}

impl<T: fmt::Debug, H: fmt::Debug, R> fmt::Debug for ListView<T, H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("list", &self.list)
            .field("host", &self.host)
            .field("in_flight", &self.in_flight.as_ref().map(|(edge, _)| *edge))
            .field("refreshing", &self.refresh.is_some())
            .field("header", &self.header)
            .field("footer", &self.footer)
            .finish_non_exhaustive()
    }
}

fn boxed_loader<F, Fut>(mut loader: F) -> Loader
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<(), LoadError>> + 'static,
{
    Box::new(move || loader().boxed_local())
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn outcome_of(source: LoadSource, result: Result<(), LoadError>) -> LoadOutcome {
    match result {
        Ok(()) => LoadOutcome::Done,
        Err(err) => {
            lwarn!(?source, error = %err, "loader failed");
            LoadOutcome::Failed
        }
    }
}

impl<T, H: HostList> ListView<T, H> {
    /// Mounts `list` on `host`: pushes the collection and scrolls to the initial row.
    pub fn new(list: BidirectionalList<T>, mut host: H) -> Self {
        let range = list.render_range();
        host.set_items(range.start, list.len());
        if let Some(initial) = list.initial_render_index() {
            if initial != range.start {
                host.scroll_to_index(initial, false);
            }
        }
        Self {
            list,
            host,
            loaders: EdgeMap::default(),
            refresh_loader: None,
            in_flight: None,
            refresh: None,
            render_item: None,
            warned_missing_render: Cell::new(false),
            header: SlotComponents::default(),
            footer: SlotComponents::default(),
        }
    }

    pub fn with_options(options: ListOptions, data: Arc<[T]>, host: H) -> Self {
        Self::new(BidirectionalList::with_data(options, data), host)
    }
}

impl<T, H: HostList, R> ListView<T, H, R> {
    /// Loader for items before the first one (older messages in a chat).
    pub fn with_start_loader<F, Fut>(mut self, loader: F) -> Self
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = Result<(), LoadError>> + 'static,
    {
        self.loaders.start = Some(boxed_loader(loader));
        self
    }

    /// Loader for items after the last one.
    pub fn with_end_loader<F, Fut>(mut self, loader: F) -> Self
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = Result<(), LoadError>> + 'static,
    {
        self.loaders.end = Some(boxed_loader(loader));
        self
    }

    pub fn with_refresh_loader<F, Fut>(mut self, loader: F) -> Self
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = Result<(), LoadError>> + 'static,
    {
        self.refresh_loader = Some(boxed_loader(loader));
        self
    }

    /// Sets the row renderer. Rows render to whatever `render` returns.
    pub fn with_render_item<R2>(
        self,
        render: impl Fn(RenderSlot<'_, T>) -> R2 + 'static,
    ) -> ListView<T, H, R2> {
        ListView {
            list: self.list,
            host: self.host,
            loaders: self.loaders,
            refresh_loader: self.refresh_loader,
            in_flight: self.in_flight,
            refresh: self.refresh,
            render_item: Some(Box::new(render)),
            warned_missing_render: Cell::new(false),
            header: self.header,
            footer: self.footer,
        }
    }

    /// Components the caller renders in the slot above the first row.
    pub fn with_header(mut self, parts: SlotComponents) -> Self {
        self.header = parts;
        self
    }

    /// Components the caller renders in the slot below the last row.
    pub fn with_footer(mut self, parts: SlotComponents) -> Self {
        self.footer = parts;
        self
    }

    pub fn list(&self) -> &BidirectionalList<T> {
        &self.list
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (BidirectionalList<T>, H) {
        (self.list, self.host)
    }

    pub fn options(&self) -> &ListOptions {
        self.list.options()
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions)) {
        let generation = self.list.reset_generation();
        self.list.update_options(f);
        self.sync_host(generation);
    }

    /// `true` while an edge loader or a refresh is running.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some() || self.refresh.is_some()
    }

    pub fn in_progress(&self, edge: Edge) -> bool {
        self.list.in_progress(edge)
    }

    pub fn on_scroll(&mut self) {
        let metrics = self.host.metrics();
        if let Some(edge) = self.list.on_scroll(metrics) {
            self.start_load(edge);
        }
    }

    pub fn on_layout(&mut self) {
        let metrics = self.host.metrics();
        if let Some(edge) = self.list.on_layout(metrics) {
            self.start_load(edge);
        }
    }

    /// Call after the host laid out a changed collection. Short lists reach both edges here.
    pub fn on_content_size(&mut self) {
        let metrics = self.host.metrics();
        if let Some(edge) = self.list.on_content_size(metrics) {
            self.start_load(edge);
        }
    }

    /// Lets `edge` fire again and re-checks the thresholds right away.
    pub fn retry(&mut self, edge: Edge) {
        self.list.retry(edge);
        self.on_scroll();
    }

    /// Accepts a new item collection (typically from inside a loader's completion path).
    pub fn set_data(&mut self, data: Arc<[T]>) {
        let generation = self.list.reset_generation();
        let command = self.list.set_data(data);
        self.apply(generation, command);
    }

    pub fn set_data_at(&mut self, data: Arc<[T]>, edge: Edge) {
        let generation = self.list.reset_generation();
        let command = self.list.set_data_at(data, edge);
        self.apply(generation, command);
    }

    pub fn reset_data(&mut self, data: Arc<[T]>) {
        let generation = self.list.reset_generation();
        self.list.reset_data(data);
        self.sync_host(generation);
    }

    fn apply(&mut self, generation: u64, command: Option<ScrollCommand>) {
        self.sync_host(generation);
        if let Some(command) = command {
            self.host
                .scroll_to_index(command.render_index, command.animated);
        }
    }

    /// Pushes the render range to the host.
    ///
    /// After a reset the rows were renumbered rather than shifted by a prepend, so the host is
    /// also sent back to the initial row.
    fn sync_host(&mut self, generation: u64) {
        let range = self.list.render_range();
        self.host.set_items(range.start, self.list.len());
        if self.list.reset_generation() == generation {
            return;
        }
        ldebug!(first_render_index = range.start, "load tracking reset, remounting");
        if let Some(initial) = self.list.initial_render_index() {
            self.host.scroll_to_index(initial, false);
        }
    }

    fn start_load(&mut self, mut edge: Edge) {
        loop {
            let Some(loader) = self.loaders[edge].as_mut() else {
                ltrace!(?edge, "no loader for edge, settling immediately");
                match self.list.settle(edge, LoadOutcome::Done) {
                    Some(next) => {
                        edge = next;
                        continue;
                    }
                    None => return,
                }
            };
            ldebug!(?edge, "invoking loader");
            self.in_flight = Some((edge, loader()));
            return;
        }
    }

    /// Advances the running loaders.
    ///
    /// Returns `Ready(Some(_))` each time a loader settles, `Ready(None)` once nothing is running
    /// and `Pending` otherwise. A settlement may release a queued loader, which starts before
    /// this returns.
    pub fn poll_settled(&mut self, cx: &mut Context<'_>) -> Poll<Option<Settlement>> {
        if let Some((edge, future)) = &mut self.in_flight {
            let edge = *edge;
            if let Poll::Ready(result) = future.as_mut().poll(cx) {
                self.in_flight = None;
                let source = LoadSource::Edge(edge);
                let outcome = outcome_of(source, result);
                if let Some(next) = self.list.settle(edge, outcome) {
                    self.start_load(next);
                }
                return Poll::Ready(Some(Settlement { source, outcome }));
            }
        }

        if let Some(future) = &mut self.refresh {
            if let Poll::Ready(result) = future.as_mut().poll(cx) {
                self.refresh = None;
                let outcome = outcome_of(LoadSource::Refresh, result);
                self.list.finish_refresh(outcome);
                return Poll::Ready(Some(Settlement {
                    source: LoadSource::Refresh,
                    outcome,
                }));
            }
        }

        if self.is_loading() {
            Poll::Pending
        } else {
            Poll::Ready(None)
        }
    }

    /// Waits for the next settlement. `None` when nothing is running.
    pub async fn next_settled(&mut self) -> Option<Settlement> {
        poll_fn(|cx| self.poll_settled(cx)).await
    }

    /// Drives loaders until none is running, including queued ones they release.
    pub async fn run_until_idle(&mut self) {
        while self.next_settled().await.is_some() {}
    }

    /// Renders the row at `render_index` with the `render_item` callback.
    ///
    /// Without a callback every row renders as nothing; this is logged once.
    pub fn render(&self, render_index: i64) -> Option<R> {
        let Some(render_item) = &self.render_item else {
            if !self.warned_missing_render.replace(true) {
                lwarn!("render_item is not set, rows render as empty");
            }
            return None;
        };
        self.list.render_with(render_index, |slot| render_item(slot))
    }

    pub fn header_slot(&self) -> Slot {
        self.list.header_slot(self.header)
    }

    pub fn footer_slot(&self) -> Slot {
        self.list.footer_slot(self.footer)
    }

    pub fn scroll_handle(&mut self) -> ScrollHandle<'_, T, H> {
        ScrollHandle::new(&self.list, &mut self.host)
    }

    pub fn pull_frame(&self) -> PullFrame {
        self.list.pull_frame()
    }

    pub fn is_refreshing(&self) -> bool {
        self.list.is_refreshing()
    }

    pub fn pull_grant(&mut self) {
        self.list.pull_grant();
    }

    pub fn pull_drag(&mut self, dy: f32) -> PullFrame {
        self.list.pull_drag(dy)
    }

    /// Ends a pull gesture, invoking the refresh loader when the pull went far enough.
    pub fn pull_release(&mut self, dy: f32) -> Release {
        let release = self.list.pull_release(dy);
        if release == Release::Refresh {
            self.start_refresh();
        }
        release
    }

    /// Starts a refresh without a gesture. Returns `false` if one is already running.
    pub fn refresh(&mut self) -> bool {
        if !self.list.begin_refresh() {
            return false;
        }
        self.start_refresh();
        true
    }

    /// Mirrors an externally controlled `refreshing` flag. Does not invoke the refresh loader.
    pub fn set_refreshing(&mut self, refreshing: bool) {
        if refreshing {
            self.list.begin_refresh();
        } else {
            self.list.finish_refresh(LoadOutcome::Done);
        }
    }

    fn start_refresh(&mut self) {
        let Some(loader) = self.refresh_loader.as_mut() else {
            ltrace!("no refresh loader, finishing immediately");
            self.list.finish_refresh(LoadOutcome::Done);
            return;
        };
        ldebug!("invoking refresh loader");
        self.refresh = Some(loader());
    }
}
