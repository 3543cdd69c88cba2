use alloc::sync::Arc;

use crate::Edge;

/// A callback fired when an edge's "load in progress" flag flips.
///
/// Adapters typically use it to show or hide loading indicators.
pub type OnProgressChangeCallback = Arc<dyn Fn(Edge, bool) + Send + Sync>;

pub const DEFAULT_REACHED_THRESHOLD: u32 = 10;
pub const DEFAULT_AUTOSCROLL_THRESHOLD: u32 = 100;

/// Rejected option values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("the {0:?} reached threshold must be positive")]
    ZeroThreshold(Edge),
    #[error("the autoscroll threshold must be positive when autoscroll is enabled")]
    ZeroAutoscrollThreshold,
}

/// Configuration for [`crate::BidirectionalList`].
///
/// Thresholds are distances in layout units from the *visual* top/bottom of the list. When
/// `inverted` is set, the visual top belongs to [`Edge::End`].
pub struct ListOptions {
    /// Distance from the visual top within which the top edge loader fires.
    pub start_threshold: u32,
    /// Distance from the visual bottom within which the bottom edge loader fires.
    pub end_threshold: u32,

    /// Draws the collection bottom-up: data index 0 is the bottom row.
    pub inverted: bool,

    /// Follow newly added rows when the viewer is already near the bottom.
    pub enable_autoscroll_to_newest: bool,
    /// How close to the bottom (layout units) the viewer must be for autoscroll to kick in.
    pub autoscroll_threshold: u32,

    /// Data index shown first when the host mounts.
    pub initial_scroll_index: usize,

    /// When `false`, header/footer slots show the caller's list components instead of
    /// loading indicators.
    pub show_default_loading_indicators: bool,

    pub on_progress_change: Option<OnProgressChangeCallback>,
}

impl Clone for ListOptions {
    fn clone(&self) -> Self {
        Self {
            start_threshold: self.start_threshold,
            end_threshold: self.end_threshold,
            inverted: self.inverted,
            enable_autoscroll_to_newest: self.enable_autoscroll_to_newest,
            autoscroll_threshold: self.autoscroll_threshold,
            initial_scroll_index: self.initial_scroll_index,
            show_default_loading_indicators: self.show_default_loading_indicators,
            on_progress_change: self.on_progress_change.clone(),
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self {
            start_threshold: DEFAULT_REACHED_THRESHOLD,
            end_threshold: DEFAULT_REACHED_THRESHOLD,
            inverted: false,
            enable_autoscroll_to_newest: false,
            autoscroll_threshold: DEFAULT_AUTOSCROLL_THRESHOLD,
            initial_scroll_index: 0,
            show_default_loading_indicators: true,
            on_progress_change: None,
        }
    }

    pub fn with_thresholds(mut self, start_threshold: u32, end_threshold: u32) -> Self {
        self.start_threshold = start_threshold;
        self.end_threshold = end_threshold;
        self
    }

    pub fn with_start_threshold(mut self, start_threshold: u32) -> Self {
        self.start_threshold = start_threshold;
        self
    }

    pub fn with_end_threshold(mut self, end_threshold: u32) -> Self {
        self.end_threshold = end_threshold;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Enables autoscroll to the newest row, within `threshold` layout units of the bottom.
    pub fn with_autoscroll_to_newest(mut self, enabled: bool, threshold: u32) -> Self {
        self.enable_autoscroll_to_newest = enabled;
        self.autoscroll_threshold = threshold;
        self
    }

    pub fn with_initial_scroll_index(mut self, index: usize) -> Self {
        self.initial_scroll_index = index;
        self
    }

    pub fn with_show_default_loading_indicators(mut self, show: bool) -> Self {
        self.show_default_loading_indicators = show;
        self
    }

    pub fn with_on_progress_change(
        mut self,
        on_progress_change: Option<impl Fn(Edge, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_progress_change = on_progress_change.map(|f| Arc::new(f) as _);
        self
    }

    /// The threshold that applies to `edge`, taking inversion into account.
    pub fn threshold_for(&self, edge: Edge) -> u32 {
        if edge == Edge::leading(self.inverted) {
            self.start_threshold
        } else {
            self.end_threshold
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.start_threshold == 0 {
            return Err(OptionsError::ZeroThreshold(Edge::leading(self.inverted)));
        }
        if self.end_threshold == 0 {
            return Err(OptionsError::ZeroThreshold(Edge::trailing(self.inverted)));
        }
        if self.enable_autoscroll_to_newest && self.autoscroll_threshold == 0 {
            return Err(OptionsError::ZeroAutoscrollThreshold);
        }
        Ok(())
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("start_threshold", &self.start_threshold)
            .field("end_threshold", &self.end_threshold)
            .field("inverted", &self.inverted)
            .field(
                "enable_autoscroll_to_newest",
                &self.enable_autoscroll_to_newest,
            )
            .field("autoscroll_threshold", &self.autoscroll_threshold)
            .field("initial_scroll_index", &self.initial_scroll_index)
            .field(
                "show_default_loading_indicators",
                &self.show_default_loading_indicators,
            )
            .finish_non_exhaustive()
    }
}
