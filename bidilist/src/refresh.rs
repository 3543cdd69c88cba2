/// Drag distance is divided by this before it moves the list.
pub const DAMPING_FACTOR: f32 = 5.0;
/// Pull distance past which releasing starts a refresh.
pub const RELEASE_THRESHOLD: f32 = 100.0;
/// Where the list rests while a refresh is running.
pub const REFRESHING_OFFSET: f32 = 30.0;

/// Visual state the platform layer should apply after a pull update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PullFrame {
    /// Downward translation of the list content.
    pub translate: f32,
    pub indicator_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Start the caller's refresh loader.
    Refresh,
    /// Spring back to rest.
    Cancel,
}

/// Pull-to-refresh state machine, fed with drag deltas by the platform gesture layer.
///
/// Pulling only engages when the list is scrolled to the very top and no top-edge load is
/// running. The list follows the finger at `1 / DAMPING_FACTOR` speed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PullToRefresh {
    base: f32,
    frame: PullFrame,
    active: bool,
    refreshing: bool,
}

impl PullToRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> PullFrame {
        self.frame
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_pulling(&self) -> bool {
        self.active
    }

    /// A drag gesture started. `blocked` is set while the top edge is loading.
    pub fn grant(&mut self, offset_from_start: u64, blocked: bool) {
        if blocked || self.refreshing {
            return;
        }
        if offset_from_start == 0 {
            self.base = self.frame.translate;
        } else {
            self.active = false;
        }
    }

    /// The finger moved by `dy` since the gesture started (positive is downward).
    pub fn drag(&mut self, dy: f32, offset_from_start: u64, blocked: bool) -> PullFrame {
        if offset_from_start > 0 || blocked || self.refreshing || (!self.active && dy < 0.0) {
            self.active = false;
            return self.frame;
        }
        let translate = self.base + dy / DAMPING_FACTOR;
        if translate < 0.0 {
            self.active = false;
            return self.frame;
        }

        self.active = true;
        self.frame = PullFrame {
            translate,
            indicator_visible: translate.abs() >= RELEASE_THRESHOLD,
        };
        self.frame
    }

    /// The finger lifted after moving `dy` in total.
    pub fn release(&mut self, dy: f32, offset_from_start: u64) -> Release {
        self.active = false;
        if !self.refreshing && self.base + dy > RELEASE_THRESHOLD && offset_from_start == 0 {
            self.begin_refresh();
            return Release::Refresh;
        }
        if !self.refreshing {
            self.frame = PullFrame::default();
        }
        Release::Cancel
    }

    /// Enters the refreshing state. Returns `false` if a refresh was already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        ldebug!("PullToRefresh::begin_refresh");
        self.refreshing = true;
        self.active = false;
        self.frame = PullFrame {
            translate: REFRESHING_OFFSET,
            indicator_visible: true,
        };
        true
    }

    pub fn finish_refresh(&mut self) {
        self.refreshing = false;
        self.base = 0.0;
        self.frame = PullFrame::default();
    }
}
