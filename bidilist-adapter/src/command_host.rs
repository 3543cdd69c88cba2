use alloc::collections::VecDeque;

use bidilist::ScrollMetrics;

use crate::HostList;

/// A command for a platform list widget that owns its own scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostCommand {
    SetItems { first_render_index: i64, count: usize },
    ScrollToIndex { render_index: i64, animated: bool },
}

/// A host backend for native list widgets that keep scroll position themselves (for example a
/// widget that maintains the visible content position on insert).
///
/// Commands are queued for the platform layer to drain; metrics are whatever the platform last
/// reported.
#[derive(Clone, Debug, Default)]
pub struct CommandHost {
    metrics: ScrollMetrics,
    queue: VecDeque<HostCommand>,
}

impl CommandHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records metrics reported by the platform widget.
    pub fn report_metrics(&mut self, metrics: ScrollMetrics) {
        self.metrics = metrics;
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = HostCommand> + '_ {
        self.queue.drain(..)
    }
}

impl HostList for CommandHost {
    fn set_items(&mut self, first_render_index: i64, count: usize) {
        // Back-to-back collections collapse into the latest one.
        if let Some(HostCommand::SetItems { .. }) = self.queue.back() {
            self.queue.pop_back();
        }
        self.queue.push_back(HostCommand::SetItems {
            first_render_index,
            count,
        });
    }

    fn scroll_to_index(&mut self, render_index: i64, animated: bool) {
        self.queue.push_back(HostCommand::ScrollToIndex {
            render_index,
            animated,
        });
    }

    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }
}
