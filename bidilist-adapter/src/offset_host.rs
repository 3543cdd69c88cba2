use core::ops::Range;

use bidilist::ScrollMetrics;

use crate::{DEFAULT_SCROLL_DURATION_MS, Easing, HostList, ScrollTween};

/// A host backend that owns the scroll offset, for scroll containers driven by the adapter
/// (DOM-style virtual scrollers, TUIs).
///
/// Rows have a fixed extent. Every move of `first_render_index` in `set_items` is treated as rows
/// added or removed above the viewport: the offset moves by the same amount, so the rows on
/// screen stay put. [`crate::ListView`] follows a renumbering reset with a `scroll_to_index`.
/// Animated scrolls are tween-driven: call [`OffsetHost::tick`] every frame and apply the
/// returned offset to the real scroll container.
#[derive(Clone, Debug)]
pub struct OffsetHost {
    row_extent: u32,
    viewport_len: u32,
    scroll_offset: u64,
    first_render_index: i64,
    count: usize,
    now_ms: u64,
    tween: Option<ScrollTween>,
    easing: Easing,
    scroll_duration_ms: u64,
}

impl OffsetHost {
    pub fn new(row_extent: u32, viewport_len: u32) -> Self {
        Self {
            row_extent: row_extent.max(1),
            viewport_len,
            scroll_offset: 0,
            first_render_index: 0,
            count: 0,
            now_ms: 0,
            tween: None,
            easing: Easing::default(),
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
        }
    }

    pub fn with_animation(mut self, easing: Easing, duration_ms: u64) -> Self {
        self.easing = easing;
        self.scroll_duration_ms = duration_ms;
        self
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn row_extent(&self) -> u32 {
        self.row_extent
    }

    pub fn content_len(&self) -> u64 {
        self.count as u64 * self.row_extent as u64
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.content_len().saturating_sub(self.viewport_len as u64)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn set_viewport_len(&mut self, viewport_len: u32) {
        self.viewport_len = viewport_len;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// Applies a user scroll (wheel/drag). Cancels any running animation.
    pub fn on_user_scroll(&mut self, offset: u64) {
        self.tween = None;
        self.scroll_offset = offset.min(self.max_scroll_offset());
    }

    /// Advances the clock. Returns the new offset while an animation is running.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.now_ms = now_ms;
        let tween = self.tween?;
        self.scroll_offset = tween.offset_at(now_ms).min(self.max_scroll_offset());
        if tween.finished(now_ms) {
            self.tween = None;
        }
        Some(self.scroll_offset)
    }

    /// Render indexes at least partially inside the viewport.
    pub fn visible_range(&self) -> Range<i64> {
        if self.count == 0 || self.viewport_len == 0 {
            return self.first_render_index..self.first_render_index;
        }
        let extent = self.row_extent as u64;
        let start = self.scroll_offset / extent;
        let end = (self.scroll_offset + self.viewport_len as u64).div_ceil(extent);
        let end = end.min(self.count as u64);
        self.first_render_index + start as i64..self.first_render_index + end as i64
    }
}

impl HostList for OffsetHost {
    fn set_items(&mut self, first_render_index: i64, count: usize) {
        let rows_above = self.first_render_index - first_render_index;
        let shift = rows_above * self.row_extent as i64;
        self.first_render_index = first_render_index;
        self.count = count;

        if let Some(tween) = &mut self.tween {
            tween.shift(shift);
        }
        self.scroll_offset = self
            .scroll_offset
            .saturating_add_signed(shift)
            .min(self.max_scroll_offset());
    }

    fn scroll_to_index(&mut self, render_index: i64, animated: bool) {
        if self.count == 0 {
            return;
        }
        let visual = (render_index - self.first_render_index).clamp(0, self.count as i64 - 1);
        let target = (visual as u64 * self.row_extent as u64).min(self.max_scroll_offset());
        if !animated {
            self.tween = None;
            self.scroll_offset = target;
            return;
        }
        self.tween = Some(ScrollTween::new(
            self.scroll_offset,
            target,
            self.now_ms,
            self.scroll_duration_ms,
            self.easing,
        ));
    }

    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_offset, self.viewport_len, self.content_len())
    }
}
