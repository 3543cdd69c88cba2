use bidilist::ScrollMetrics;

/// The narrow interface the adapter needs from a platform list widget.
///
/// Rows are addressed by render index: a collection of `count` rows occupies
/// `first_render_index..first_render_index + count`. Hosts that keep scroll state themselves are
/// expected to keep existing rows on screen when `first_render_index` moves down.
pub trait HostList {
    /// Accepts a replaced collection.
    fn set_items(&mut self, first_render_index: i64, count: usize);

    /// Scrolls so that `render_index` is at the top of the viewport.
    fn scroll_to_index(&mut self, render_index: i64, animated: bool);

    /// Current scroll geometry.
    fn metrics(&self) -> ScrollMetrics;
}

impl<H: HostList + ?Sized> HostList for &mut H {
    fn set_items(&mut self, first_render_index: i64, count: usize) {
        (**self).set_items(first_render_index, count);
    }

    fn scroll_to_index(&mut self, render_index: i64, animated: bool) {
        (**self).scroll_to_index(render_index, animated);
    }

    fn metrics(&self) -> ScrollMetrics {
        (**self).metrics()
    }
}
