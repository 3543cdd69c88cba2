use crate::{EdgeHits, ScrollMetrics};

/// Maps scroll metrics to "near the visual start/end" flags.
///
/// - `at_start` when `offset_from_start < start_threshold`
/// - `at_end` when the distance left below the viewport is `< end_threshold`
///
/// When the content does not fill the viewport, both flags are set: there is nothing to scroll,
/// so the first page on either side must be loadable without a gesture.
pub fn evaluate(metrics: ScrollMetrics, start_threshold: u32, end_threshold: u32) -> EdgeHits {
    if metrics.fits_viewport() {
        return EdgeHits {
            at_start: true,
            at_end: true,
        };
    }
    EdgeHits {
        at_start: metrics.offset_from_start < start_threshold as u64,
        at_end: metrics.offset_from_end() < end_threshold as i64,
    }
}
