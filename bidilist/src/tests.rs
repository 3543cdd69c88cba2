use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

fn ids(range: core::ops::Range<i64>) -> Arc<[i64]> {
    range.collect::<Vec<_>>().into()
}

fn prepend(data: &Arc<[i64]>, n: i64) -> Arc<[i64]> {
    let first = data.first().copied().unwrap_or(0);
    (first - n..first)
        .chain(data.iter().copied())
        .collect::<Vec<_>>()
        .into()
}

fn append(data: &Arc<[i64]>, n: i64) -> Arc<[i64]> {
    let next = data.last().copied().map_or(0, |l| l + 1);
    data.iter()
        .copied()
        .chain(next..next + n)
        .collect::<Vec<_>>()
        .into()
}

// 50 rows of 20 units in a 200 unit viewport.
fn metrics_at(offset: u64) -> ScrollMetrics {
    ScrollMetrics::new(offset, 200, 1000)
}

fn bottom_of(content_len: u64) -> ScrollMetrics {
    ScrollMetrics::new(content_len - 200, 200, content_len)
}

#[test]
fn thresholds_flag_edges_within_distance() {
    let hits = evaluate_thresholds(metrics_at(5), 10, 10);
    assert!(hits.at_start);
    assert!(!hits.at_end);

    let hits = evaluate_thresholds(metrics_at(10), 10, 10);
    assert!(!hits.at_start);

    let hits = evaluate_thresholds(metrics_at(795), 10, 10);
    assert!(!hits.at_start);
    assert!(hits.at_end);

    let hits = evaluate_thresholds(metrics_at(790), 10, 10);
    assert!(!hits.at_end);
}

#[test]
fn thresholds_treat_short_content_as_both_edges() {
    let hits = evaluate_thresholds(ScrollMetrics::new(0, 200, 150), 10, 10);
    assert_eq!(
        hits,
        EdgeHits {
            at_start: true,
            at_end: true
        }
    );
    let hits = evaluate_thresholds(ScrollMetrics::new(0, 200, 0), 1, 1);
    assert!(hits.at_start && hits.at_end);
}

#[test]
fn thresholds_handle_overscroll_past_the_end() {
    let hits = evaluate_thresholds(ScrollMetrics::new(850, 200, 1000), 10, 10);
    assert!(hits.at_end);
}

#[test]
fn dedup_fires_once_per_length() {
    let mut d = DedupTracker::new();
    assert!(d.should_fire(Edge::Start, 50));
    d.mark_fired(Edge::Start, 50);
    assert!(!d.should_fire(Edge::Start, 50));
    assert!(d.should_fire(Edge::End, 50));
    assert!(d.should_fire(Edge::Start, 60));

    assert!(d.try_fire(Edge::Start, 60));
    assert!(!d.try_fire(Edge::Start, 60));
    assert_eq!(d.triggered_for_len(Edge::Start), Some(60));

    d.forget(Edge::Start);
    assert!(d.should_fire(Edge::Start, 60));

    d.mark_fired(Edge::End, 3);
    d.reset();
    assert_eq!(d.triggered_for_len(Edge::End), None);
}

#[test]
fn serializer_queues_the_opposite_edge() {
    let mut s = LoadSerializer::new();
    assert_eq!(s.request(Edge::Start), Request::Start(Edge::Start));
    assert_eq!(s.request(Edge::End), Request::Queued);
    assert_eq!(s.phase(Edge::End), LoadPhase::Queued);
    assert!(!s.in_progress(Edge::End));

    // Repeats are dropped, whether loading or queued.
    assert_eq!(s.request(Edge::Start), Request::Dropped);
    assert_eq!(s.request(Edge::End), Request::Dropped);

    assert_eq!(s.settle(Edge::Start, LoadOutcome::Failed), Some(Edge::End));
    assert!(s.in_progress(Edge::End));
    assert_eq!(s.loading(), Some(Edge::End));

    assert_eq!(s.settle(Edge::End, LoadOutcome::Done), None);
    assert!(s.is_idle());
}

#[test]
fn serializer_ignores_settlement_for_idle_edge() {
    let mut s = LoadSerializer::new();
    assert_eq!(s.settle(Edge::End, LoadOutcome::Done), None);
    assert!(s.is_idle());

    assert_eq!(s.request(Edge::End), Request::Start(Edge::End));
    assert_eq!(s.settle(Edge::Start, LoadOutcome::Done), None);
    assert!(s.in_progress(Edge::End));
}

#[test]
fn anchor_keeps_render_indexes_across_prepend() {
    let mut a = Anchor::new();
    assert_eq!(a.data_index(0, 50, false), Some(0));
    assert_eq!(a.data_index(49, 50, false), Some(49));
    assert_eq!(a.data_index(50, 50, false), None);
    assert_eq!(a.data_index(-1, 50, false), None);

    assert_eq!(a.apply(50, 60, MutationSide::Leading), -10);
    assert_eq!(a.first_render_index(), -10);
    assert_eq!(a.offset(), 10);

    // Every old render index maps to the data index shifted by the prepended count.
    for r in 0..50 {
        assert_eq!(a.data_index(r, 60, false), Some(r as usize + 10));
    }
    assert_eq!(a.data_index(-10, 60, false), Some(0));
    assert_eq!(a.render_index(0, 60, false), Some(-10));

    assert_eq!(a.apply(60, 80, MutationSide::Trailing), 0);
    assert_eq!(a.first_render_index(), -10);
}

#[test]
fn anchor_translates_inverted_lists() {
    let mut a = Anchor::new();
    assert_eq!(a.data_index(0, 5, true), Some(4));
    assert_eq!(a.data_index(4, 5, true), Some(0));
    assert_eq!(a.render_index(4, 5, true), Some(0));

    // Inverted: appending to the data end adds rows on top.
    a.apply(5, 8, MutationSide::Leading);
    assert_eq!(a.first_render_index(), -3);
    for r in 0..5 {
        assert_eq!(a.data_index(r, 8, true), a_old(r));
    }

    fn a_old(r: i64) -> Option<usize> {
        Anchor::new().data_index(r, 5, true)
    }
}

#[test]
fn options_validate_thresholds() {
    assert_eq!(ListOptions::new().validate(), Ok(()));
    assert_eq!(
        ListOptions::new().with_start_threshold(0).validate(),
        Err(OptionsError::ZeroThreshold(Edge::Start))
    );
    assert_eq!(
        ListOptions::new()
            .with_inverted(true)
            .with_start_threshold(0)
            .validate(),
        Err(OptionsError::ZeroThreshold(Edge::End))
    );
    assert_eq!(
        ListOptions::new()
            .with_autoscroll_to_newest(true, 0)
            .validate(),
        Err(OptionsError::ZeroAutoscrollThreshold)
    );
    assert_eq!(
        ListOptions::new().with_autoscroll_to_newest(false, 0).validate(),
        Ok(())
    );
}

#[test]
fn start_loader_fires_once_per_length_and_again_after_prepend() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));

    assert_eq!(list.on_scroll(metrics_at(5)), Some(Edge::Start));
    assert!(list.in_progress(Edge::Start));
    assert_eq!(list.on_scroll(metrics_at(3)), None);
    assert_eq!(list.on_scroll(metrics_at(5)), None);

    let next = prepend(list.data(), 10);
    assert_eq!(list.set_data(next), None);
    assert_eq!(list.settle(Edge::Start, LoadOutcome::Done), None);
    assert_eq!(list.len(), 60);
    assert_eq!(list.anchor().first_render_index(), -10);
    assert_eq!(list.item_at(0), Some(&0));
    assert_eq!(list.item_at(-10), Some(&-10));

    // New length: eligible exactly once more.
    assert_eq!(list.on_scroll(metrics_at(5)), Some(Edge::Start));
    assert_eq!(list.settle(Edge::Start, LoadOutcome::Done), None);
    assert_eq!(list.on_scroll(metrics_at(5)), None);
    assert_eq!(list.on_scroll(metrics_at(2)), None);
    assert_eq!(list.triggered_for_len(Edge::Start), Some(60));
}

#[test]
fn data_can_arrive_after_settlement() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    assert_eq!(list.on_scroll(metrics_at(0)), Some(Edge::Start));
    list.settle(Edge::Start, LoadOutcome::Done);

    let next = prepend(list.data(), 5);
    list.set_data(next);
    assert_eq!(list.anchor().first_render_index(), -5);
}

#[test]
fn settled_load_without_data_does_not_claim_later_growth() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    assert_eq!(list.on_scroll(metrics_at(0)), Some(Edge::Start));
    // Nothing older to load.
    list.settle(Edge::Start, LoadOutcome::Done);
    list.on_scroll(metrics_at(400));

    let next = append(list.data(), 1);
    list.set_data(next);
    assert_eq!(list.anchor().first_render_index(), 0);
}

#[test]
fn short_content_triggers_both_edges_without_scrolling() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..3));

    let started = list.on_content_size(ScrollMetrics::new(0, 200, 60));
    assert_eq!(started, Some(Edge::Start));
    assert_eq!(list.phase(Edge::End), LoadPhase::Queued);

    assert_eq!(
        list.settle(Edge::Start, LoadOutcome::Done),
        Some(Edge::End)
    );
    assert!(list.in_progress(Edge::End));
    assert!(!list.in_progress(Edge::Start));
}

#[test]
fn start_and_end_never_overlap_and_each_run_once() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));

    assert_eq!(list.on_scroll(bottom_of(1000)), Some(Edge::End));
    assert_eq!(list.on_scroll(metrics_at(0)), None);
    assert_eq!(list.phase(Edge::Start), LoadPhase::Queued);
    // Still queued: repeated events do not queue twice.
    assert_eq!(list.on_scroll(metrics_at(0)), None);

    let next = append(list.data(), 10);
    list.set_data(next);
    assert_eq!(list.anchor().first_render_index(), 0);

    assert_eq!(list.settle(Edge::End, LoadOutcome::Done), Some(Edge::Start));
    assert!(list.in_progress(Edge::Start));
    assert!(!list.in_progress(Edge::End));

    let next = prepend(list.data(), 10);
    list.set_data(next);
    assert_eq!(list.settle(Edge::Start, LoadOutcome::Done), None);
    assert_eq!(list.anchor().first_render_index(), -10);
    assert_eq!(list.len(), 70);
    assert_eq!(list.triggered_for_len(Edge::End), Some(50));
    assert_eq!(list.triggered_for_len(Edge::Start), Some(50));
}

#[test]
fn failure_clears_progress_and_allows_later_attempts() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    assert_eq!(list.on_scroll(bottom_of(1000)), Some(Edge::End));
    assert_eq!(list.settle(Edge::End, LoadOutcome::Failed), None);
    assert!(!list.in_progress(Edge::End));

    // Same length: suppressed until the caller decides to retry.
    assert_eq!(list.on_scroll(bottom_of(1000)), None);
    list.retry(Edge::End);
    assert_eq!(list.on_scroll(bottom_of(1000)), Some(Edge::End));
    list.settle(Edge::End, LoadOutcome::Failed);

    // A length change also re-enables it.
    let next = append(list.data(), 1);
    list.set_data(next);
    assert_eq!(list.on_scroll(bottom_of(1020)), Some(Edge::End));
}

#[test]
fn settle_for_idle_edge_is_a_no_op() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    assert_eq!(list.settle(Edge::Start, LoadOutcome::Done), None);
    assert_eq!(list.state().edges.start.phase, LoadPhase::Idle);
}

#[test]
fn appending_never_moves_the_anchor() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    for _ in 0..3 {
        let next = append(list.data(), 7);
        list.set_data(next);
    }
    assert_eq!(list.anchor().first_render_index(), 0);
    assert_eq!(list.len(), 71);
    assert_eq!(list.data_index(70), Some(70));
}

#[test]
fn same_collection_identity_is_ignored() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    assert_eq!(list.on_scroll(metrics_at(0)), Some(Edge::Start));
    let same = Arc::clone(list.data());
    assert_eq!(list.set_data(same), None);

    // The pending start load still owns the next length change.
    let next = prepend(list.data(), 4);
    list.set_data(next);
    assert_eq!(list.anchor().first_render_index(), -4);
}

#[test]
fn clearing_the_collection_resets_tracking() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    list.on_scroll(metrics_at(0));
    let next = prepend(list.data(), 10);
    list.set_data(next);
    list.settle(Edge::Start, LoadOutcome::Done);
    assert_eq!(list.anchor().first_render_index(), -10);

    list.set_data(ids(0..0));
    assert_eq!(list.anchor().first_render_index(), 0);
    assert_eq!(list.triggered_for_len(Edge::Start), None);

    list.set_data(ids(100..120));
    assert_eq!(list.anchor().first_render_index(), 0);
    assert_eq!(list.item_at(0), Some(&100));
}

#[test]
fn shrinking_without_a_load_is_a_full_reset() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    list.on_scroll(metrics_at(0));
    let next = prepend(list.data(), 10);
    list.set_data(next);
    list.settle(Edge::Start, LoadOutcome::Done);
    list.on_scroll(metrics_at(400));

    list.set_data(ids(0..20));
    assert_eq!(list.anchor().first_render_index(), 0);
    assert_eq!(list.triggered_for_len(Edge::Start), None);
}

#[test]
fn reset_data_keeps_running_loads() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    assert_eq!(list.on_scroll(metrics_at(0)), Some(Edge::Start));
    list.reset_data(ids(500..510));
    assert!(list.in_progress(Edge::Start));
    assert_eq!(list.triggered_for_len(Edge::Start), None);
    assert_eq!(list.settle(Edge::Start, LoadOutcome::Done), None);
}

#[test]
fn set_data_at_attributes_external_changes() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    let next = prepend(list.data(), 2);
    list.set_data_at(next, Edge::Start);
    assert_eq!(list.anchor().first_render_index(), -2);

    let next = append(list.data(), 2);
    list.set_data_at(next, Edge::End);
    assert_eq!(list.anchor().first_render_index(), -2);
}

#[test]
fn inverted_list_maps_visual_top_to_end_edge() {
    let opts = ListOptions::new().with_inverted(true);
    let mut list = BidirectionalList::with_data(opts, ids(0..50));

    // Visual top of an inverted list is the end of the data.
    assert_eq!(list.on_scroll(metrics_at(0)), Some(Edge::End));
    let next = append(list.data(), 10);
    list.set_data(next);
    list.settle(Edge::End, LoadOutcome::Done);
    assert_eq!(list.anchor().first_render_index(), -10);

    // Render index 0 still shows the same row (data index 49 before, 49 after).
    assert_eq!(list.item_at(0), Some(&49));
    assert_eq!(list.item_at(-10), Some(&59));

    // Visual bottom is the data start.
    assert_eq!(list.on_scroll(bottom_of(1200)), Some(Edge::Start));
    let next = prepend(list.data(), 5);
    list.set_data(next);
    list.settle(Edge::Start, LoadOutcome::Done);
    assert_eq!(list.anchor().first_render_index(), -10);
    assert_eq!(list.item_at(0), Some(&49));
}

#[test]
fn scroll_facade_translates_through_anchor() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    list.on_scroll(metrics_at(0));
    let next = prepend(list.data(), 10);
    list.set_data(next);
    list.settle(Edge::Start, LoadOutcome::Done);

    assert_eq!(
        list.scroll_to_index(0, true),
        Some(ScrollCommand {
            render_index: -10,
            animated: true
        })
    );
    assert_eq!(
        list.scroll_to_end(false),
        Some(ScrollCommand {
            render_index: 49,
            animated: false
        })
    );
    assert_eq!(list.scroll_to_item(&0, false).map(|c| c.render_index), Some(0));
    assert_eq!(list.scroll_to_item(&1234, true), None);
    assert_eq!(list.scroll_to_index(60, true), None);
}

#[test]
fn scroll_facade_on_inverted_and_empty_lists() {
    let list = BidirectionalList::with_data(ListOptions::new().with_inverted(true), ids(0..5));
    assert_eq!(list.scroll_to_end(true).map(|c| c.render_index), Some(0));
    assert_eq!(list.scroll_to_index(0, true).map(|c| c.render_index), Some(4));

    let empty = BidirectionalList::<i64>::new(ListOptions::new());
    assert_eq!(empty.scroll_to_end(true), None);
    assert_eq!(empty.initial_render_index(), None);
}

#[test]
fn initial_render_index_follows_inversion() {
    let opts = ListOptions::new().with_initial_scroll_index(2);
    let list = BidirectionalList::with_data(opts, ids(0..10));
    assert_eq!(list.initial_render_index(), Some(2));

    let opts = ListOptions::new()
        .with_initial_scroll_index(2)
        .with_inverted(true);
    let list = BidirectionalList::with_data(opts, ids(0..10));
    assert_eq!(list.initial_render_index(), Some(7));

    let opts = ListOptions::new().with_initial_scroll_index(99);
    let list = BidirectionalList::with_data(opts, ids(0..10));
    assert_eq!(list.initial_render_index(), Some(9));
}

#[test]
fn autoscroll_follows_growth_near_the_bottom() {
    let opts = ListOptions::new().with_autoscroll_to_newest(true, 50);
    let mut list = BidirectionalList::with_data(opts, ids(0..50));
    list.on_scroll(ScrollMetrics::new(780, 200, 1000));

    let next = append(list.data(), 1);
    assert_eq!(
        list.set_data(next),
        Some(ScrollCommand {
            render_index: 50,
            animated: true
        })
    );

    // Far from the bottom: no autoscroll.
    list.on_scroll(metrics_at(300));
    let next = append(list.data(), 1);
    assert_eq!(list.set_data(next), None);
}

#[test]
fn autoscroll_is_off_by_default_and_skips_prepends() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    list.on_scroll(bottom_of(1000));
    list.settle(Edge::End, LoadOutcome::Done);
    let next = append(list.data(), 1);
    assert_eq!(list.set_data(next), None);

    let opts = ListOptions::new().with_autoscroll_to_newest(true, 5000);
    let mut list = BidirectionalList::with_data(opts, ids(0..50));
    assert_eq!(list.on_scroll(metrics_at(0)), Some(Edge::Start));
    let next = prepend(list.data(), 10);
    assert_eq!(list.set_data(next), None);
}

#[test]
fn progress_callback_sees_every_transition() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let opts = ListOptions::new().with_on_progress_change(Some({
        let log = Arc::clone(&log);
        move |edge: Edge, on: bool| log.lock().unwrap().push((edge, on))
    }));
    let mut list = BidirectionalList::with_data(opts, ids(0..3));

    list.on_content_size(ScrollMetrics::new(0, 200, 60));
    list.settle(Edge::Start, LoadOutcome::Failed);
    list.settle(Edge::End, LoadOutcome::Done);

    assert_eq!(
        *log.lock().unwrap(),
        [
            (Edge::Start, true),
            (Edge::Start, false),
            (Edge::End, true),
            (Edge::End, false),
        ]
    );
}

#[test]
fn indicator_slots_follow_progress() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    let none = SlotComponents::default();
    let custom = SlotComponents::new(true, false);

    assert_eq!(list.header_slot(none), Slot::Empty);
    list.on_scroll(metrics_at(0));
    assert_eq!(list.header_slot(none), Slot::DefaultIndicator);
    assert_eq!(list.header_slot(custom), Slot::CustomIndicator);
    assert_eq!(list.footer_slot(custom), Slot::Empty);

    list.update_options(|o| o.show_default_loading_indicators = false);
    assert_eq!(list.header_slot(none), Slot::Empty);
    assert_eq!(
        list.header_slot(SlotComponents::new(true, true)),
        Slot::ListComponent
    );
}

#[test]
fn pull_to_refresh_requires_the_top_and_a_long_pull() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    list.on_scroll(metrics_at(400));
    list.pull_grant();
    assert_eq!(list.pull_drag(300.0), PullFrame::default());
    assert_eq!(list.pull_release(300.0), Release::Cancel);

    let mut list = BidirectionalList::with_data(ListOptions::new().with_thresholds(1, 1), ids(0..50));
    list.on_scroll(metrics_at(0));
    // The start edge fired at offset 0 with a threshold of 1.
    list.settle(Edge::Start, LoadOutcome::Done);
    list.on_scroll(metrics_at(0));

    list.pull_grant();
    let frame = list.pull_drag(250.0);
    assert_eq!(frame.translate, 50.0);
    assert!(!frame.indicator_visible);
    let frame = list.pull_drag(600.0);
    assert!(frame.indicator_visible);

    assert_eq!(list.pull_release(600.0), Release::Refresh);
    assert!(list.is_refreshing());
    assert_eq!(list.pull_frame().translate, REFRESHING_OFFSET);
    assert!(!list.begin_refresh());

    let next = prepend(list.data(), 3);
    list.set_data(next);
    list.finish_refresh(LoadOutcome::Done);
    assert!(!list.is_refreshing());
    assert_eq!(list.anchor().first_render_index(), -3);
    assert_eq!(list.pull_frame(), PullFrame::default());
}

#[test]
fn pull_is_blocked_while_the_top_edge_loads() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    assert_eq!(list.on_scroll(metrics_at(0)), Some(Edge::Start));
    list.pull_grant();
    assert_eq!(list.pull_drag(800.0), PullFrame::default());
}

#[test]
fn upward_drag_before_activation_does_nothing() {
    let mut p = PullToRefresh::new();
    p.grant(0, false);
    assert_eq!(p.drag(-40.0, 0, false), PullFrame::default());
    assert!(!p.is_pulling());

    p.drag(50.0, 0, false);
    assert!(p.is_pulling());
    assert_eq!(p.release(50.0, 0), Release::Cancel);
    assert_eq!(p.frame(), PullFrame::default());
}

#[test]
fn render_with_hands_out_both_indexes() {
    let list = BidirectionalList::with_data(ListOptions::new().with_inverted(true), ids(0..5));
    let out = list.render_with(1, |slot| (slot.index, slot.data_index, *slot.item));
    assert_eq!(out, Some((1, 3, 3)));
    assert_eq!(list.render_with(5, |slot| *slot.item), None);
    assert_eq!(list.render_range(), 0..5);
}

#[test]
fn state_snapshot_reports_tracking() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    list.on_scroll(metrics_at(0));
    list.on_scroll(bottom_of(1000));

    let state = list.state();
    assert_eq!(state.len, 50);
    assert_eq!(state.first_render_index, 0);
    assert!(state.edges.start.in_progress());
    assert_eq!(state.edges.end.phase, LoadPhase::Queued);
    assert_eq!(state.edges.end.triggered_for_len, Some(50));
    assert!(!state.refreshing);
}

#[test]
fn flipping_inversion_resets_tracking() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..50));
    assert_eq!(list.on_scroll(metrics_at(0)), Some(Edge::Start));
    let next = prepend(list.data(), 2);
    list.set_data(next);
    assert_eq!(list.anchor().first_render_index(), -2);
    let generation = list.reset_generation();

    list.update_options(|o| o.inverted = true);
    assert_eq!(list.anchor().first_render_index(), 0);
    assert_eq!(list.triggered_for_len(Edge::Start), None);
    assert_eq!(list.reset_generation(), generation + 1);

    list.update_options(|o| o.start_threshold = 30);
    assert_eq!(list.options().start_threshold, 30);
    assert_eq!(list.reset_generation(), generation + 1);
}

#[test]
fn prepend_after_the_queued_edge_is_released_moves_the_anchor() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..3));
    assert_eq!(
        list.on_content_size(ScrollMetrics::new(0, 200, 60)),
        Some(Edge::Start)
    );
    assert_eq!(
        list.settle(Edge::Start, LoadOutcome::Done),
        Some(Edge::End)
    );

    let next = prepend(list.data(), 10);
    list.set_data(next);
    assert_eq!(list.anchor().first_render_index(), -10);

    // The running end load owns the next change.
    let next = append(list.data(), 5);
    list.set_data(next);
    assert_eq!(list.anchor().first_render_index(), -10);
    assert_eq!(list.settle(Edge::End, LoadOutcome::Done), None);
    assert_eq!(list.len(), 18);
}

#[test]
fn data_goes_to_the_earliest_settled_load() {
    let mut list = BidirectionalList::with_data(ListOptions::new(), ids(0..3));
    list.on_content_size(ScrollMetrics::new(0, 200, 60));
    assert_eq!(
        list.settle(Edge::Start, LoadOutcome::Done),
        Some(Edge::End)
    );
    // Nothing newer to load.
    assert_eq!(list.settle(Edge::End, LoadOutcome::Done), None);

    let next = prepend(list.data(), 4);
    list.set_data(next);
    assert_eq!(list.anchor().first_render_index(), -4);
}

#[test]
fn inverted_short_list_anchors_data_from_the_released_order() {
    let options = ListOptions::new().with_inverted(true);
    let mut list = BidirectionalList::with_data(options, ids(0..3));
    assert_eq!(
        list.on_content_size(ScrollMetrics::new(0, 200, 60)),
        Some(Edge::End)
    );
    assert_eq!(list.phase(Edge::Start), LoadPhase::Queued);
    assert_eq!(list.settle(Edge::End, LoadOutcome::Done), Some(Edge::Start));

    // Older messages are appended to the data and drawn on top.
    let next = append(list.data(), 4);
    list.set_data(next);
    assert_eq!(list.anchor().first_render_index(), -4);
    assert_eq!(list.item_at(-4), Some(&6));
}

#[test]
fn visual_thresholds_follow_inversion() {
    let options = ListOptions::new().with_thresholds(30, 5).with_inverted(true);
    assert_eq!(options.threshold_for(Edge::End), 30);
    assert_eq!(options.threshold_for(Edge::Start), 5);

    let mut list = BidirectionalList::with_data(options, ids(0..50));
    assert_eq!(list.on_scroll(metrics_at(20)), Some(Edge::End));
    assert_eq!(list.on_scroll(ScrollMetrics::new(794, 200, 1000)), None);
    assert_eq!(list.phase(Edge::Start), LoadPhase::Idle);
    assert_eq!(list.on_scroll(ScrollMetrics::new(796, 200, 1000)), None);
    assert_eq!(list.phase(Edge::Start), LoadPhase::Queued);
}
