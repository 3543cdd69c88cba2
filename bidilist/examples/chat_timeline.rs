use std::sync::Arc;

use bidilist::{BidirectionalList, Edge, ListOptions, LoadOutcome, ScrollMetrics};

fn main() {
    // A chat timeline: message ids 0..50, 20 units per row, 200 unit viewport.
    let mut messages: Arc<[i64]> = (0..50).collect::<Vec<_>>().into();
    let mut list = BidirectionalList::with_data(
        ListOptions::new()
            .with_thresholds(10, 10)
            .with_on_progress_change(Some(|edge: Edge, on: bool| {
                println!("  {edge:?} in progress: {on}");
            })),
        Arc::clone(&messages),
    );

    // The user scrolls to the top: the start loader must run.
    let started = list.on_scroll(ScrollMetrics::new(5, 200, 1000));
    println!("scroll to top: start loader {started:?}");

    // The loader fetched 10 older messages and the adapter hands over the new collection.
    messages = (-10..50).collect::<Vec<_>>().into();
    list.set_data(Arc::clone(&messages));
    list.settle(Edge::Start, LoadOutcome::Done);
    println!(
        "after prepend: len={} first_render_index={} row 0 shows {:?}",
        list.len(),
        list.anchor().first_render_index(),
        list.item_at(0)
    );

    // Same position, new length: eligible once more, then suppressed.
    println!(
        "scroll again: {:?}, and again: {:?}",
        list.on_scroll(ScrollMetrics::new(5, 200, 1200)),
        list.on_scroll(ScrollMetrics::new(5, 200, 1200))
    );
    println!("state: {:?}", list.state());
}
