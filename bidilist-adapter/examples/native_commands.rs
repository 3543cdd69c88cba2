use std::sync::Arc;

use bidilist::{ListOptions, ScrollMetrics};
use bidilist_adapter::{CommandHost, ListView};

fn main() {
    // A native widget keeps its own scroll position; the view only sends it commands.
    let options = ListOptions::new()
        .with_inverted(true)
        .with_autoscroll_to_newest(true, 100);
    let mut view = ListView::with_options(
        options,
        (0..20).rev().collect::<Vec<u32>>().into(),
        CommandHost::new(),
    );
    for command in view.host_mut().drain() {
        println!("mount: {command:?}");
    }

    // The widget reports it sits near the bottom; a new message is appended to the newest end.
    view.host_mut()
        .report_metrics(ScrollMetrics::new(190, 200, 400));
    view.on_scroll();
    let mut next: Vec<u32> = vec![20];
    next.extend(view.list().data().iter().copied());
    view.set_data_at(Arc::from(next), bidilist::Edge::Start);
    for command in view.host_mut().drain() {
        println!("new message: {command:?}");
    }

    let mut handle = view.scroll_handle();
    handle.scroll_to_item(&5, true);
    for command in view.host_mut().drain() {
        println!("jump: {command:?}");
    }
}
