use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use bidilist::ListOptions;
use bidilist_adapter::{ListView, LoadError, OffsetHost};
use futures::executor::block_on;

fn main() {
    // Older messages arrive through an inbox the loader fills; the event loop hands them to the
    // view once the loader settles.
    let inbox: Rc<RefCell<Option<Vec<i64>>>> = Rc::default();
    let oldest = Rc::new(RefCell::new(0i64));

    let loader_inbox = inbox.clone();
    let loader_oldest = oldest.clone();
    let mut view = ListView::with_options(
        ListOptions::new(),
        (0..30).collect::<Vec<i64>>().into(),
        OffsetHost::new(20, 200),
    )
    .with_start_loader(move || {
        let inbox = loader_inbox.clone();
        let oldest = loader_oldest.clone();
        async move {
            let first = *oldest.borrow() - 10;
            *oldest.borrow_mut() = first;
            *inbox.borrow_mut() = Some((first..first + 10).collect());
            Ok::<(), LoadError>(())
        }
    })
    .with_render_item(|slot| format!("#{} message {}", slot.index, slot.item));

    for step in 0..3 {
        // The user drags to the very top.
        view.host_mut().on_user_scroll(0);
        view.on_scroll();

        while let Some(settlement) = block_on(view.next_settled()) {
            println!("step {step}: {settlement:?}");
        }
        if let Some(older) = inbox.borrow_mut().take() {
            let mut next = older;
            next.extend(view.list().data().iter().copied());
            view.set_data(Arc::from(next));
        }

        let visible = view.host().visible_range();
        println!(
            "  len={} offset={} first visible: {:?}",
            view.list().len(),
            view.host().scroll_offset(),
            view.render(visible.start)
        );
    }
}
