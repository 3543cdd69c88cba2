use bidilist::{BidirectionalList, ScrollCommand};

use crate::HostList;

/// Imperative scrolling for a mounted list, borrowed from [`crate::ListView::scroll_handle`].
///
/// Indexes are data indexes; the handle translates them to the host's render space. Every method
/// returns `false` without touching the host when there is nothing to scroll to.
pub struct ScrollHandle<'a, T, H> {
    list: &'a BidirectionalList<T>,
    host: &'a mut H,
}

impl<'a, T, H: HostList> ScrollHandle<'a, T, H> {
    pub(crate) fn new(list: &'a BidirectionalList<T>, host: &'a mut H) -> Self {
        Self { list, host }
    }

    pub fn scroll_to_end(&mut self, animated: bool) -> bool {
        let command = self.list.scroll_to_end(animated);
        self.dispatch(command)
    }

    pub fn scroll_to_index(&mut self, index: usize, animated: bool) -> bool {
        let command = self.list.scroll_to_index(index, animated);
        self.dispatch(command)
    }

    pub fn scroll_to_item(&mut self, item: &T, animated: bool) -> bool
    where
        T: PartialEq,
    {
        let command = self.list.scroll_to_item(item, animated);
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: Option<ScrollCommand>) -> bool {
        let Some(command) = command else {
            ltrace!("scroll request has no target");
            return false;
        };
        self.host
            .scroll_to_index(command.render_index, command.animated);
        true
    }
}
