//! A headless controller for lists that load more items at both ends.
//!
//! For host list backends and an async loader driver, see the `bidilist-adapter` crate.
//!
//! This crate focuses on the control logic behind chat/timeline style infinite scrolling:
//! deciding from scroll metrics when to call the caller's "load more" loaders, making sure the
//! start and end loaders never run at the same time, firing each loader at most once per
//! collection length, and keeping on-screen rows in place when items are prepended.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll metrics (offset, viewport length, content length) on scroll/layout/content changes
//! - the item collection, replaced wholesale on every change
//! - a way to scroll its list to a render index
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod dedup;
mod indicator;
mod list;
mod options;
mod refresh;
mod serializer;
mod state;
mod threshold;
mod types;

#[cfg(test)]
mod tests;

pub use anchor::{Anchor, MutationSide};
pub use dedup::DedupTracker;
pub use indicator::{Slot, SlotComponents, select_slot};
pub use list::{BidirectionalList, RenderSlot};
pub use options::{
    DEFAULT_AUTOSCROLL_THRESHOLD, DEFAULT_REACHED_THRESHOLD, ListOptions, OnProgressChangeCallback,
    OptionsError,
};
pub use refresh::{
    DAMPING_FACTOR, PullFrame, PullToRefresh, REFRESHING_OFFSET, RELEASE_THRESHOLD, Release,
};
pub use serializer::{LoadPhase, LoadSerializer, Request};
pub use state::{EdgeState, ListState};
pub use threshold::evaluate as evaluate_thresholds;
pub use types::{Edge, EdgeHits, EdgeMap, LoadOutcome, ScrollCommand, ScrollMetrics};
