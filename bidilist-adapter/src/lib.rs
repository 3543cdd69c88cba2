//! Adapter utilities for the `bidilist` crate.
//!
//! The `bidilist` crate is UI-agnostic and only decides *when* to load and *where* rows are.
//! This crate connects it to the outside world:
//!
//! - [`HostList`], the narrow interface to a platform list widget, with two backends:
//!   [`OffsetHost`] (owns the scroll offset, tween-animated) and [`CommandHost`] (queues commands
//!   for a native widget that scrolls itself)
//! - [`ListView`], which runs the caller's async loaders and feeds their settlement back
//! - [`ScrollHandle`] for imperative scrolling by data index
//!
//! No executor is bundled: poll [`ListView::poll_settled`] from your event loop, or await
//! [`ListView::next_settled`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod command_host;
mod error;
mod handle;
mod host;
mod offset_host;
mod tween;
mod view;


pub use command_host::{CommandHost, HostCommand};
pub use error::LoadError;
pub use handle::ScrollHandle;
pub use host::HostList;
pub use offset_host::OffsetHost;
pub use tween::{DEFAULT_SCROLL_DURATION_MS, Easing, ScrollTween};
pub use view::{ListView, LoadFuture, LoadSource, Settlement};
