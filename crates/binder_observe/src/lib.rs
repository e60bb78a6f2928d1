//! Change notification for values bound to a view.
//!
//! - [`NotifyingCollection`]: a list that reports every change, with batch
//!   operations that report a single reset.
//! - [`PropertyNotifier`]: property-changed callbacks for a plain struct.
//!
//! Observers are boxed `FnMut` closures identified by a [`SubscriptionId`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod observers;

pub mod collection;
pub mod property;

// -----------------------------------------------------------------------------
// Top-level exports

pub use collection::{CollectionEvent, NotifyingCollection};
pub use observers::SubscriptionId;
pub use property::{PropertyChanged, PropertyNotifier};
