//! Reflective member-path access, display metadata and batched change
//! notification for data-binding layers.
//!
//! This crate is a facade over the workspace members:
//!
//! - [`utils`]: hash containers, `TypeIdMap` and small numeric/text helpers.
//! - [`reflect`]: type metadata, member catalog, path accessor and display names.
//! - [`observe`]: `NotifyingCollection` and `PropertyNotifier`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use binder_observe as observe;
pub use binder_reflect as reflect;
pub use binder_utils as utils;
