// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loft_stacking --heading-base-level=0

//! Loft Stacking: deterministic z-index depths for labeled overlay roots.
//!
//! Overlays are frequently rendered through portals, so their position in the
//! element tree says nothing about which one should draw on top. A
//! [`StackingScope`] fixes the order up front: the owner lists labels once, and
//! the nth label gets depth `n + 1`.
//!
//! - Depths are strictly increasing in label order within a scope.
//! - Scopes are isolated. A nested scope does not see its parent's labels, and its
//!   root element isolates (see [`RootStyle`]), so depths never interact across
//!   scope boundaries.
//! - A lookup miss is an error ([`StackingError::UnregisteredLabel`]). There is no
//!   default depth.
//!
//! Scopes are plain values: the owner creates one and drops it on teardown, and
//! consumers borrow it. When a borrow cannot cross the boundary between owner
//! and consumer, [`StackingRegistry`] hands out generational [`ScopeHandle`]s
//! instead.
//!
//! ## Minimal usage
//!
//! ```
//! use loft_stacking::{StackingError, StackingScope};
//!
//! let scope = StackingScope::new(["menu", "tooltip"]).unwrap();
//! assert_eq!(scope.depth("menu"), Ok(1));
//! assert_eq!(scope.depth("tooltip"), Ok(2));
//! assert!(matches!(
//!     scope.depth("dialog"),
//!     Err(StackingError::UnregisteredLabel { .. })
//! ));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod registry;
mod scope;

pub use error::StackingError;
pub use registry::{ScopeHandle, StackingRegistry};
pub use scope::{RootStyle, StackingScope};
