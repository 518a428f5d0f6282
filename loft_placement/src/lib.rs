// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loft_placement --heading-base-level=0

//! Loft Placement: anchored placement for floating panels.
//!
//! Given an anchor rectangle, a preferred direction, a panel size and an optional
//! scroll boundary, [`resolve`] computes:
//!
//! - the [`Side`] the panel goes on (flipping away from the preferred side when it
//!   lacks room),
//! - the cross-axis [`Alignment`] after shifting the panel to stay in bounds,
//! - the panel origin,
//! - a [`Caret`] offset that keeps the caret pointed at the anchor and attached to
//!   the panel edge,
//! - whether the anchor itself has scrolled out of the boundary.
//!
//! ## Not a layout engine
//!
//! This crate does not measure the panel or observe the anchor. Callers snapshot
//! the anchor rectangle and boundary from their host and re-run [`resolve`] on
//! every scroll, resize or anchor move. Resolution is pure and allocation-free.
//!
//! ## Failure
//!
//! Running out of space is not an error: when no side fits, the preferred side is
//! used anyway. Malformed input (for example a zero-sized panel) returns
//! [`PlacementError::InvalidGeometry`].
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use loft_placement::{Direction, PlacementRequest, Side, resolve};
//!
//! let request = PlacementRequest::new(Rect::new(100.0, 100.0, 140.0, 140.0), Size::new(200.0, 80.0))
//!     .with_direction(Direction::Down)
//!     .with_caret(Size::new(24.0, 12.0))
//!     .with_boundary(Rect::new(0.0, 0.0, 800.0, 120.0));
//!
//! let placement = resolve(&request).unwrap();
//! // Not enough room below, so the panel flips above the anchor.
//! assert_eq!(placement.side, Side::Top);
//! assert!(!placement.anchor_hidden);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod resolve;
mod types;

pub use error::{GeometryFault, PlacementError};
pub use resolve::{clear_space, resolve};
pub use types::{Alignment, Axis, Caret, Direction, Placement, PlacementRequest, Side};
