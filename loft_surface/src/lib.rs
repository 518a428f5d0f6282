// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loft_surface --heading-base-level=0

//! Loft Surface: the lifecycle of a floating panel such as a popover.
//!
//! [`FloatingSurface`] is a composition point. It combines:
//!
//! - placement from [`loft_placement`] (side, shift, caret, anchor visibility),
//! - a z-index looked up by label in a [`loft_stacking::StackingScope`],
//! - background and border colors from a [`loft_scheme::ThemeTokens`] set,
//!
//! into a [`SurfaceFrame`] the host draws. Portal mounting, listeners and focus
//! belong to the host, reached through the [`SurfaceHost`] trait.
//! [`HeadlessHost`] records those calls for tests and tools.
//!
//! Closing (or dropping) a surface detaches every listener, releases focus and
//! unmounts before returning.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use loft_placement::{Direction, Side};
//! use loft_stacking::StackingScope;
//! use loft_surface::{
//!     FloatingSurface, HeadlessHost, Key, SurfaceEvent, SurfaceOptions, SurfaceUpdate,
//! };
//!
//! let layers = StackingScope::new(["menu", "tooltip"]).unwrap();
//! let options = SurfaceOptions::default()
//!     .with_direction(Direction::Down)
//!     .with_stacking_label("menu");
//! let mut host = HeadlessHost::new();
//! let mut surface = FloatingSurface::new(&mut host, options)
//!     .with_stacking(&layers)
//!     .unwrap();
//!
//! let anchor = Rect::new(100.0, 100.0, 140.0, 140.0);
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let frame = surface.open(anchor, Some(viewport), Size::new(200.0, 80.0)).unwrap();
//! assert_eq!(frame.side, Side::Bottom);
//! assert_eq!(frame.z_index, Some(1));
//!
//! surface.handle(SurfaceEvent::Mounted).unwrap();
//! let update = surface.handle(SurfaceEvent::Key(Key::Escape)).unwrap();
//! assert_eq!(update, SurfaceUpdate::Dismiss);
//! surface.close();
//! drop(surface);
//! assert_eq!(host.live_listeners().count(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod frame;
mod host;
mod options;
mod surface;

pub use error::SurfaceError;
pub use frame::{BORDER_TOKEN, CaretFrame, SurfaceColors, SurfaceFrame, Visibility};
pub use host::{GeometrySignals, HeadlessHost, HostCall, ListenerId, ListenerKind, SurfaceHost};
pub use options::{BackgroundColor, CARET_HEIGHT, CARET_WIDTH, Role, Rounding, SurfaceOptions};
pub use surface::{FloatingSurface, Key, SurfaceEvent, SurfaceUpdate};
