// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loft_scheme --heading-base-level=0

//! Loft Scheme: scoped light/dark color schemes that follow the system.
//!
//! A [`SchemeScope`] owns one [`ColorScheme`] selection for the whole document or
//! for one subtree. It resolves the selection to an immutable [`ThemeTokens`] set,
//! installs a stylesheet of `--loft-*` custom properties through a [`StyleSink`],
//! and, while following the system, listens to a [`PreferenceSource`].
//!
//! - Resolution is pure ([`resolve`]): `Light` and `Dark` ignore the system,
//!   `FollowSystem` mirrors it.
//! - Token sets are replaced wholesale, never edited. Consumers hold an
//!   `Rc<ThemeTokens>` and compare pointers to detect a change.
//! - A scope holds at most one preference subscription from first use until drop.
//! - [`SchemeScope::on_change`] returns a [`ChangeSubscription`]. Dropping it
//!   detaches the listener.
//! - Each scope owns its own sheet ([`SheetId`]) in the sink, so scopes sharing a
//!   selector never remove each other's styles.
//!
//! ## Global and narrow scopes
//!
//! A scope created without an id writes to `:root`. With an id, its styles target
//! a class placed on the scope's own subtree ([`SchemeScope::class_name`]).
//! Anything rendered through a portal escapes that subtree and gets the global
//! styles instead. Narrow scopes are meant for previews and documentation, not
//! for an application's main theme.
//!
//! ## Minimal usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use loft_scheme::{ColorScheme, ManualPreference, SchemeScope, StyleSheets, ThemeName};
//!
//! let system = ManualPreference::new(false);
//! let sheets = Rc::new(RefCell::new(StyleSheets::new()));
//! let scope = SchemeScope::new(system.clone(), sheets.clone(), ColorScheme::FollowSystem, None)
//!     .unwrap();
//! assert_eq!(scope.theme(), ThemeName::LightMode);
//!
//! system.set_prefers_dark(true);
//! assert_eq!(scope.theme(), ThemeName::DarkMode);
//! assert_eq!(scope.tokens().get("colorGray0"), Some("#030303"));
//! assert!(sheets.borrow().get(":root").is_some());
//!
//! drop(scope);
//! assert_eq!(system.listener_count(), 0);
//! assert!(sheets.borrow().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod host;
mod scope;
mod style;
mod tokens;

pub use error::SchemeError;
pub use host::{
    ManualPreference, PreferenceListener, PreferenceSource, SheetId, StyleSheets, StyleSink,
    SubscriptionId,
};
pub use scope::{ChangeListener, ChangeSubscription, SchemeScope};
pub use style::{PROPERTY_PREFIX, class_name, selector, stylesheet};
pub use tokens::{ColorScheme, Palette, ThemeName, ThemeTokens, resolve};
