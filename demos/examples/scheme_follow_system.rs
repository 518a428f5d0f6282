// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color schemes: a global scope following the system and a scoped preview.
//!
//! Run:
//! - `cargo run -p loft_demos --example scheme_follow_system`
//! - `RUST_LOG=loft_scheme=debug cargo run -p loft_demos --example scheme_follow_system`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use loft_scheme::{ColorScheme, ManualPreference, SchemeScope, StyleSheets, ThemeName};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let system = ManualPreference::new(false);
    let sheets = Rc::new(RefCell::new(StyleSheets::new()));

    let mut app = SchemeScope::new(
        system.clone(),
        sheets.clone(),
        ColorScheme::FollowSystem,
        None,
    )
    .unwrap();
    let changes = Rc::new(Cell::new(0_u32));
    let seen = Rc::clone(&changes);
    let app_changes = app.on_change(move |tokens| {
        seen.set(seen.get() + 1);
        println!("  -> now {}", tokens.name().as_str());
    });

    println!("== Global, following the system ==");
    println!("{}", sheets.borrow().get(":root").unwrap_or_default());
    assert_eq!(app.theme(), ThemeName::LightMode);

    println!("== System switches to dark ==");
    system.set_prefers_dark(true);
    assert_eq!(app.theme(), ThemeName::DarkMode);
    assert_eq!(changes.get(), 1);

    // A narrowly scoped preview pinned to light. Its styles only reach its own
    // subtree; portal-rendered overlays inside it get the global scheme.
    let preview = SchemeScope::new(
        system.clone(),
        sheets.clone(),
        ColorScheme::Light,
        Some("preview"),
    )
    .unwrap();
    println!(
        "== Scoped preview ==\n  class {:?}, {} stylesheet(s) installed",
        preview.class_name(),
        sheets.borrow().len()
    );
    assert_eq!(sheets.borrow().len(), 2);
    assert_eq!(system.listener_count(), 1, "fixed scopes never subscribe");

    println!("== User pins dark, then returns to system ==");
    app.set_selection(ColorScheme::Dark);
    app.set_selection(ColorScheme::FollowSystem);
    assert_eq!(system.listener_count(), 1);
    assert_eq!(changes.get(), 3);

    drop(app_changes);
    drop(preview);
    drop(app);
    assert_eq!(system.listener_count(), 0);
    assert!(sheets.borrow().is_empty());
    println!("== Torn down: no listeners, no stylesheets ==");
}
