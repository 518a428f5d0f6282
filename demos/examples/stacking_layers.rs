// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking scopes: label order becomes z-index, nested scopes isolate.
//!
//! Run:
//! - `cargo run -p loft_demos --example stacking_layers`

use loft_stacking::{StackingError, StackingRegistry, StackingScope};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // An app-level scope: later labels draw on top.
    let app = StackingScope::new(["dropdown", "modal", "toast"]).unwrap();
    println!("== App scope ==");
    for (label, depth) in app.labels() {
        println!("  {label:>8} -> {depth}");
    }
    assert_eq!(app.depth("dropdown"), Ok(1));
    assert_eq!(app.depth("toast"), Ok(3));
    println!("  root style: {}", app.root_style());

    // A modal has its own layers. It sees none of the app's labels.
    let modal = app.nested("modal", ["menu", "tooltip"]).unwrap();
    println!("== Modal scope ==\n  root style: {}", modal.root_style());
    assert_eq!(modal.root_style().z_index, Some(2));
    assert_eq!(modal.depth("tooltip"), Ok(2));
    assert!(matches!(
        modal.depth("toast"),
        Err(StackingError::UnregisteredLabel { .. })
    ));

    // Handles for owners and consumers that cannot share a borrow.
    let mut registry = StackingRegistry::new();
    let root = registry.register(["menu", "tooltip"]).unwrap();
    let child = registry.register_nested(root, "menu", ["submenu"]).unwrap();
    println!(
        "== Registry ==\n  tooltip {:?}, submenu {:?}",
        registry.lookup(root, "tooltip"),
        registry.lookup(child, "submenu")
    );
    assert_eq!(registry.lookup(root, "tooltip"), Ok(2));
    assert_eq!(registry.lookup(child, "submenu"), Ok(1));

    registry.dispose(child);
    assert_eq!(
        registry.lookup(child, "submenu"),
        Err(StackingError::UnknownScope)
    );
    println!("  disposed child; {} scope(s) live", registry.len());
    assert_eq!(registry.len(), 1);
}
