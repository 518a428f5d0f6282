// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A popover from open to dismiss: placement, stacking, theme and teardown.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p loft_demos --example popover_lifecycle`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Size, Vec2};
use loft_placement::{Direction, Side};
use loft_scheme::{ColorScheme, ManualPreference, SchemeScope, StyleSheets};
use loft_stacking::StackingScope;
use loft_surface::{
    FloatingSurface, HeadlessHost, Key, Role, Rounding, SurfaceEvent, SurfaceOptions,
    SurfaceUpdate, Visibility,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let system = ManualPreference::new(false);
    let scheme = SchemeScope::new(
        system.clone(),
        Rc::new(RefCell::new(StyleSheets::new())),
        ColorScheme::FollowSystem,
        None,
    )
    .unwrap();
    let layers = StackingScope::new(["menu", "popover", "tooltip"]).unwrap();

    let options = SurfaceOptions::default()
        .with_direction(Direction::Down)
        .with_rounding(Rounding::Four)
        .with_role(Role::Dialog)
        .with_accessibility_label("Share board")
        .with_stacking_label("popover");
    let mut host = HeadlessHost::new();
    let mut surface = FloatingSurface::new(&mut host, options)
        .with_stacking(&layers)
        .unwrap()
        .with_theme(scheme.tokens());

    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let button = Rect::new(360.0, 200.0, 440.0, 236.0);
    let frame = surface
        .open(button, Some(viewport), Size::new(320.0, 240.0))
        .unwrap();
    println!(
        "== Open ==\n  {:?} at {:?}, z-index {:?}",
        frame.side, frame.rect, frame.z_index
    );
    assert_eq!(frame.side, Side::Bottom);
    assert_eq!(frame.z_index, Some(2));

    // Escape is ignored until the host reports the mount.
    assert_eq!(
        surface.handle(SurfaceEvent::Key(Key::Escape)).unwrap(),
        SurfaceUpdate::Unchanged
    );
    surface.handle(SurfaceEvent::Mounted).unwrap();
    assert!(surface.host().has_focus());

    // Scroll the page until the button nears the bottom: the panel flips up.
    let scrolled = button + Vec2::new(0.0, 300.0);
    if let SurfaceUpdate::Reposition(frame) = surface
        .handle(SurfaceEvent::Scrolled {
            anchor: scrolled,
            boundary: Some(viewport),
        })
        .unwrap()
    {
        println!("== Scrolled ==\n  {:?} at {:?}", frame.side, frame.rect);
        assert_eq!(frame.side, Side::Top);
    }

    // Scroll the button out of view: the panel hides but stays mounted.
    let gone = button + Vec2::new(0.0, -400.0);
    if let SurfaceUpdate::Reposition(frame) = surface
        .handle(SurfaceEvent::Scrolled {
            anchor: gone,
            boundary: Some(viewport),
        })
        .unwrap()
    {
        println!("== Anchor hidden ==\n  visibility {:?}", frame.visibility);
        assert_eq!(frame.visibility, Visibility::Hidden);
    }

    // The system goes dark; recolor the open panel.
    system.set_prefers_dark(true);
    let recolored = surface.set_theme(scheme.tokens()).unwrap();
    println!("== Dark mode ==\n  colors {:?}", recolored.colors);
    assert_eq!(recolored.colors.background.as_deref(), Some("#191919"));

    let update = surface.handle(SurfaceEvent::Key(Key::Escape)).unwrap();
    assert_eq!(update, SurfaceUpdate::Dismiss);
    surface.close();
    drop(surface);

    println!("== Closed ==\n  host calls: {:?}", host.calls());
    assert_eq!(host.live_listeners().count(), 0);
    assert!(!host.is_mounted());
    assert!(!host.has_focus());
}
