// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics: side selection, flipping, shifting and hidden anchors.
//!
//! Run:
//! - `cargo run -p loft_demos --example placement_basics`
//! - `RUST_LOG=loft_placement=trace cargo run -p loft_demos --example placement_basics`

use kurbo::{Rect, Size};
use loft_placement::{Alignment, Direction, PlacementRequest, Side, clear_space, resolve};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let anchor = Rect::new(100.0, 100.0, 140.0, 140.0);
    let panel = Size::new(200.0, 80.0);
    let caret = Size::new(24.0, 12.0);

    // Plenty of room below: the ideal side wins.
    let below = PlacementRequest::new(anchor, panel)
        .with_direction(Direction::Down)
        .with_caret(caret)
        .with_boundary(viewport);
    let p = resolve(&below).unwrap();
    println!("== Fits below ==\n  {:?} at {:?}", p.side, p.floating_rect());
    assert_eq!(p.side, Side::Bottom);
    assert_eq!(p.floating_rect().y0, 140.0);
    assert!(!p.anchor_hidden);

    // Short boundary: no room below, so flip to the opposite side.
    let short = Rect::new(0.0, 0.0, 800.0, 120.0);
    println!(
        "== Short boundary ==\n  clear below {}, clear above {}",
        clear_space(anchor, short, Side::Bottom),
        clear_space(anchor, short, Side::Top)
    );
    let p = resolve(&below.with_boundary(short)).unwrap();
    println!("  flipped to {:?}", p.side);
    assert_eq!(p.side, Side::Top);

    // Anchor hugging the left edge: the panel shifts right and the caret
    // slides along the edge to keep pointing at the anchor.
    let edge = Rect::new(4.0, 300.0, 36.0, 332.0);
    let p = resolve(
        &PlacementRequest::new(edge, panel)
            .with_direction(Direction::Up)
            .with_caret(caret)
            .with_boundary(viewport),
    )
    .unwrap();
    let caret_at = p.caret_position().unwrap();
    println!(
        "== Left edge ==\n  {:?} aligned {:?}, caret at {:?}",
        p.side, p.alignment, caret_at
    );
    assert_eq!(p.floating_rect().x0, 0.0);
    assert_eq!(p.alignment, Alignment::Start);
    assert_eq!(p.floating_origin.x + caret_at.x + caret.width / 2.0, edge.center().x);

    // Anchor scrolled out of view.
    let gone = Rect::new(100.0, -80.0, 140.0, -40.0);
    let p = resolve(&PlacementRequest::new(gone, panel).with_boundary(viewport)).unwrap();
    println!("== Scrolled away ==\n  anchor hidden: {}", p.anchor_hidden);
    assert!(p.anchor_hidden);
}
