// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement algorithm.
//!
//! ## Steps
//!
//! 1. Side selection: the ideal side, then its opposite, then the two
//!    perpendicular sides ranked by clear space. The first side whose clear space
//!    holds the panel (plus offset) wins; if none do, the ideal side is kept.
//! 2. Cross-axis shift: center on the anchor, then clamp into the boundary.
//! 3. Caret: center on the anchor, clamped to the panel edge.
//! 4. Anchor visibility: hidden when the anchor has no overlap with the boundary.

use kurbo::{Point, Rect};
use tracing::{debug, error, trace};

use crate::error::{GeometryFault, PlacementError};
use crate::types::{Alignment, Axis, Caret, Placement, PlacementRequest, Side};

/// Resolve a placement for a floating panel.
///
/// Pure: the result depends only on `request`. Callers re-invoke it whenever the
/// anchor, viewport, or scroll boundary changes.
///
/// # Errors
///
/// Returns [`PlacementError::InvalidGeometry`] when the floating size is not
/// strictly positive, or any rectangle or length in the request is malformed.
pub fn resolve(request: &PlacementRequest) -> Result<Placement, PlacementError> {
    if let Err(fault) = validate(request) {
        error!(%fault, "rejecting placement request");
        return Err(fault.into());
    }

    let ideal = request.ideal_direction.side();
    let side = match request.scroll_boundary {
        Some(boundary) => choose_side(request, boundary, ideal),
        None => ideal,
    };
    if side != ideal {
        debug!(?ideal, chosen = ?side, "flipped placement side");
    }

    let main = main_axis_origin(request, side);
    let (cross, alignment) = cross_axis_origin(request, side);
    let floating_origin = match side.main_axis() {
        Axis::Vertical => Point::new(cross, main),
        Axis::Horizontal => Point::new(main, cross),
    };

    let caret = request.caret.map(|size| Caret {
        offset: caret_offset(request, side, cross, size.width),
        size,
    });

    let anchor_hidden = request
        .scroll_boundary
        .is_some_and(|boundary| !overlaps(request.anchor, boundary));

    let placement = Placement {
        side,
        alignment,
        floating_origin,
        floating_size: request.floating_size,
        caret,
        anchor_hidden,
    };
    trace!(?placement, "resolved placement");
    Ok(placement)
}

/// Clear space between the anchor's edge and the boundary's edge on `side`.
///
/// Negative when the anchor already extends past the boundary on that side.
pub fn clear_space(anchor: Rect, boundary: Rect, side: Side) -> f64 {
    match side {
        Side::Top => anchor.y0 - boundary.y0,
        Side::Right => boundary.x1 - anchor.x1,
        Side::Bottom => boundary.y1 - anchor.y1,
        Side::Left => anchor.x0 - boundary.x0,
    }
}

fn validate(request: &PlacementRequest) -> Result<(), GeometryFault> {
    let size = request.floating_size;
    if !(size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0)
    {
        return Err(GeometryFault::FloatingSize {
            width: size.width,
            height: size.height,
        });
    }
    if !well_formed(request.anchor) {
        return Err(GeometryFault::Anchor);
    }
    if request.scroll_boundary.is_some_and(|b| !well_formed(b)) {
        return Err(GeometryFault::Boundary);
    }
    if request.caret.is_some_and(|c| {
        !(c.width.is_finite() && c.height.is_finite() && c.width >= 0.0 && c.height >= 0.0)
    }) {
        return Err(GeometryFault::Caret);
    }
    if !request.offset.is_finite() {
        return Err(GeometryFault::Offset);
    }
    if !(request.caret_padding.is_finite() && request.caret_padding >= 0.0) {
        return Err(GeometryFault::CaretPadding);
    }
    Ok(())
}

fn well_formed(rect: Rect) -> bool {
    [rect.x0, rect.y0, rect.x1, rect.y1]
        .iter()
        .all(|v| v.is_finite())
        && rect.x1 >= rect.x0
        && rect.y1 >= rect.y0
}

/// Strict overlap; rectangles that only touch along an edge do not overlap.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// The two sides perpendicular to `side`, clockwise neighbour first.
fn perpendicular(side: Side) -> (Side, Side) {
    match side {
        Side::Top => (Side::Right, Side::Left),
        Side::Right => (Side::Bottom, Side::Top),
        Side::Bottom => (Side::Left, Side::Right),
        Side::Left => (Side::Top, Side::Bottom),
    }
}

fn choose_side(request: &PlacementRequest, boundary: Rect, ideal: Side) -> Side {
    let anchor = request.anchor;
    let (mut first, mut second) = perpendicular(ideal);
    if clear_space(anchor, boundary, second) > clear_space(anchor, boundary, first) {
        core::mem::swap(&mut first, &mut second);
    }
    let candidates = [ideal, ideal.opposite(), first, second];
    candidates
        .into_iter()
        .find(|&side| {
            let needed = side.main_axis().extent(request.floating_size) + request.offset;
            clear_space(anchor, boundary, side) >= needed
        })
        .unwrap_or(ideal)
}

fn main_axis_origin(request: &PlacementRequest, side: Side) -> f64 {
    let anchor = request.anchor;
    let size = request.floating_size;
    match side {
        Side::Top => anchor.y0 - request.offset - size.height,
        Side::Bottom => anchor.y1 + request.offset,
        Side::Left => anchor.x0 - request.offset - size.width,
        Side::Right => anchor.x1 + request.offset,
    }
}

fn cross_axis_origin(request: &PlacementRequest, side: Side) -> (f64, Alignment) {
    let axis = side.cross_axis();
    let len = axis.extent(request.floating_size);
    let (a0, a1) = axis.span(request.anchor);
    let centered = (a0 + a1) * 0.5 - len * 0.5;

    let Some(boundary) = request.scroll_boundary else {
        return (centered, Alignment::Center);
    };
    let (lo, hi) = axis.span(boundary);
    let max = hi - len;
    // Wider than the boundary: pin to the start edge.
    let pos = if max < lo {
        lo
    } else {
        centered.clamp(lo, max)
    };
    let alignment = if pos > centered {
        Alignment::Start
    } else if pos < centered {
        Alignment::End
    } else {
        Alignment::Center
    };
    (pos, alignment)
}

fn caret_offset(request: &PlacementRequest, side: Side, cross_origin: f64, caret_width: f64) -> f64 {
    let axis = side.cross_axis();
    let len = axis.extent(request.floating_size);
    let (a0, a1) = axis.span(request.anchor);
    let anchor_center = (a0 + a1) * 0.5;
    let max = (len - caret_width).max(0.0);
    let pad = if request.caret_padding * 2.0 <= max {
        request.caret_padding
    } else {
        0.0
    };
    (anchor_center - cross_origin - caret_width * 0.5).clamp(pad, max - pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use kurbo::Size;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);
    const CARET: Size = Size::new(24.0, 12.0);

    fn anchor_at(x: f64, y: f64) -> Rect {
        Rect::new(x, y, x + 40.0, y + 40.0)
    }

    #[test]
    fn fits_below_when_asked() {
        let request = PlacementRequest::new(anchor_at(100.0, 100.0), Size::new(200.0, 80.0))
            .with_direction(Direction::Down)
            .with_boundary(VIEWPORT);
        let p = resolve(&request).unwrap();
        assert_eq!(p.side, Side::Bottom);
        assert_eq!(p.alignment, Alignment::Center);
        assert_eq!(p.floating_origin, Point::new(20.0, 140.0));
        assert_eq!(p.floating_rect().y0, request.anchor.y1, "panel top touches anchor bottom");
        let rect = p.floating_rect();
        assert!(
            rect.x0 >= 0.0 && rect.x1 <= 800.0 && rect.y1 <= 600.0,
            "panel stays inside the viewport"
        );
        assert!(!p.anchor_hidden);
        assert!(p.caret.is_none(), "caret was not requested");
    }

    #[test]
    fn flips_up_when_bottom_is_short() {
        let request = PlacementRequest::new(anchor_at(100.0, 100.0), Size::new(200.0, 80.0))
            .with_direction(Direction::Down)
            .with_boundary(Rect::new(0.0, 0.0, 800.0, 120.0));
        let p = resolve(&request).unwrap();
        assert_eq!(p.side, Side::Top);
        assert_eq!(p.floating_origin.y, 20.0);
    }

    #[test]
    fn falls_back_to_perpendicular_with_most_room() {
        // Tall panel that fits neither above nor below a mid-height anchor.
        let request = PlacementRequest::new(anchor_at(100.0, 280.0), Size::new(200.0, 400.0))
            .with_direction(Direction::Up)
            .with_boundary(VIEWPORT);
        let p = resolve(&request).unwrap();
        assert_eq!(p.side, Side::Right, "right has 660px, left only 100px");
    }

    #[test]
    fn keeps_ideal_side_when_nothing_fits() {
        let request = PlacementRequest::new(anchor_at(100.0, 100.0), Size::new(900.0, 700.0))
            .with_direction(Direction::Left)
            .with_boundary(VIEWPORT);
        let p = resolve(&request).unwrap();
        assert_eq!(p.side, Side::Left);
    }

    #[test]
    fn unbounded_requests_never_flip() {
        let request = PlacementRequest::new(anchor_at(0.0, 0.0), Size::new(300.0, 300.0))
            .with_direction(Direction::Up);
        let p = resolve(&request).unwrap();
        assert_eq!(p.side, Side::Top);
        assert_eq!(p.floating_origin, Point::new(-130.0, -300.0));
        assert!(!p.anchor_hidden);
    }

    #[test]
    fn offset_counts_toward_required_space() {
        // 100px above the anchor; 80px panel plus 24px gap does not fit.
        let request = PlacementRequest::new(anchor_at(100.0, 100.0), Size::new(200.0, 80.0))
            .with_direction(Direction::Up)
            .with_offset(24.0)
            .with_boundary(VIEWPORT);
        let p = resolve(&request).unwrap();
        assert_eq!(p.side, Side::Bottom);
        assert_eq!(p.floating_origin.y, 164.0);
    }

    #[test]
    fn shifts_away_from_edges() {
        let near_left = PlacementRequest::new(anchor_at(10.0, 300.0), Size::new(200.0, 80.0))
            .with_direction(Direction::Down)
            .with_boundary(VIEWPORT);
        let p = resolve(&near_left).unwrap();
        assert_eq!(p.floating_origin.x, 0.0);
        assert_eq!(p.alignment, Alignment::Start);

        let near_right = PlacementRequest::new(anchor_at(750.0, 300.0), Size::new(200.0, 80.0))
            .with_direction(Direction::Down)
            .with_boundary(VIEWPORT);
        let p = resolve(&near_right).unwrap();
        assert_eq!(p.floating_origin.x, 600.0);
        assert_eq!(p.alignment, Alignment::End);
    }

    #[test]
    fn oversized_panel_pins_to_start_edge() {
        let request = PlacementRequest::new(anchor_at(400.0, 100.0), Size::new(1000.0, 80.0))
            .with_direction(Direction::Down)
            .with_boundary(VIEWPORT);
        let p = resolve(&request).unwrap();
        assert_eq!(p.floating_origin.x, 0.0);
    }

    #[test]
    fn caret_tracks_anchor_center() {
        let request = PlacementRequest::new(anchor_at(10.0, 300.0), Size::new(200.0, 80.0))
            .with_direction(Direction::Down)
            .with_caret(CARET)
            .with_boundary(VIEWPORT);
        let p = resolve(&request).unwrap();
        // Anchor center at x=30, panel at x=0, caret half-width 12.
        assert_eq!(p.caret.unwrap().offset, 18.0);
        assert_eq!(p.caret_position(), Some(Point::new(18.0, -12.0)));
    }

    #[test]
    fn caret_clamps_to_panel_edge() {
        // Anchor mostly left of the boundary; the panel is pushed right.
        let request = PlacementRequest::new(Rect::new(-60.0, 300.0, 4.0, 340.0), Size::new(200.0, 80.0))
            .with_direction(Direction::Down)
            .with_caret(CARET)
            .with_caret_padding(4.0)
            .with_boundary(VIEWPORT);
        let p = resolve(&request).unwrap();
        assert_eq!(p.caret.unwrap().offset, 4.0, "padding keeps caret off the corner");
        assert!(!p.anchor_hidden, "anchor still overlaps the boundary");
    }

    #[test]
    fn caret_padding_dropped_when_it_cannot_fit() {
        let request = PlacementRequest::new(anchor_at(100.0, 100.0), Size::new(30.0, 30.0))
            .with_direction(Direction::Down)
            .with_caret(CARET)
            .with_caret_padding(8.0);
        let p = resolve(&request).unwrap();
        let offset = p.caret.unwrap().offset;
        assert!((0.0..=6.0).contains(&offset), "offset {offset} outside panel edge");
    }

    #[test]
    fn anchor_visibility_tracks_boundary_overlap() {
        let boundary = Rect::new(0.0, 0.0, 400.0, 400.0);
        let size = Size::new(100.0, 50.0);
        let inside = PlacementRequest::new(anchor_at(100.0, 100.0), size).with_boundary(boundary);
        assert!(!resolve(&inside).unwrap().anchor_hidden);

        let scrolled_away = PlacementRequest::new(anchor_at(100.0, -80.0), size).with_boundary(boundary);
        assert!(resolve(&scrolled_away).unwrap().anchor_hidden);

        let touching = PlacementRequest::new(anchor_at(400.0, 100.0), size).with_boundary(boundary);
        assert!(resolve(&touching).unwrap().anchor_hidden, "edge contact is not overlap");

        let partial = PlacementRequest::new(anchor_at(380.0, 100.0), size).with_boundary(boundary);
        assert!(!resolve(&partial).unwrap().anchor_hidden);
    }

    #[test]
    fn invariants_hold_across_a_grid() {
        let boundary = Rect::new(0.0, 0.0, 500.0, 400.0);
        let size = Size::new(160.0, 90.0);
        for direction in [Direction::Up, Direction::Right, Direction::Down, Direction::Left] {
            for ix in 0..12 {
                for iy in 0..10 {
                    let anchor = anchor_at(ix as f64 * 40.0, iy as f64 * 40.0);
                    let request = PlacementRequest::new(anchor, size)
                        .with_direction(direction)
                        .with_caret(CARET)
                        .with_boundary(boundary);
                    let p = resolve(&request).unwrap();
                    let ideal = direction.side();
                    let needed = ideal.main_axis().extent(size);
                    if clear_space(anchor, boundary, ideal) >= needed {
                        assert_eq!(p.side, ideal, "ideal side fits for {anchor:?}");
                    }
                    let cross = p.side.cross_axis().extent(size);
                    let offset = p.caret.unwrap().offset;
                    assert!(
                        (0.0..=cross - CARET.width).contains(&offset),
                        "caret {offset} detached for {anchor:?}"
                    );
                    let rect = p.floating_rect();
                    let (lo, hi) = p.side.cross_axis().span(rect);
                    let (blo, bhi) = p.side.cross_axis().span(boundary);
                    assert!(lo >= blo && hi <= bhi, "panel leaks past boundary for {anchor:?}");
                    assert!(!p.anchor_hidden, "anchor {anchor:?} is inside the boundary");
                }
            }
        }
    }

    #[test]
    fn rejects_degenerate_floating_size() {
        for size in [
            Size::new(0.0, 10.0),
            Size::new(10.0, -1.0),
            Size::new(f64::NAN, 10.0),
            Size::new(10.0, f64::INFINITY),
        ] {
            let err = resolve(&PlacementRequest::new(anchor_at(0.0, 0.0), size)).unwrap_err();
            assert!(
                matches!(
                    err,
                    PlacementError::InvalidGeometry(GeometryFault::FloatingSize { .. })
                ),
                "expected size fault for {size:?}"
            );
        }
    }

    #[test]
    fn rejects_malformed_inputs() {
        let size = Size::new(10.0, 10.0);
        let inverted = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(
            resolve(&PlacementRequest::new(inverted, size)),
            Err(PlacementError::InvalidGeometry(GeometryFault::Anchor))
        );
        assert_eq!(
            resolve(&PlacementRequest::new(anchor_at(0.0, 0.0), size).with_boundary(inverted)),
            Err(PlacementError::InvalidGeometry(GeometryFault::Boundary))
        );
        assert_eq!(
            resolve(&PlacementRequest::new(anchor_at(0.0, 0.0), size).with_caret(Size::new(-1.0, 2.0))),
            Err(PlacementError::InvalidGeometry(GeometryFault::Caret))
        );
        assert_eq!(
            resolve(&PlacementRequest::new(anchor_at(0.0, 0.0), size).with_offset(f64::NAN)),
            Err(PlacementError::InvalidGeometry(GeometryFault::Offset))
        );
        assert_eq!(
            resolve(&PlacementRequest::new(anchor_at(0.0, 0.0), size).with_caret_padding(-2.0)),
            Err(PlacementError::InvalidGeometry(GeometryFault::CaretPadding))
        );
    }
}
