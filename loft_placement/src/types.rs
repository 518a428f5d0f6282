// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: directions, sides, alignment, requests, and results.

use kurbo::{Point, Rect, Size, Vec2};

/// Preferred direction for a floating panel, relative to its anchor.
///
/// This is a hint. [`resolve`](crate::resolve) may flip to another [`Side`]
/// when the preferred one does not have enough clear space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Above the anchor.
    #[default]
    Up,
    /// Right of the anchor.
    Right,
    /// Below the anchor.
    Down,
    /// Left of the anchor.
    Left,
}

impl Direction {
    /// The side of the anchor this direction places the panel on.
    pub const fn side(self) -> Side {
        match self {
            Self::Up => Side::Top,
            Self::Right => Side::Right,
            Self::Down => Side::Bottom,
            Self::Left => Side::Left,
        }
    }
}

impl From<Side> for Direction {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Self::Up,
            Side::Right => Self::Right,
            Side::Bottom => Self::Down,
            Side::Left => Self::Left,
        }
    }
}

/// Side of the anchor a panel was placed on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Panel sits above the anchor.
    Top,
    /// Panel sits to the right of the anchor.
    Right,
    /// Panel sits below the anchor.
    Bottom,
    /// Panel sits to the left of the anchor.
    Left,
}

impl Side {
    /// All sides in clockwise order starting at [`Side::Top`].
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The side across the anchor from this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// The axis a panel on this side is offset along.
    pub const fn main_axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// The axis along which the panel slides to stay inside the boundary.
    pub const fn cross_axis(self) -> Axis {
        self.main_axis().flip()
    }

    /// Direction a caret points when the panel is on this side.
    ///
    /// A panel above the anchor has a caret pointing down at it, and so on.
    pub const fn caret_direction(self) -> Direction {
        match self {
            Self::Top => Direction::Down,
            Self::Right => Direction::Left,
            Self::Bottom => Direction::Up,
            Self::Left => Direction::Right,
        }
    }
}

/// A layout axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// The other axis.
    pub const fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Start and end coordinates of `rect` along this axis.
    pub fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (rect.x0, rect.x1),
            Self::Vertical => (rect.y0, rect.y1),
        }
    }
}

/// Cross-axis alignment of the panel relative to the anchor.
///
/// Panels start out centered on the anchor. When that would push them past the
/// scroll boundary they shift, and the alignment records which way.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// Shifted toward higher coordinates; the panel's start edge leads.
    Start,
    /// Centered on the anchor.
    #[default]
    Center,
    /// Shifted toward lower coordinates; the panel's end edge leads.
    End,
}

/// Input to [`resolve`](crate::resolve).
///
/// All coordinates are in the same space, typically the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Bounding box of the anchor. A fresh snapshot per call; never cached.
    pub anchor: Rect,
    /// Preferred direction. A hint; the resolver may flip it.
    pub ideal_direction: Direction,
    /// Intrinsic size of the floating panel. Must be strictly positive.
    pub floating_size: Size,
    /// Caret size in its downward-pointing orientation: `width` is the base,
    /// `height` the depth. `None` suppresses the caret.
    pub caret: Option<Size>,
    /// Clipping rectangle the panel must stay inside. `None` means unbounded.
    pub scroll_boundary: Option<Rect>,
    /// Gap between the anchor edge and the panel along the main axis.
    pub offset: f64,
    /// Minimum distance kept between the caret and the panel's cross-axis edges.
    pub caret_padding: f64,
}

impl PlacementRequest {
    /// A request with no caret, no boundary, and the default direction.
    pub fn new(anchor: Rect, floating_size: Size) -> Self {
        Self {
            anchor,
            ideal_direction: Direction::default(),
            floating_size,
            caret: None,
            scroll_boundary: None,
            offset: 0.0,
            caret_padding: 0.0,
        }
    }

    /// Set the preferred direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.ideal_direction = direction;
        self
    }

    /// Request a caret of the given size.
    #[must_use]
    pub fn with_caret(mut self, caret: Size) -> Self {
        self.caret = Some(caret);
        self
    }

    /// Constrain the panel to `boundary`.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Rect) -> Self {
        self.scroll_boundary = Some(boundary);
        self
    }

    /// Set the main-axis gap between anchor and panel.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Keep the caret at least `padding` away from the panel's corners.
    #[must_use]
    pub fn with_caret_padding(mut self, padding: f64) -> Self {
        self.caret_padding = padding;
        self
    }
}

/// Caret placement along the panel edge facing the anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Caret {
    /// Distance along the cross axis from the panel's start edge to the caret's start edge.
    ///
    /// Always within `[0, cross_len - size.width]`.
    pub offset: f64,
    /// Caret size in its downward-pointing orientation.
    pub size: Size,
}

/// Output of [`resolve`](crate::resolve).
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Side of the anchor the panel was placed on.
    pub side: Side,
    /// How the panel was shifted along the cross axis.
    pub alignment: Alignment,
    /// Top-left corner of the panel.
    pub floating_origin: Point,
    /// Size of the panel (as requested).
    pub floating_size: Size,
    /// Caret placement, `None` only when the request suppressed the caret.
    pub caret: Option<Caret>,
    /// True when the anchor does not intersect the scroll boundary.
    pub anchor_hidden: bool,
}

impl Placement {
    /// Panel bounds.
    pub fn floating_rect(&self) -> Rect {
        Rect::from_origin_size(self.floating_origin, self.floating_size)
    }

    /// Caret offset as a vector relative to the panel origin.
    ///
    /// Only the cross-axis component is non-zero: `x` for top/bottom panels,
    /// `y` for left/right ones.
    pub fn caret_offset(&self) -> Option<Vec2> {
        let caret = self.caret?;
        Some(match self.side.cross_axis() {
            Axis::Horizontal => Vec2::new(caret.offset, 0.0),
            Axis::Vertical => Vec2::new(0.0, caret.offset),
        })
    }

    /// Size of the caret box as drawn, rotated to point at the anchor.
    pub fn caret_extent(&self) -> Option<Size> {
        let caret = self.caret?;
        Some(match self.side.main_axis() {
            Axis::Vertical => caret.size,
            Axis::Horizontal => Size::new(caret.size.height, caret.size.width),
        })
    }

    /// Top-left corner of the caret box relative to the panel origin.
    ///
    /// The caret sits just outside the panel edge that faces the anchor.
    pub fn caret_position(&self) -> Option<Point> {
        let caret = self.caret?;
        let depth = caret.size.height;
        Some(match self.side {
            Side::Top => Point::new(caret.offset, self.floating_size.height),
            Side::Bottom => Point::new(caret.offset, -depth),
            Side::Left => Point::new(self.floating_size.width, caret.offset),
            Side::Right => Point::new(-depth, caret.offset),
        })
    }
}
