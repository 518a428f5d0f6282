// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement errors.

use thiserror::Error;

/// The input that made a [`PlacementRequest`](crate::PlacementRequest) malformed.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryFault {
    /// Floating size was zero, negative, or not finite.
    #[error("floating size {width}x{height} must be finite and strictly positive")]
    FloatingSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// Anchor rectangle was inverted or not finite.
    #[error("anchor rectangle must be finite with non-negative extent")]
    Anchor,
    /// Scroll boundary was inverted or not finite.
    #[error("scroll boundary must be finite with non-negative extent")]
    Boundary,
    /// Caret size was negative or not finite.
    #[error("caret size must be finite and non-negative")]
    Caret,
    /// Offset was not finite.
    #[error("offset must be finite")]
    Offset,
    /// Caret padding was negative or not finite.
    #[error("caret padding must be finite and non-negative")]
    CaretPadding,
}

/// Errors produced by [`resolve`](crate::resolve).
///
/// These are caller bugs, not runtime conditions. A panel that fits on no side
/// is still placed on its ideal side and does not produce an error.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum PlacementError {
    /// The request carried malformed sizes or rectangles.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryFault),
}
