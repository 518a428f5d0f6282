// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface errors.

use loft_placement::PlacementError;
use loft_stacking::StackingError;
use thiserror::Error;

/// Errors from [`FloatingSurface`](crate::FloatingSurface).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SurfaceError {
    /// The placement request was malformed.
    #[error(transparent)]
    Placement(#[from] PlacementError),
    /// The stacking label could not be resolved.
    #[error(transparent)]
    Stacking(#[from] StackingError),
    /// The operation needs an open surface.
    #[error("surface is not open")]
    NotOpen,
    /// [`FloatingSurface::open`](crate::FloatingSurface::open) on an open surface.
    #[error("surface is already open")]
    AlreadyOpen,
}
