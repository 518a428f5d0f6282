// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What a host draws for one surface state.

use alloc::string::String;

use kurbo::{Point, Rect, Size};
use loft_placement::{Alignment, Direction, Placement, Side};
use loft_scheme::ThemeTokens;

use crate::options::{BackgroundColor, Rounding, SurfaceOptions};

/// Token used for the panel border.
pub const BORDER_TOKEN: &str = "colorTransparentGray100";

/// Whether the panel should be painted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Visibility {
    /// Painted normally.
    #[default]
    Visible,
    /// Kept in layout but not painted: the anchor has scrolled out of its boundary.
    Hidden,
}

/// Caret geometry, relative to the panel origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CaretFrame {
    /// Top-left corner of the caret box.
    pub position: Point,
    /// Size of the caret box as drawn.
    pub size: Size,
    /// The direction the caret tip points, toward the anchor.
    pub direction: Direction,
}

/// Colors resolved from the active theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceColors {
    /// Panel and caret fill, if the theme defines it.
    pub background: Option<String>,
    /// Border color, when borders are enabled and the theme defines one.
    pub border: Option<String>,
}

impl SurfaceColors {
    pub(crate) fn from_tokens(
        tokens: &ThemeTokens,
        background: BackgroundColor,
        border: bool,
    ) -> Self {
        Self {
            background: tokens.get(background.token()).map(String::from),
            border: border
                .then(|| tokens.get(BORDER_TOKEN))
                .flatten()
                .map(String::from),
        }
    }
}

/// One resolved surface state.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceFrame {
    /// Panel bounds in the boundary's coordinate space.
    pub rect: Rect,
    /// Side of the anchor the panel is on.
    pub side: Side,
    /// Cross-axis alignment after shifting into bounds.
    pub alignment: Alignment,
    /// Paint or hide.
    pub visibility: Visibility,
    /// Caret, when enabled.
    pub caret: Option<CaretFrame>,
    /// Corner rounding.
    pub rounding: Rounding,
    /// Depth from the stacking scope, when a label was given.
    pub z_index: Option<u32>,
    /// Theme colors.
    pub colors: SurfaceColors,
}

impl SurfaceFrame {
    pub(crate) fn new(
        placement: &Placement,
        options: &SurfaceOptions,
        z_index: Option<u32>,
        tokens: &ThemeTokens,
    ) -> Self {
        let caret = placement
            .caret_position()
            .zip(placement.caret_extent())
            .map(|(position, size)| CaretFrame {
                position,
                size,
                direction: placement.side.caret_direction(),
            });
        Self {
            rect: placement.floating_rect(),
            side: placement.side,
            alignment: placement.alignment,
            visibility: if placement.anchor_hidden {
                Visibility::Hidden
            } else {
                Visibility::Visible
            },
            caret,
            rounding: options.rounding,
            z_index,
            colors: SurfaceColors::from_tokens(tokens, options.background, options.border),
        }
    }

    /// Caret bounds in the same space as [`SurfaceFrame::rect`].
    pub fn caret_rect(&self) -> Option<Rect> {
        let caret = self.caret?;
        Some(Rect::from_origin_size(
            self.rect.origin() + caret.position.to_vec2(),
            caret.size,
        ))
    }
}
