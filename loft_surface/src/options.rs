// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-surface configuration.

use alloc::string::String;

use loft_placement::Direction;

/// Caret length along the panel edge, in pixels.
pub const CARET_WIDTH: f64 = 24.0;
/// Caret depth away from the panel edge, in pixels.
pub const CARET_HEIGHT: f64 = 12.0;

/// Corner rounding of the panel.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Rounding {
    /// Square corners.
    #[default]
    None,
    /// Rounding step 2.
    Two,
    /// Rounding step 4.
    Four,
}

impl Rounding {
    /// Corner radius in pixels. One rounding step is four pixels.
    pub const fn radius(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Two => 8.0,
            Self::Four => 16.0,
        }
    }
}

/// Panel and caret fill.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BackgroundColor {
    /// Informational blue.
    Blue,
    /// Dark gray, for high-contrast tips.
    DarkGray,
    /// Warning orange.
    Orange,
    /// Error red.
    Red,
    /// The elevated surface color of the theme.
    #[default]
    White,
}

impl BackgroundColor {
    /// Theme token holding this color.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Blue => "colorBackgroundInfoBase",
            Self::DarkGray => "colorGray300",
            Self::Orange => "colorBackgroundWarningBase",
            Self::Red => "colorBackgroundErrorBase",
            Self::White => "colorBackgroundElevationFloating",
        }
    }
}

/// Accessibility role announced for the panel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    /// A modal or non-modal dialog.
    Dialog,
    /// A list of selectable options.
    Listbox,
    /// A menu of actions.
    Menu,
    /// Supplementary text.
    Tooltip,
}

impl Role {
    /// The ARIA role string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::Listbox => "listbox",
            Self::Menu => "menu",
            Self::Tooltip => "tooltip",
        }
    }
}

/// Options for a [`FloatingSurface`](crate::FloatingSurface).
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceOptions {
    /// Preferred side of the anchor. Defaults to [`Direction::Up`].
    pub ideal_direction: Direction,
    /// Draw a caret pointing at the anchor.
    pub caret: bool,
    /// Corner rounding.
    pub rounding: Rounding,
    /// Panel and caret fill.
    pub background: BackgroundColor,
    /// Draw a border around the panel.
    pub border: bool,
    /// Move focus into the panel once it is mounted.
    pub should_focus: bool,
    /// Fixed panel width, replacing the measured content width.
    pub width: Option<f64>,
    /// Stacking label whose depth becomes the panel's z-index.
    pub stacking_label: Option<String>,
    /// Accessibility role.
    pub role: Option<Role>,
    /// Accessible name for the panel.
    pub accessibility_label: Option<String>,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            ideal_direction: Direction::Up,
            caret: true,
            rounding: Rounding::None,
            background: BackgroundColor::White,
            border: true,
            should_focus: true,
            width: None,
            stacking_label: None,
            role: None,
            accessibility_label: None,
        }
    }
}

impl SurfaceOptions {
    /// Set the preferred direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.ideal_direction = direction;
        self
    }

    /// Enable or disable the caret.
    #[must_use]
    pub fn with_caret(mut self, caret: bool) -> Self {
        self.caret = caret;
        self
    }

    /// Set corner rounding.
    #[must_use]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set the panel fill.
    #[must_use]
    pub fn with_background(mut self, background: BackgroundColor) -> Self {
        self.background = background;
        self
    }

    /// Enable or disable the border.
    #[must_use]
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Enable or disable focusing the panel on mount.
    #[must_use]
    pub fn with_focus(mut self, should_focus: bool) -> Self {
        self.should_focus = should_focus;
        self
    }

    /// Fix the panel width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Take the z-index from `label` in the active stacking scope.
    #[must_use]
    pub fn with_stacking_label(mut self, label: impl Into<String>) -> Self {
        self.stacking_label = Some(label.into());
        self
    }

    /// Set the accessibility role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }
}
