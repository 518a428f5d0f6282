// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color scheme selection and resolved token sets.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

/// Color scheme requested by a scope.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColorScheme {
    /// Always light.
    #[default]
    Light,
    /// Always dark.
    Dark,
    /// Follow the host's `prefers-color-scheme` setting, live.
    FollowSystem,
}

/// Which of the two token sets a resolution produced.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ThemeName {
    /// Light tokens.
    LightMode,
    /// Dark tokens.
    DarkMode,
}

impl ThemeName {
    /// Stable name for the token set.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LightMode => "lightMode",
            Self::DarkMode => "darkMode",
        }
    }
}

/// Resolve a selection against the current system preference.
///
/// Pure; `prefers_dark` is only consulted for [`ColorScheme::FollowSystem`].
pub const fn resolve(selection: ColorScheme, prefers_dark: bool) -> ThemeName {
    match selection {
        ColorScheme::Light => ThemeName::LightMode,
        ColorScheme::Dark => ThemeName::DarkMode,
        ColorScheme::FollowSystem if prefers_dark => ThemeName::DarkMode,
        ColorScheme::FollowSystem => ThemeName::LightMode,
    }
}

const LIGHT: &[(&str, &str)] = &[
    ("colorRed100Hovered", "#ad081b"),
    ("colorGray0", "#fff"),
    ("colorGray50", "#fff"),
    ("colorGray100", "#efefef"),
    ("colorGray100Active", "#dadada"),
    ("colorGray200", "#767676"),
    ("colorGray300", "#111"),
    ("colorGray400", "#000"),
    ("colorTransparentGray60", "rgb(0 0 0 / 0.06)"),
    ("colorTransparentGray100", "rgb(0 0 0 / 0.1)"),
    ("colorBackgroundElevationFloating", "#fff"),
    ("colorBackgroundInfoBase", "#0074e8"),
    ("colorBackgroundWarningBase", "#e3780c"),
    ("colorBackgroundErrorBase", "#cc0000"),
];

const DARK: &[(&str, &str)] = &[
    ("colorRed100Hovered", "#cf001f"),
    ("colorGray0", "#030303"),
    ("colorGray50", "#212121"),
    ("colorGray100", "#404040"),
    ("colorGray100Active", "#666"),
    ("colorGray200", "#ababab"),
    ("colorGray300", "#efefef"),
    ("colorGray400", "#fff"),
    ("colorTransparentGray60", "rgb(250 250 250 / 0.5)"),
    ("colorTransparentGray100", "rgb(250 250 250 / 0.6)"),
    ("colorBackgroundElevationFloating", "#191919"),
    ("colorBackgroundInfoBase", "#45a3fe"),
    ("colorBackgroundWarningBase", "#ff9e3e"),
    ("colorBackgroundErrorBase", "#e60023"),
];

/// An immutable, named set of color tokens.
///
/// Token sets are never edited in place. A scope that needs different colors
/// swaps its whole `Rc<ThemeTokens>` for another one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    name: ThemeName,
    entries: Vec<(String, String)>,
}

impl ThemeTokens {
    /// Build a token set from `(token, value)` pairs. Order is preserved.
    pub fn new<I, K, V>(name: ThemeName, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name,
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The built-in light tokens.
    pub fn light() -> Self {
        Self::new(ThemeName::LightMode, LIGHT.iter().copied())
    }

    /// The built-in dark tokens.
    pub fn dark() -> Self {
        Self::new(ThemeName::DarkMode, DARK.iter().copied())
    }

    /// Which set this is.
    pub fn name(&self) -> ThemeName {
        self.name
    }

    /// Value of `token`, if present.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == token)
            .map(|(_, v)| v.as_str())
    }

    /// Tokens and values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The pair of token sets a scope chooses between.
///
/// Cloning a palette shares the underlying sets.
#[derive(Clone, Debug)]
pub struct Palette {
    light: Rc<ThemeTokens>,
    dark: Rc<ThemeTokens>,
}

impl Palette {
    /// A palette from custom light and dark sets.
    pub fn new(light: ThemeTokens, dark: ThemeTokens) -> Self {
        Self {
            light: Rc::new(light),
            dark: Rc::new(dark),
        }
    }

    /// Token set for `name`.
    pub fn tokens(&self, name: ThemeName) -> &Rc<ThemeTokens> {
        match name {
            ThemeName::LightMode => &self.light,
            ThemeName::DarkMode => &self.dark,
        }
    }

    /// Resolve `selection` and return the shared token set.
    pub fn resolve(&self, selection: ColorScheme, prefers_dark: bool) -> Rc<ThemeTokens> {
        Rc::clone(self.tokens(resolve(selection, prefers_dark)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ThemeTokens::light(), ThemeTokens::dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_selections_ignore_preference() {
        for prefers_dark in [false, true] {
            assert_eq!(resolve(ColorScheme::Light, prefers_dark), ThemeName::LightMode);
            assert_eq!(resolve(ColorScheme::Dark, prefers_dark), ThemeName::DarkMode);
        }
        assert_eq!(resolve(ColorScheme::FollowSystem, true), ThemeName::DarkMode);
        assert_eq!(resolve(ColorScheme::FollowSystem, false), ThemeName::LightMode);
    }

    #[test]
    fn repeated_resolution_shares_the_same_set() {
        let palette = Palette::default();
        let a = palette.resolve(ColorScheme::Dark, false);
        let b = palette.resolve(ColorScheme::Dark, false);
        assert!(Rc::ptr_eq(&a, &b), "resolution is idempotent");
        assert_eq!(a.name(), ThemeName::DarkMode);
    }

    #[test]
    fn built_in_sets_cover_the_same_tokens() {
        let light = ThemeTokens::light();
        let dark = ThemeTokens::dark();
        let light_keys: Vec<_> = light.iter().map(|(k, _)| k).collect();
        let dark_keys: Vec<_> = dark.iter().map(|(k, _)| k).collect();
        assert_eq!(light_keys, dark_keys);
        assert_eq!(light.get("colorGray0"), Some("#fff"));
        assert_eq!(dark.get("colorGray0"), Some("#030303"));
        assert_eq!(light.get("colorPurple"), None);
    }

    #[test]
    fn theme_names() {
        assert_eq!(ThemeName::LightMode.as_str(), "lightMode");
        assert_eq!(ThemeName::DarkMode.as_str(), "darkMode");
    }
}
