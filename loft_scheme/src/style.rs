// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stylesheet generation: tokens become CSS custom properties.

use alloc::format;
use alloc::string::String;

use crate::error::SchemeError;
use crate::tokens::{ColorScheme, Palette, ThemeName, ThemeTokens};

/// Prefix for generated custom properties: `colorGray0` becomes `--loft-colorGray0`.
pub const PROPERTY_PREFIX: &str = "--loft-";

/// Selector a scope's stylesheet targets.
///
/// Without an id this is `:root`. With one, it is a class on the scope's own
/// subtree.
///
/// # Errors
///
/// Returns [`SchemeError::InvalidScopeId`] when `scope_id` is empty or contains
/// characters other than ASCII alphanumerics, `-` and `_`.
pub fn selector(scope_id: Option<&str>) -> Result<String, SchemeError> {
    match scope_id {
        None => Ok(String::from(":root")),
        Some(id) => Ok(format!(".{}", class_name(id)?)),
    }
}

/// Class name placed on a narrowly scoped provider's subtree.
///
/// # Errors
///
/// Same as [`selector`].
pub fn class_name(scope_id: &str) -> Result<String, SchemeError> {
    let valid = !scope_id.is_empty()
        && scope_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(SchemeError::InvalidScopeId {
            id: scope_id.into(),
        });
    }
    Ok(format!("__loftTheme{scope_id}"))
}

fn write_block(out: &mut String, selector: &str, tokens: &ThemeTokens, indent: &str) {
    out.push_str(&format!("{indent}{selector} {{\n"));
    for (token, value) in tokens.iter() {
        out.push_str(&format!("{indent}  {PROPERTY_PREFIX}{token}: {value};\n"));
    }
    out.push_str(indent);
    out.push_str("}\n");
}

/// Build the stylesheet a scope injects.
///
/// Fixed selections emit one block with `tokens`. [`ColorScheme::FollowSystem`]
/// emits the light set plus the dark set under a `prefers-color-scheme` media
/// query, so the page is correct before any listener has fired.
pub fn stylesheet(
    selector: &str,
    selection: ColorScheme,
    tokens: &ThemeTokens,
    palette: &Palette,
) -> String {
    let mut out = String::new();
    match selection {
        ColorScheme::Light | ColorScheme::Dark => write_block(&mut out, selector, tokens, ""),
        ColorScheme::FollowSystem => {
            write_block(
                &mut out,
                selector,
                palette.tokens(ThemeName::LightMode),
                "",
            );
            out.push_str("@media (prefers-color-scheme: dark) {\n");
            write_block(&mut out, selector, palette.tokens(ThemeName::DarkMode), "  ");
            out.push_str("}\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_and_scoped_selectors() {
        assert_eq!(selector(None).unwrap(), ":root");
        assert_eq!(selector(Some("docs-1")).unwrap(), ".__loftThemedocs-1");
        assert!(selector(Some("")).is_err());
        assert!(selector(Some("a b")).is_err());
        assert!(class_name("x{}").is_err());
    }

    #[test]
    fn fixed_selection_emits_one_block() {
        let palette = Palette::default();
        let css = stylesheet(
            ":root",
            ColorScheme::Dark,
            palette.tokens(ThemeName::DarkMode),
            &palette,
        );
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --loft-colorGray0: #030303;\n"));
        assert!(!css.contains("@media"));
    }

    #[test]
    fn follow_system_emits_media_query() {
        let palette = Palette::default();
        let css = stylesheet(
            ".__loftThemex",
            ColorScheme::FollowSystem,
            palette.tokens(ThemeName::LightMode),
            &palette,
        );
        let (light, dark) = css.split_once("@media (prefers-color-scheme: dark) {").unwrap();
        assert!(light.contains("--loft-colorGray0: #fff;"));
        assert!(dark.contains("  .__loftThemex {\n"));
        assert!(dark.contains("    --loft-colorGray0: #030303;\n"));
    }
}
