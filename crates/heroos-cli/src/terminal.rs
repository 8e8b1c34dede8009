//! Terminal styling and capability detection.
//!
//! This module provides ANSI escape code definitions, color detection, and
//! the glyph set used for arrows and rules so the session renders sensibly on
//! terminals without color or Unicode support.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings and item names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for separators and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for numeric values.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for successful outcomes.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow for prompts and warnings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Orange (256-color) for the banner.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for failures.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            yellow: "",
            orange: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Glyphs used for arrows and horizontal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub arrow: &'static str,
    pub rule: char,
    pub heavy_rule: char,
}

impl Glyphs {
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            arrow: "→",
            rule: '─',
            heavy_rule: '═',
        }
    }

    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            arrow: "->",
            rule: '-',
            heavy_rule: '=',
        }
    }

    #[must_use]
    pub fn detect() -> Self {
        if supports_unicode() {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }

    /// A rule of `width` characters.
    #[must_use]
    pub fn rule(&self, width: usize) -> String {
        std::iter::repeat(self.rule).take(width).collect()
    }

    #[must_use]
    pub fn heavy_rule(&self, width: usize) -> String {
        std::iter::repeat(self.heavy_rule).take(width).collect()
    }
}

/// Resolved styling for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub palette: ColorPalette,
    pub glyphs: Glyphs,
}

impl Style {
    /// No colors and ASCII glyphs; used in tests and piped output.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            palette: ColorPalette::plain(),
            glyphs: Glyphs::ascii(),
        }
    }

    #[must_use]
    pub fn detect() -> Self {
        Self {
            palette: ColorPalette::detect(),
            glyphs: Glyphs::detect(),
        }
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal supports Unicode characters.
///
/// Looks for UTF hints in `LANG` and `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    if let Ok(lang) = std::env::var("LANG") {
        if lang.to_uppercase().contains("UTF") {
            return true;
        }
    }
    if let Ok(lc_all) = std::env::var("LC_ALL") {
        if lc_all.to_uppercase().contains("UTF") {
            return true;
        }
    }
    #[cfg(windows)]
    {
        if let Ok(term) = std::env::var("TERM") {
            return !term.eq_ignore_ascii_case("dumb");
        }
        return true;
    }
    #[cfg(not(windows))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_helpers::with_env_vars;

    #[test]
    fn test_color_palette_plain() {
        let p = ColorPalette::plain();
        assert!(p.reset.is_empty());
        assert!(p.green.is_empty());
    }

    #[test]
    fn test_glyph_rules() {
        assert_eq!(Glyphs::ascii().rule(4), "----");
        assert_eq!(Glyphs::unicode().heavy_rule(2), "══");
    }

    #[test]
    fn test_supports_color_no_color_set() {
        with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
            assert!(!supports_color(), "NO_COLOR=1 should disable colors");
        });
    }

    #[test]
    fn test_supports_color_term_dumb() {
        with_env_vars(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
            assert!(!supports_color(), "TERM=dumb should disable colors");
        });
    }

    #[test]
    fn test_supports_unicode_lang_utf8() {
        with_env_vars(&[("LANG", Some("zh_TW.UTF-8")), ("LC_ALL", None)], || {
            assert!(supports_unicode());
        });
    }

    #[test]
    #[cfg(not(windows))]
    fn test_supports_unicode_no_utf_hint() {
        with_env_vars(&[("LANG", Some("C")), ("LC_ALL", None)], || {
            assert!(!supports_unicode());
        });
    }
}
