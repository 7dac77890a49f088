//! Presentation state for theme, floating nav, and the detail modal.
//!
//! DESIGN
//! ======
//! These are plain state machines with no I/O. Pages render from them and
//! links encode the next state in the URL, so every transition is a pure
//! function that can be tested without a browser.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Scroll offset past which the header hides.
pub const HEADER_SCROLL_THRESHOLD_PX: u32 = 50;

/// Time an expanded floating nav stays fully visible.
pub const NAV_AUTO_CLOSE: Duration = Duration::from_millis(2000);

/// Fade-out duration before the floating nav collapses.
pub const NAV_FADE_OUT: Duration = Duration::from_millis(300);

// =============================================================================
// THEME
// =============================================================================

/// User-selected color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a stored preference. Unknown values mean "follow the system".
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }

    /// Cycle light -> dark -> system -> light.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Concrete appearance once the system preference is known.
    #[must_use]
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System if prefers_dark => ResolvedTheme::Dark,
            Self::System => ResolvedTheme::Light,
        }
    }

    /// Toggle icon for the resolved appearance.
    #[must_use]
    pub fn icon(self, prefers_dark: bool) -> &'static str {
        match self.resolve(prefers_dark) {
            ResolvedTheme::Light => "☀",
            ResolvedTheme::Dark => "☾",
        }
    }

    #[must_use]
    pub fn label(self, prefers_dark: bool) -> &'static str {
        match (self, self.resolve(prefers_dark)) {
            (Self::System, _) => "AUTO",
            (_, ResolvedTheme::Light) => "LIGHT",
            (_, ResolvedTheme::Dark) => "DARK",
        }
    }

    /// Value for the `data-theme` attribute on `<html>`.
    ///
    /// `system` leaves the attribute off so the stylesheet's
    /// `prefers-color-scheme` query decides.
    #[must_use]
    pub fn data_attribute(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some("dark"),
            Self::Light => Some("light"),
            Self::System => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

// =============================================================================
// FLOATING NAV
// =============================================================================

/// Floating navigation menu, carried between requests as `nav=open`.
///
/// An open menu closes itself after [`NAV_AUTO_CLOSE`] plus [`NAV_FADE_OUT`];
/// the renderer hands both timings to the stylesheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatingNav {
    open: bool,
}

impl FloatingNav {
    /// Build from a `?nav=` query value. Only `open` expands the menu.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        Self { open: raw == Some("open") }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `data-phase` value for the menu element.
    #[must_use]
    pub fn phase(&self) -> &'static str {
        if self.open { "expanded" } else { "collapsed" }
    }

    /// Trigger button: open when collapsed, close otherwise.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Theme or language action: keep the menu open.
    #[must_use]
    pub fn touched(self) -> Self {
        Self { open: true }
    }

    /// Section jump: close immediately.
    #[must_use]
    pub fn navigated(self) -> Self {
        Self { open: false }
    }
}

// =============================================================================
// DETAIL SELECTION
// =============================================================================

/// Which home-page entry, if any, is shown in the detail modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailSelection {
    selected: Option<usize>,
}

impl DetailSelection {
    /// Build from an `?open=` query value, ignoring indexes outside `0..len`.
    #[must_use]
    pub fn from_query(open: Option<usize>, len: usize) -> Self {
        Self { selected: open.filter(|i| *i < len) }
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Select `index`, or clear it when it is already selected.
    pub fn toggle(&mut self, index: usize) {
        self.selected = if self.is_selected(index) { None } else { Some(index) };
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// State after toggling `index`, without mutating `self`.
    #[must_use]
    pub fn toggled(mut self, index: usize) -> Self {
        self.toggle(index);
        self
    }

    #[must_use]
    pub fn closed(mut self) -> Self {
        self.close();
        self
    }
}

/// Query string encoding the home page state: `""`, `"?open=N"`,
/// `"?nav=open"` or both joined with `&`.
#[must_use]
pub fn home_query(selection: DetailSelection, nav: FloatingNav) -> String {
    let mut pairs = Vec::new();
    if let Some(index) = selection.selected() {
        pairs.push(format!("open={index}"));
    }
    if nav.is_open() {
        pairs.push("nav=open".to_owned());
    }

    if pairs.is_empty() { String::new() } else { format!("?{}", pairs.join("&")) }
}

/// Whether the top header slides away.
#[must_use]
pub fn header_hidden(scroll_y: u32, detail_open: bool) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD_PX || detail_open
}

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;
