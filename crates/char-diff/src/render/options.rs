//! Renderer options.

use thiserror::Error;

/// Errors from building render options out of raw values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("indent width {0} is out of range (expected -1 for a tab or 0..=10 spaces)")]
    IndentOutOfRange(i32),
}

/// Leading whitespace of every output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// A single tab.
    #[default]
    Tab,
    /// Up to [`Indent::MAX_SPACES`] spaces.
    Spaces(u8),
}

impl Indent {
    pub const MAX_SPACES: u8 = 10;

    /// Indent of an unchanged line.
    pub fn as_string(self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(n as usize),
        }
    }

    /// What follows a `-`/`+` marker so the content stays aligned with
    /// unchanged lines.
    pub fn marker_padding(self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat((n as usize).saturating_sub(1)),
        }
    }
}

impl TryFrom<i32> for Indent {
    type Error = OptionsError;

    /// `-1` is a tab, `0..=10` that many spaces.
    fn try_from(width: i32) -> Result<Self, Self::Error> {
        match width {
            -1 => Ok(Indent::Tab),
            0..=10 => Ok(Indent::Spaces(width as u8)),
            _ => Err(OptionsError::IndentOutOfRange(width)),
        }
    }
}

/// Layout options of a [`crate::LineRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub indent: Indent,
}

impl RenderOptions {
    /// Options with `width` spaces of indent; any width outside `0..=10`
    /// falls back to a tab.
    pub fn with_indent_width(width: i32) -> Self {
        let indent = Indent::try_from(width).unwrap_or_else(|e| {
            log::warn!("{}, using a tab", e);
            Indent::Tab
        });
        Self { indent }
    }
}
