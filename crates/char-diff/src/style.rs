//! Decoration tokens for [`crate::LineRenderer`] and the built-in presets.

/// ANSI escape sequences used by [`DiffStyle::terminal`].
pub mod ansi {
    pub const BOLD_RED_ON_DEFAULT: &str = "\x1b[1;31m";
    pub const RED_ON_DEFAULT: &str = "\x1b[0;31m";
    pub const WHITE_ON_RED: &str = "\x1b[97;41m";
    pub const BOLD_GREEN_ON_DEFAULT: &str = "\x1b[1;32m";
    pub const GREEN_ON_DEFAULT: &str = "\x1b[0;32m";
    pub const WHITE_ON_GREEN: &str = "\x1b[97;42m";
    pub const RESET: &str = "\x1b[0m";
}

/// Text placed around the whole non-empty output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub begin: String,
    pub end: String,
}

impl Container {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }

    /// `<div style="white-space:pre">…</div>`
    pub fn preformatted_div() -> Self {
        Self::new(r#"<div style="white-space:pre">"#, "</div>")
    }
}

/// Begin/end strings for every decoration slot of the renderer.
///
/// "Deleted" decorates the left side (`-` lines), "inserted" the right side
/// (`+` lines). The light pair wraps text of a changed line that is itself
/// unchanged; the strong pair wraps the exact changed characters. All slots
/// default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStyle {
    pub minus_begin: String,
    pub minus_end: String,
    pub plus_begin: String,
    pub plus_end: String,
    pub deleted_light_begin: String,
    pub deleted_light_end: String,
    pub deleted_begin: String,
    pub deleted_end: String,
    pub inserted_light_begin: String,
    pub inserted_light_end: String,
    pub inserted_begin: String,
    pub inserted_end: String,
    pub container: Option<Container>,
}

impl DiffStyle {
    /// No decoration at all.
    pub fn plain() -> Self {
        Self::default()
    }

    /// ANSI colors: bold markers, red/green lines, white on red/green for
    /// the exact changes.
    pub fn terminal() -> Self {
        Self {
            minus_begin: ansi::BOLD_RED_ON_DEFAULT.into(),
            plus_begin: ansi::BOLD_GREEN_ON_DEFAULT.into(),
            deleted_begin: ansi::WHITE_ON_RED.into(),
            deleted_end: ansi::RESET.into(),
            inserted_begin: ansi::WHITE_ON_GREEN.into(),
            inserted_end: ansi::RESET.into(),
            deleted_light_begin: ansi::RED_ON_DEFAULT.into(),
            deleted_light_end: ansi::RESET.into(),
            inserted_light_begin: ansi::GREEN_ON_DEFAULT.into(),
            inserted_light_end: ansi::RESET.into(),
            ..Self::default()
        }
    }

    /// Inline-styled HTML inside a whitespace-preserving `<div>`.
    pub fn html() -> Self {
        Self {
            minus_begin: r#"<b style="color:red">"#.into(),
            minus_end: "</b>".into(),
            plus_begin: r#"<b style="color:green">"#.into(),
            plus_end: "</b>".into(),
            deleted_begin: r#"<span style="background-color:red; color:white">"#.into(),
            deleted_end: "</span>".into(),
            inserted_begin: r#"<span style="background-color:green; color:white">"#.into(),
            inserted_end: "</span>".into(),
            deleted_light_begin: r#"<span style="color:red">"#.into(),
            deleted_light_end: "</span>".into(),
            inserted_light_begin: r#"<span style="color:green">"#.into(),
            inserted_light_end: "</span>".into(),
            container: Some(Container::preformatted_div()),
        }
    }

    /// Replace the container.
    pub fn with_container(mut self, container: Option<Container>) -> Self {
        self.container = container;
        self
    }
}
