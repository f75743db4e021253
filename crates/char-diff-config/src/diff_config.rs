//! Diff configuration
//!
//! Configuration loaded from .char-diff.toml file.

use crate::ConfiguredHandler;
use anyhow::Context;
use char_diff::{
    diff_text, Container, DiffStyle, Indent, LineRenderer, MarkerHandler, OptionsError,
    RenderOptions,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from turning config text into a handler.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid render options: {0}")]
    Options(#[from] OptionsError),
}

/// Which handler and base style a config selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// ANSI-colored unified lines.
    #[default]
    Terminal,
    /// Inline-styled HTML lines.
    Html,
    /// Undecorated unified lines.
    Plain,
    /// `[-]`/`[+]`/`[=]` markers, no line layout.
    Markers,
}

/// Per-token replacements applied on top of the preset's style.
///
/// Unset fields keep the preset's value. Setting either container field
/// enables a container; the other half defaults to the preset's (or empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub minus_begin: Option<String>,
    pub minus_end: Option<String>,
    pub plus_begin: Option<String>,
    pub plus_end: Option<String>,
    pub deleted_light_begin: Option<String>,
    pub deleted_light_end: Option<String>,
    pub deleted_begin: Option<String>,
    pub deleted_end: Option<String>,
    pub inserted_light_begin: Option<String>,
    pub inserted_light_end: Option<String>,
    pub inserted_begin: Option<String>,
    pub inserted_end: Option<String>,
    pub container_begin: Option<String>,
    pub container_end: Option<String>,
}

fn replace(slot: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}

impl StyleOverrides {
    pub fn apply(&self, mut style: DiffStyle) -> DiffStyle {
        replace(&mut style.minus_begin, &self.minus_begin);
        replace(&mut style.minus_end, &self.minus_end);
        replace(&mut style.plus_begin, &self.plus_begin);
        replace(&mut style.plus_end, &self.plus_end);
        replace(&mut style.deleted_light_begin, &self.deleted_light_begin);
        replace(&mut style.deleted_light_end, &self.deleted_light_end);
        replace(&mut style.deleted_begin, &self.deleted_begin);
        replace(&mut style.deleted_end, &self.deleted_end);
        replace(&mut style.inserted_light_begin, &self.inserted_light_begin);
        replace(&mut style.inserted_light_end, &self.inserted_light_end);
        replace(&mut style.inserted_begin, &self.inserted_begin);
        replace(&mut style.inserted_end, &self.inserted_end);

        if self.container_begin.is_some() || self.container_end.is_some() {
            let mut container = style
                .container
                .take()
                .unwrap_or_else(|| Container::new("", ""));
            replace(&mut container.begin, &self.container_begin);
            replace(&mut container.end, &self.container_end);
            style.container = Some(container);
        }
        style
    }
}

/// Diff configuration loaded from .char-diff.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Indent of unchanged lines: -1 for a tab, 0..=10 for spaces
    #[serde(default = "default_indent_width")]
    pub indent_width: i32,

    /// Output preset
    #[serde(default)]
    pub preset: Preset,

    /// Token overrides on top of the preset
    #[serde(default)]
    pub style: StyleOverrides,
}

fn default_indent_width() -> i32 {
    4
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            preset: Preset::default(),
            style: StyleOverrides::default(),
        }
    }
}

impl DiffConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded diff config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default diff config");
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Render options with the configured indent; out-of-range widths are
    /// rejected rather than replaced.
    pub fn render_options(&self) -> Result<RenderOptions, ConfigError> {
        Ok(RenderOptions {
            indent: Indent::try_from(self.indent_width)?,
        })
    }

    /// The preset's style with overrides applied.
    pub fn style(&self) -> DiffStyle {
        let base = match self.preset {
            Preset::Terminal => DiffStyle::terminal(),
            Preset::Html => DiffStyle::html(),
            Preset::Plain | Preset::Markers => DiffStyle::plain(),
        };
        self.style.apply(base)
    }

    pub fn handler(&self) -> Result<ConfiguredHandler, ConfigError> {
        let handler = match self.preset {
            Preset::Markers => ConfiguredHandler::Markers(MarkerHandler::new()),
            _ => ConfiguredHandler::Lines(LineRenderer::new(self.render_options()?, self.style())),
        };
        Ok(handler)
    }

    /// Compare two strings with a fresh handler built from this config.
    pub fn diff(&self, left: &str, right: &str) -> Result<String, ConfigError> {
        let mut handler = self.handler()?;
        Ok(diff_text(left, right, &mut handler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use char_diff::style::ansi;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = DiffConfig::default();
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.preset, Preset::Terminal);
        assert_eq!(config.style, StyleOverrides::default());
        assert_eq!(config.style(), DiffStyle::terminal());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(DiffConfig::from_toml_str("").unwrap(), DiffConfig::default());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            indent_width = 2
            preset = "plain"

            [style]
            inserted_begin = "["
            inserted_end = "]"
        "#;
        let config = DiffConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.preset, Preset::Plain);
        assert_eq!(
            config.diff("abc\ndef", "abc\nd2ef").unwrap(),
            "  abc\n- def\n+ d[2]ef"
        );
    }

    #[test]
    fn test_markers_preset() {
        let config = DiffConfig::from_toml_str(r#"preset = "markers""#).unwrap();
        assert_eq!(config.diff("abc", "xyz").unwrap(), "[-]xyz[+]abc[=]");
    }

    #[test]
    fn test_terminal_preset_indent() {
        let config = DiffConfig::default();
        let out = config.diff("a", "b").unwrap();
        assert!(out.starts_with(&format!("{}-{}", ansi::BOLD_RED_ON_DEFAULT, "   ")));
    }

    #[test]
    fn test_container_override() {
        let toml = r#"
            preset = "plain"
            indent_width = 0

            [style]
            container_begin = "<pre>"
            container_end = "</pre>"
        "#;
        let config = DiffConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.diff("a", "a").unwrap(), "<pre>a</pre>");
        assert_eq!(config.diff("", "").unwrap(), "");
    }

    #[test]
    fn test_partial_container_override_keeps_preset_half() {
        let config = DiffConfig {
            preset: Preset::Html,
            style: StyleOverrides {
                container_end: Some("</div><!-- diff -->".into()),
                ..StyleOverrides::default()
            },
            ..DiffConfig::default()
        };
        let container = config.style().container.unwrap();
        assert_eq!(container.begin, Container::preformatted_div().begin);
        assert_eq!(container.end, "</div><!-- diff -->");
    }

    #[test]
    fn test_out_of_range_indent_is_an_error() {
        let config = DiffConfig::from_toml_str("indent_width = 42").unwrap();
        assert!(matches!(
            config.handler(),
            Err(ConfigError::Options(OptionsError::IndentOutOfRange(42)))
        ));
        assert!(matches!(config.diff("a", "b"), Err(ConfigError::Options(_))));
    }

    #[test]
    fn test_markers_ignore_indent() {
        let config = DiffConfig::from_toml_str("preset = \"markers\"\nindent_width = 42").unwrap();
        assert_eq!(config.diff("ab", "b").unwrap(), "[+]a[=]b");
    }

    #[test]
    fn test_unknown_preset_is_a_parse_error() {
        let err = DiffConfig::from_toml_str(r#"preset = "fancy""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".char-diff.toml");
        std::fs::write(&path, "preset = \"html\"\nindent_width = -1\n").unwrap();

        let config = DiffConfig::load_from(&path).unwrap();
        assert_eq!(config.preset, Preset::Html);
        assert_eq!(config.render_options().unwrap().indent, Indent::Tab);
    }

    #[test]
    fn test_load_from_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = DiffConfig::load_from(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "indent_width = \"wide\"").unwrap();
        let err = DiffConfig::load_from(&broken).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}
