//! Miette-based error diagnostics for CLI error presentation.
//!
//! A configuration file that fails to parse is shown with the offending
//! region labeled, instead of a bare error line.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
///
/// Displays the configuration file content with a labeled span pointing
/// to the problematic location, along with an optional help message.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(boardctl::config))]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,

    /// Source content (typically the configuration file).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error with source location.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic from a TOML parse failure on `src`.
    ///
    /// Returns `None` when the parser reported no location.
    #[must_use]
    pub fn from_toml(err: &toml::de::Error, src: &str) -> Option<Self> {
        let span = err.span()?;
        let len = span.end.saturating_sub(span.start).max(1);
        let offset = span.start.min(src.len());
        let len = len.min(src.len().saturating_sub(offset));
        Some(
            Self::new(err.message(), src, offset, len)
                .with_help("run `boardctl config init --force` to start from a fresh template"),
        )
    }
}

/// Render a config file parse failure with source context.
///
/// Falls back to `None` when the file cannot be re-read or the error has
/// no location, so the caller prints the plain message instead.
#[must_use]
pub fn render_config_error(path: &std::path::Path, err: &toml::de::Error) -> Option<String> {
    let src = std::fs::read_to_string(path).ok()?;
    let diagnostic = ConfigError::from_toml(err, &src)?;
    let report = miette::Report::new(diagnostic);
    Some(format!("{report:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_error_points_into_source() {
        let src = "[database]\nurl = \n";
        let err = toml::from_str::<toml::Value>(src).unwrap_err();

        let diagnostic = ConfigError::from_toml(&err, src).unwrap();
        let offset = diagnostic.span.offset();
        assert!(offset <= src.len());
        assert!(diagnostic.help.is_some());
    }

    #[test]
    fn render_reads_file_for_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let src = "[logging\nlevel = \"warn\"\n";
        std::fs::write(&path, src).unwrap();
        let err = toml::from_str::<toml::Value>(src).unwrap_err();

        let rendered = render_config_error(&path, &err).unwrap();
        assert!(rendered.contains("boardctl::config"));
    }
}
