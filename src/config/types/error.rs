//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// A single hard validation failure.
///
/// Every variant names the offending field, index or value so the source
/// declaration can be located from the message alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("required field `{0}` is missing or empty")]
    MissingField(FieldPath),

    #[error("entry {index} of `{list}` has no `{missing}`")]
    InvalidNavItem {
        list: FieldPath,
        index: usize,
        missing: &'static str,
    },

    #[error("entry {index} of `{list}` has unsupported link '{link}'")]
    InvalidLinkForm {
        list: FieldPath,
        index: usize,
        link: String,
    },

    #[error("label '{text}' appears more than once in `{list}`")]
    DuplicateNavText { list: FieldPath, text: String },

    #[error("sidebar key '{0}' must start with '/'")]
    InvalidSidebarKey(String),

    #[error("sidebar key '{0}' is declared more than once")]
    DuplicateSidebarKey(String),
}

impl ConfigError {
    /// Field path the error points at.
    pub fn field(&self) -> FieldPath {
        match self {
            Self::MissingField(field) => field.clone(),
            Self::InvalidNavItem {
                list,
                index,
                missing,
            } => list.index(*index).field(missing),
            Self::InvalidLinkForm { list, index, .. } => list.index(*index).field("link"),
            Self::DuplicateNavText { list, .. } => list.clone(),
            Self::InvalidSidebarKey(key) | Self::DuplicateSidebarKey(key) => {
                super::FIELDS.sidebar.key(key)
            }
        }
    }

    /// Fix hint shown under the message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(_) => Some("set a non-empty string value"),
            Self::InvalidNavItem { .. } => Some("every entry needs both `text` and `link`"),
            Self::InvalidLinkForm { .. } => Some(
                "use a site path like \"/guide/\" or a URL like \"https://example.com\"",
            ),
            Self::DuplicateNavText { .. } => Some("give each entry a distinct label"),
            Self::InvalidSidebarKey(_) => Some("use a site path prefix like \"/guide/\""),
            Self::DuplicateSidebarKey(_) => Some("merge the entries under a single key"),
        }
    }
}

// ============================================================================
// Warning
// ============================================================================

/// A non-fatal finding, returned alongside a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("sidebar key '{0}' matches no internal nav link")]
    SidebarKeyNotInNav(String),

    #[error("unknown field `{0}` ignored")]
    UnknownField(String),
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// All failures and warnings of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigError>,
    warnings: Vec<Warning>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        print_warnings(&self.warnings);
    }

    /// Split into warnings on success, or return self if any error was recorded.
    pub fn into_result(self) -> Result<Vec<Warning>, Self> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self)
        }
    }
}

/// Print warnings under a single `[warning]` header.
pub(crate) fn print_warnings(warnings: &[Warning]) {
    if warnings.is_empty() {
        return;
    }
    crate::log!("warning"; "site config has {} warning(s):", warnings.len());
    for warning in warnings {
        eprintln!("- {warning}");
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            writeln!(
                f,
                "{}{}{}",
                "[".dimmed(),
                err.field().as_str().cyan(),
                "]".dimmed()
            )?;
            write!(f, "{} {}", "→".red(), err)?;
            if let Some(hint) = err.hint() {
                write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
            }
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

// ============================================================================
// LoadError
// ============================================================================

/// Failures of the text and file front-ends.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}`, expected .toml or .json")]
    UnsupportedFormat(PathBuf),

    #[error("config file `{0}` not found")]
    NotFound(PathBuf),

    // No #[from]: source() would print the report twice
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

impl From<ConfigDiagnostics> for LoadError {
    fn from(diag: ConfigDiagnostics) -> Self {
        Self::Invalid(diag)
    }
}
