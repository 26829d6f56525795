//! Front panel and configuration errors.

use std::fmt;
use std::path::PathBuf;

use platform::ButtonId;

/// Errors raised by [`FrontPanel`](crate::FrontPanel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// No widget matches the label or ID.
    UnknownButton(String),
    /// A widget with this ID already exists.
    DuplicateId(ButtonId),
    /// A widget with this label already exists.
    DuplicateLabel(String),
    /// Widget labels must not be empty.
    EmptyLabel,
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownButton(key) => write!(f, "No button named or numbered '{key}'"),
            Self::DuplicateId(id) => write!(f, "Button {id} is already on the panel"),
            Self::DuplicateLabel(label) => write!(f, "Button label '{label}' is already used"),
            Self::EmptyLabel => write!(f, "Button label is empty"),
        }
    }
}

impl std::error::Error for PanelError {}

/// Errors raised while loading a [`PanelConfig`](crate::PanelConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The JSON is malformed or does not match the schema.
    Parse(serde_json::Error),
    /// The panel description is inconsistent.
    Invalid(PanelError),
    /// The queue must hold at least one event.
    ZeroQueueDepth,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "Cannot read panel config {}", path.display()),
            Self::Parse(_) => write!(f, "Malformed panel config"),
            Self::Invalid(e) => write!(f, "Invalid panel config: {e}"),
            Self::ZeroQueueDepth => write!(f, "Invalid panel config: queue_depth must be > 0"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Invalid(e) => Some(e),
            Self::ZeroQueueDepth => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<PanelError> for ConfigError {
    fn from(e: PanelError) -> Self {
        Self::Invalid(e)
    }
}
