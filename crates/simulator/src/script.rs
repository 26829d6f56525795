//! Button actions and the script format
//!
//! One action per line: `press:<label>`, `release:<label>` or
//! `click:<label>`. Blank lines and `#` comments are ignored. Labels may also
//! be decimal button IDs.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use panel_emulator::{FrontPanel, PanelError};
use platform::ButtonId;

/// One front-panel gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Press(String),
    Release(String),
    Click(String),
}

impl Action {
    /// Perform the gesture on `panel`.
    pub fn apply(&self, panel: &mut FrontPanel) -> Result<ButtonId, PanelError> {
        match self {
            Self::Press(key) => panel.press(key),
            Self::Release(key) => panel.release(key),
            Self::Click(key) => panel.click(key),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Press(key) => write!(f, "press:{key}"),
            Self::Release(key) => write!(f, "release:{key}"),
            Self::Click(key) => write!(f, "click:{key}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadAction(String);

impl fmt::Display for BadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid action '{}': expected press:<button>, release:<button> or click:<button>",
            self.0
        )
    }
}

impl std::error::Error for BadAction {}

impl FromStr for Action {
    type Err = BadAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || BadAction(s.to_owned());
        let (verb, key) = s.split_once(':').ok_or_else(bad)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(bad());
        }
        let key = key.to_owned();
        match verb.trim() {
            "press" => Ok(Self::Press(key)),
            "release" => Ok(Self::Release(key)),
            "click" => Ok(Self::Click(key)),
            _ => Err(bad()),
        }
    }
}

/// Parse a script body.
pub fn parse(text: &str) -> Result<Vec<Action>> {
    text.lines()
        .enumerate()
        .map(|(n, line)| (n.saturating_add(1), line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| line.parse().with_context(|| format!("line {n}")))
        .collect()
}

/// Read and parse a script file.
pub fn load(path: &Path) -> Result<Vec<Action>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing script {}", path.display()))
}
