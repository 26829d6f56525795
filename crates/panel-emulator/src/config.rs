//! Panel layout and listener settings loaded from JSON
//!
//! ```json
//! {
//!   "buttons": [
//!     { "id": 0, "label": "USER" },
//!     { "id": 1, "label": "BACK" }
//!   ],
//!   "listener": { "mode": "command", "command": "back" },
//!   "queue_depth": 32
//! }
//! ```
//!
//! Every field is optional; missing ones take [`PanelConfig::default()`].

use std::path::Path;

use input::{ButtonConfig, ButtonMode, ListenerBuilder};
use platform::config::{EVENT_QUEUE_DEPTH, NUMBER_OF_BUTTONS};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::panel::FrontPanel;
use crate::queue::{EventQueue, EventReceiver};
use crate::widget::Widget;

/// Label of the single default button.
pub const DEFAULT_LABEL: &str = "USER";

/// Everything needed to assemble a [`FrontPanel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Buttons, in placement order.
    pub buttons: Vec<Widget>,
    /// Mode and payloads of the button listener.
    pub listener: ButtonConfig,
    /// Capacity of the UI event queue.
    pub queue_depth: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        // First button is plain "USER", any further ones "USER1", "USER2", ...
        let buttons = (0..=u8::MAX)
            .take(NUMBER_OF_BUTTONS)
            .map(|n| match n {
                0 => Widget::new(0, DEFAULT_LABEL),
                n => Widget::new(n, format!("{DEFAULT_LABEL}{n}")),
            })
            .collect();
        Self {
            buttons,
            listener: ButtonConfig::default(),
            queue_depth: EVENT_QUEUE_DEPTH,
        }
    }
}

impl PanelConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            buttons = config.buttons.len(),
            mode = %config.listener.mode,
            "panel config loaded"
        );
        Ok(config)
    }

    /// Replace the listener mode, keeping the payloads.
    #[must_use]
    pub fn with_mode(mut self, mode: ButtonMode) -> Self {
        self.listener.mode = mode;
        self
    }

    /// Check the layout without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_depth == 0 {
            return Err(ConfigError::ZeroQueueDepth);
        }
        // A throwaway panel applies the same rules as `build`.
        let mut panel = FrontPanel::new(ListenerBuilder::from_config(self.listener).build(Discard));
        for widget in &self.buttons {
            panel.add_button(widget.clone())?;
        }
        Ok(())
    }

    /// Assemble the panel and the receiving end of its event queue.
    pub fn build(&self) -> Result<(FrontPanel, EventReceiver), ConfigError> {
        if self.queue_depth == 0 {
            return Err(ConfigError::ZeroQueueDepth);
        }
        let (queue, receiver) = EventQueue::new(self.queue_depth);
        let listener = ListenerBuilder::from_config(self.listener).build(queue);
        let mut panel = FrontPanel::new(listener);
        for widget in &self.buttons {
            panel.add_button(widget.clone())?;
        }
        tracing::debug!(
            buttons = self.buttons.len(),
            mode = %self.listener.mode,
            queue_depth = self.queue_depth,
            "front panel ready"
        );
        Ok((panel, receiver))
    }
}

/// Sink for validation-only panels.
struct Discard;

impl platform::EventSink for Discard {
    fn send(&mut self, _event: platform::UiEvent) -> Result<(), platform::SinkError> {
        Ok(())
    }
}
