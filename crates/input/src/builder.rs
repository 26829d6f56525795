//! Fluent builder API for button listener configuration.
//!
//! # Usage
//!
//! ```
//! use input::{ButtonMode, ListenerBuilder};
//! use platform::{ButtonListener, ButtonId, Command, EventSink, SinkError, UiEvent};
//!
//! struct Last(Option<UiEvent>);
//! impl EventSink for Last {
//!     fn send(&mut self, event: UiEvent) -> Result<(), SinkError> {
//!         self.0 = Some(event);
//!         Ok(())
//!     }
//! }
//!
//! let mut listener = ListenerBuilder::new()
//!     .mode(ButtonMode::CommandEvent)
//!     .command(Command::Back)
//!     .build(Last(None));
//!
//! listener.press(&ButtonId::new(0));
//! assert_eq!(listener.sink().0, Some(UiEvent::Command(Command::Back)));
//! ```

use platform::{Command, EventSink};

use crate::generator::EventGenerator;
use crate::listener::ModeListener;
use crate::mode::{ButtonConfig, ButtonMode};

/// Fluent builder for [`ModeListener`] and [`EventGenerator`].
///
/// Starts from [`ButtonConfig::default()`], i.e. the build-time mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListenerBuilder {
    config: ButtonConfig,
}

impl ListenerBuilder {
    /// Start from the build-time defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ButtonConfig) -> Self {
        Self { config }
    }

    /// Select the event family.
    #[must_use]
    pub fn mode(mut self, mode: ButtonMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Command sent in command mode.
    #[must_use]
    pub fn command(mut self, command: Command) -> Self {
        self.config.command = command;
        self
    }

    /// Payload of the home event in home mode.
    #[must_use]
    pub fn home_value(mut self, value: i32) -> Self {
        self.config.home_value = value;
        self
    }

    /// The configuration built so far.
    pub fn config(&self) -> ButtonConfig {
        self.config
    }

    /// Build the front-panel listener.
    pub fn build<S: EventSink>(self, sink: S) -> ModeListener<S> {
        ModeListener::new(self.config, sink)
    }

    /// Build the board-side event generator.
    pub fn build_generator<S: EventSink>(self, sink: S) -> EventGenerator<S> {
        EventGenerator::new(self.config, sink)
    }
}
