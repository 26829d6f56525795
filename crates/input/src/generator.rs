//! Event generator for board input drivers.
//!
//! Board drivers (GPIO buttons, touch controller) report press, repeat and
//! release through [`EventGenerator`]. It maps them to UI events according to
//! the [`ButtonMode`] and, unlike the front-panel listener, reports whether
//! the UI accepted each event so the caller can keep its software state in
//! step with what the application has seen.
//!
//! The UI buffers input events in a fixed-size queue. When the queue is full
//! an event is lost; a driver that lost a press must not follow up with a
//! repeat or release for it.

use platform::config::HOME_GENERATOR;
use platform::{ButtonId, EventSink, SinkError};

use crate::mode::{ButtonConfig, ButtonMode};

/// Mode-aware translation from driver notifications to UI events.
pub struct EventGenerator<S> {
    config: ButtonConfig,
    sink: S,
}

impl<S: EventSink> EventGenerator<S> {
    /// Create a generator with `config`, pushing into `sink`.
    pub fn new(config: ButtonConfig, sink: S) -> Self {
        Self { config, sink }
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// The sink events are pushed into.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the generator and return the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // -----------------------------------------------------------------------
    // Buttons
    // -----------------------------------------------------------------------

    /// A button went down.
    pub fn button_pressed(&mut self, id: ButtonId) -> Result<(), SinkError> {
        match self.config.mode {
            ButtonMode::ButtonEvent => self.sink.send_button_pressed(id),
            ButtonMode::CommandEvent => self.sink.send_command(self.config.command),
            ButtonMode::HomeEvent => self
                .sink
                .send_generic(HOME_GENERATOR, self.config.home_value),
        }
    }

    /// A button is still held.
    ///
    /// Command mode repeats the command; home mode sends nothing and reports
    /// success.
    pub fn button_repeated(&mut self, id: ButtonId) -> Result<(), SinkError> {
        match self.config.mode {
            ButtonMode::ButtonEvent => self.sink.send_button_repeated(id),
            ButtonMode::CommandEvent => self.sink.send_command(self.config.command),
            ButtonMode::HomeEvent => Ok(()),
        }
    }

    /// A button went up.
    ///
    /// Only button mode has a release event; the others report success.
    pub fn button_released(&mut self, id: ButtonId) -> Result<(), SinkError> {
        match self.config.mode {
            ButtonMode::ButtonEvent => self.sink.send_button_released(id),
            ButtonMode::CommandEvent | ButtonMode::HomeEvent => Ok(()),
        }
    }

    // -----------------------------------------------------------------------
    // Touch
    // -----------------------------------------------------------------------

    /// Touch contact at `(x, y)`.
    pub fn touch_pressed(&mut self, x: i32, y: i32) -> Result<(), SinkError> {
        self.sink.send_touch_pressed(x, y)
    }

    /// Touch contact moved to `(x, y)`.
    pub fn touch_moved(&mut self, x: i32, y: i32) -> Result<(), SinkError> {
        self.sink.send_touch_moved(x, y)
    }

    /// Touch contact lifted.
    pub fn touch_released(&mut self) -> Result<(), SinkError> {
        self.sink.send_touch_released()
    }
}
