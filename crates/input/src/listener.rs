//! The front-panel button listener.
//!
//! [`ModeListener`] is what the host front panel calls when a button widget
//! changes state. It forwards each call to an [`EventSink`] as one event of
//! the family chosen by its [`ButtonMode`]:
//!
//! - press: pressed(id), the configured command, or the home event.
//! - release: pressed(id) in button mode, nothing otherwise.
//!
//! Release in button mode sends a *pressed* event keyed by the ID, the same
//! call as press.
//!
//! The listener keeps no state between calls. Sink failures are logged and
//! otherwise ignored: the host has no way to act on them.

use platform::config::HOME_GENERATOR;
use platform::{ButtonListener, EventSink, PanelButton, SinkError};

use crate::mode::{ButtonConfig, ButtonMode};

/// [`ButtonListener`] forwarding to an [`EventSink`] according to a fixed mode.
pub struct ModeListener<S> {
    config: ButtonConfig,
    sink: S,
}

impl<S: EventSink> ModeListener<S> {
    /// Create a listener with `config`, forwarding to `sink`.
    pub fn new(config: ButtonConfig, sink: S) -> Self {
        Self { config, sink }
    }

    /// Create a listener for `mode` with default payloads.
    pub fn with_mode(mode: ButtonMode, sink: S) -> Self {
        Self::new(ButtonConfig::with_mode(mode), sink)
    }

    /// The configuration this listener was built with.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// The sink events are forwarded to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the listener and return the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: EventSink> ButtonListener for ModeListener<S> {
    fn press(&mut self, button: &dyn PanelButton) {
        let result = match self.config.mode {
            ButtonMode::ButtonEvent => self.sink.send_button_pressed(button.id()),
            ButtonMode::CommandEvent => self.sink.send_command(self.config.command),
            ButtonMode::HomeEvent => self
                .sink
                .send_generic(HOME_GENERATOR, self.config.home_value),
        };
        if let Err(err) = result {
            log_dropped("press", err);
        }
    }

    fn release(&mut self, button: &dyn PanelButton) {
        let result = match self.config.mode {
            ButtonMode::ButtonEvent => self.sink.send_button_pressed(button.id()),
            // no command or home event on release
            ButtonMode::CommandEvent | ButtonMode::HomeEvent => Ok(()),
        };
        if let Err(err) = result {
            log_dropped("release", err);
        }
    }
}

fn log_dropped(action: &'static str, err: SinkError) {
    #[cfg(feature = "defmt")]
    defmt::warn!("button {}: UI event dropped: {}", action, err);
    #[cfg(feature = "tracing")]
    tracing::warn!(action, %err, "button UI event dropped");
    #[cfg(not(any(feature = "defmt", feature = "tracing")))]
    let _ = (action, err);
}
