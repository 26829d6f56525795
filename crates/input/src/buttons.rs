//! Software button state.
//!
//! The physical state of a button and what the application has been told can
//! differ: when the UI event queue is full, a press or release is lost. The
//! helper remembers the state the application *saw* and only moves it when
//! the generator reports the event was accepted:
//!
//! - press while released → pressed event; state moves to pressed on success.
//! - press while pressed → repeat event (a lost repeat is harmless).
//! - release while pressed → release event; state moves to released on success.
//! - release while released → nothing.
//!
//! So after a lost press, the matching release is swallowed, and after a lost
//! release the next press becomes a repeat.

use platform::{ButtonId, EventSink};

use crate::generator::EventGenerator;

/// Tracks the software state of `N` buttons with IDs `0..N`.
pub struct ButtonsHelper<const N: usize> {
    pressed: [bool; N],
}

impl<const N: usize> ButtonsHelper<N> {
    /// All buttons released.
    pub const fn new() -> Self {
        Self { pressed: [false; N] }
    }

    /// Whether the application currently sees `id` as pressed.
    ///
    /// Unknown IDs read as released.
    pub fn is_pressed(&self, id: ButtonId) -> bool {
        self.pressed.get(id.index()).copied().unwrap_or(false)
    }

    /// Physical press (or a repeat tick while held).
    pub fn pressed<S: EventSink>(&mut self, generator: &mut EventGenerator<S>, id: ButtonId) {
        let Some(state) = self.pressed.get_mut(id.index()) else {
            log_unknown(id);
            return;
        };

        if *state {
            // don't care if a repeat is lost
            let _ = generator.button_repeated(id);
        } else if generator.button_pressed(id).is_ok() {
            *state = true;
        } else {
            log_lost(id, "press");
        }
    }

    /// Repeat tick while held. Handled exactly like a press so the software
    /// state is checked.
    pub fn repeated<S: EventSink>(&mut self, generator: &mut EventGenerator<S>, id: ButtonId) {
        self.pressed(generator, id);
    }

    /// Physical release.
    pub fn released<S: EventSink>(&mut self, generator: &mut EventGenerator<S>, id: ButtonId) {
        let Some(state) = self.pressed.get_mut(id.index()) else {
            log_unknown(id);
            return;
        };

        if !*state {
            return;
        }
        if generator.button_released(id).is_ok() {
            *state = false;
        } else {
            log_lost(id, "release");
        }
    }
}

impl<const N: usize> Default for ButtonsHelper<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn log_unknown(id: ButtonId) {
    #[cfg(feature = "defmt")]
    defmt::warn!("ignoring button {}: outside the tracked range", id);
    #[cfg(feature = "tracing")]
    tracing::warn!(%id, "ignoring button outside the tracked range");
    #[cfg(not(any(feature = "defmt", feature = "tracing")))]
    let _ = id;
}

fn log_lost(id: ButtonId, what: &'static str) {
    #[cfg(feature = "defmt")]
    defmt::debug!("button {} {} lost, keeping previous state", id, what);
    #[cfg(feature = "tracing")]
    tracing::debug!(%id, what, "button event lost, keeping previous state");
    #[cfg(not(any(feature = "defmt", feature = "tracing")))]
    let _ = (id, what);
}
