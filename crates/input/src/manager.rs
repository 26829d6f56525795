//! GPIO buttons manager.
//!
//! Binds one digital input per button. On every edge interrupt (or poll) the
//! pin level is sampled, converted to pressed/released through the button's
//! [`Polarity`], and fed to the [`ButtonsHelper`].
//!
//! # Example
//!
//! ```
//! use core::convert::Infallible;
//! use embedded_hal::digital::{ErrorType, InputPin};
//! use input::{ButtonConfig, ButtonMode, ButtonsManager, EventGenerator, Polarity};
//! use platform::{ButtonId, EventSink, SinkError, UiEvent};
//!
//! struct Level(bool);
//! impl ErrorType for Level { type Error = Infallible; }
//! impl InputPin for Level {
//!     fn is_high(&mut self) -> Result<bool, Infallible> { Ok(self.0) }
//!     fn is_low(&mut self) -> Result<bool, Infallible> { Ok(!self.0) }
//! }
//!
//! struct Count(usize);
//! impl EventSink for Count {
//!     fn send(&mut self, _: UiEvent) -> Result<(), SinkError> { self.0 += 1; Ok(()) }
//! }
//!
//! let generator = EventGenerator::new(ButtonConfig::with_mode(ButtonMode::ButtonEvent), Count(0));
//! let mut manager = ButtonsManager::<_, _, 1>::new(generator);
//! let slot = manager.add(Level(true), ButtonId::new(0), Polarity::ActiveHigh).unwrap();
//! assert!(manager.on_edge(slot).unwrap());
//! assert_eq!(manager.generator().sink().0, 1);
//! ```

use embedded_hal::digital::InputPin;

use platform::{ButtonId, EventSink};

use crate::buttons::ButtonsHelper;
use crate::generator::EventGenerator;

/// Which pin level means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// High level = pressed.
    ActiveHigh,
    /// Low level = pressed (pull-up wiring).
    ActiveLow,
}

impl Polarity {
    /// Whether a pin reading high means the button is pressed.
    pub const fn is_pressed(self, high: bool) -> bool {
        match self {
            Self::ActiveHigh => high,
            Self::ActiveLow => !high,
        }
    }
}

/// Buttons manager errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerError<E> {
    /// Reading the pin failed.
    Pin(E),
    /// No button is bound to this slot.
    UnknownSlot(usize),
    /// Every slot is taken.
    Full,
    /// The ID is outside the tracked range `0..N`.
    IdOutOfRange(ButtonId),
    /// Another slot already uses this ID.
    DuplicateId(ButtonId),
}

impl<E: core::fmt::Debug> core::fmt::Display for ManagerError<E> {
    // embedded-hal pin errors only guarantee Debug.
    #[allow(clippy::use_debug)]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Button pin read failed: {e:?}"),
            Self::UnknownSlot(slot) => write!(f, "No button bound to slot {slot}"),
            Self::Full => write!(f, "All button slots are in use"),
            Self::IdOutOfRange(id) => write!(f, "Button {id} is outside the tracked range"),
            Self::DuplicateId(id) => write!(f, "Button {id} is already bound"),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl<E: core::fmt::Debug> std::error::Error for ManagerError<E> {}

struct Binding<P> {
    pin: P,
    id: ButtonId,
    polarity: Polarity,
}

/// Samples up to `N` button pins and forwards their state changes.
///
/// Button IDs must lie in `0..N`.
pub struct ButtonsManager<P, S, const N: usize> {
    bindings: heapless::Vec<Binding<P>, N>,
    helper: ButtonsHelper<N>,
    generator: EventGenerator<S>,
}

impl<P, S, const N: usize> ButtonsManager<P, S, N>
where
    P: InputPin,
    S: EventSink,
{
    /// Manager with no buttons bound, all software states released.
    pub fn new(generator: EventGenerator<S>) -> Self {
        Self {
            bindings: heapless::Vec::new(),
            helper: ButtonsHelper::new(),
            generator,
        }
    }

    /// Bind `pin` as button `id`. Returns the slot to pass to [`on_edge`].
    ///
    /// [`on_edge`]: Self::on_edge
    pub fn add(
        &mut self,
        pin: P,
        id: ButtonId,
        polarity: Polarity,
    ) -> Result<usize, ManagerError<P::Error>> {
        if id.index() >= N {
            return Err(ManagerError::IdOutOfRange(id));
        }
        if self.bindings.iter().any(|b| b.id == id) {
            return Err(ManagerError::DuplicateId(id));
        }
        let slot = self.bindings.len();
        self.bindings
            .push(Binding { pin, id, polarity })
            .map_err(|_| ManagerError::Full)?;
        Ok(slot)
    }

    /// Number of bound buttons.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no button is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Sample the pin bound to `slot` and forward the resulting state.
    ///
    /// Returns whether the button is physically pressed.
    pub fn on_edge(&mut self, slot: usize) -> Result<bool, ManagerError<P::Error>> {
        let binding = self
            .bindings
            .get_mut(slot)
            .ok_or(ManagerError::UnknownSlot(slot))?;
        let high = binding.pin.is_high().map_err(ManagerError::Pin)?;
        let pressed = binding.polarity.is_pressed(high);
        let id = binding.id;

        #[cfg(feature = "defmt")]
        defmt::trace!("button {} edge: pressed={}", id, pressed);
        #[cfg(feature = "tracing")]
        tracing::trace!(%id, pressed, "button edge");

        if pressed {
            self.helper.pressed(&mut self.generator, id);
        } else {
            self.helper.released(&mut self.generator, id);
        }
        Ok(pressed)
    }

    /// Sample every bound pin, in slot order.
    ///
    /// Called periodically while a button is held this produces repeat
    /// events. Stops at the first pin error.
    pub fn scan(&mut self) -> Result<(), ManagerError<P::Error>> {
        for slot in 0..self.bindings.len() {
            self.on_edge(slot)?;
        }
        Ok(())
    }

    /// The software button state.
    pub fn helper(&self) -> &ButtonsHelper<N> {
        &self.helper
    }

    /// The event generator.
    pub fn generator(&self) -> &EventGenerator<S> {
        &self.generator
    }

    /// Mutable access to the event generator.
    pub fn generator_mut(&mut self) -> &mut EventGenerator<S> {
        &mut self.generator
    }
}
