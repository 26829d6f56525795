//! Button identity and the press/release listener capability

/// Identifier of a front-panel button.
///
/// The UI event protocol carries button IDs in a single byte, so the valid
/// range is `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct ButtonId(u8);

impl ButtonId {
    /// Create a button ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Return the raw ID.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Return the ID as a table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for ButtonId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl From<ButtonId> for u8 {
    fn from(id: ButtonId) -> Self {
        id.0
    }
}

impl TryFrom<i32> for ButtonId {
    type Error = InvalidButtonId;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| InvalidButtonId(value))
    }
}

impl core::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error returned when an integer does not fit the `0..=255` button range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidButtonId(pub i32);

impl core::fmt::Display for InvalidButtonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "button id {} is outside 0..=255", self.0)
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for InvalidButtonId {}

/// A button widget owned by the host front panel.
///
/// Listeners only ever read the identifier; creation and lifetime belong to
/// the host.
pub trait PanelButton {
    /// Identifier of this button.
    fn id(&self) -> ButtonId;
}

impl PanelButton for ButtonId {
    fn id(&self) -> ButtonId {
        *self
    }
}

/// Press/release capability the host front panel calls into.
///
/// Calls are synchronous and arrive in the order the device reports them.
/// Implementations return nothing: whatever they forward is fire-and-forget
/// from the host's point of view.
pub trait ButtonListener {
    /// The button went down.
    fn press(&mut self, button: &dyn PanelButton);

    /// The button went up.
    fn release(&mut self, button: &dyn PanelButton);
}

impl<L: ButtonListener + ?Sized> ButtonListener for &mut L {
    fn press(&mut self, button: &dyn PanelButton) {
        (**self).press(button);
    }

    fn release(&mut self, button: &dyn PanelButton) {
        (**self).release(button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_id_try_from_rejects_negative() {
        assert_eq!(ButtonId::try_from(-1), Err(InvalidButtonId(-1)));
    }

    #[test]
    fn test_button_id_try_from_rejects_above_255() {
        assert_eq!(ButtonId::try_from(256), Err(InvalidButtonId(256)));
    }

    #[test]
    fn test_button_id_try_from_accepts_bounds() {
        assert_eq!(ButtonId::try_from(0), Ok(ButtonId::new(0)));
        assert_eq!(ButtonId::try_from(255), Ok(ButtonId::new(255)));
    }

    #[test]
    fn test_button_id_is_its_own_panel_button() {
        let id = ButtonId::new(9);
        let button: &dyn PanelButton = &id;
        assert_eq!(button.id(), id);
    }
}
