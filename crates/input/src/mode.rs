//! Button mode selection.
//!
//! The mode decides which event family a button produces. It is chosen once,
//! when a listener or generator is built, and never changes afterwards.
//!
//! | Mode           | press                 | repeat        | release          |
//! |----------------|-----------------------|---------------|------------------|
//! | `ButtonEvent`  | button pressed (id)   | repeated (id) | released (id)    |
//! | `CommandEvent` | command               | command       | nothing          |
//! | `HomeEvent`    | generic `WADAPPS` = 1 | nothing       | nothing          |
//!
//! Button and command events reach the application; the home event is
//! consumed by the UI framework itself.

use core::str::FromStr;

use platform::config::{DEFAULT_COMMAND, HOME_VALUE};
use platform::Command;

/// Which event family a button produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonMode {
    /// Raw button events carrying the button ID.
    #[cfg_attr(feature = "serde", serde(rename = "button"))]
    ButtonEvent,
    /// A fixed command, whichever button fired.
    #[cfg_attr(feature = "serde", serde(rename = "command"))]
    CommandEvent,
    /// The framework's home event, whichever button fired.
    #[cfg_attr(feature = "serde", serde(rename = "home"))]
    HomeEvent,
}

impl ButtonMode {
    /// Mode selected at build time through the `mode-*` Cargo features.
    pub const DEFAULT: Self = if cfg!(feature = "mode-button") {
        Self::ButtonEvent
    } else if cfg!(feature = "mode-command") {
        Self::CommandEvent
    } else {
        Self::HomeEvent
    };

    /// Every mode.
    pub const ALL: [Self; 3] = [Self::ButtonEvent, Self::CommandEvent, Self::HomeEvent];

    /// Short name used on the command line and in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ButtonEvent => "button",
            Self::CommandEvent => "command",
            Self::HomeEvent => "home",
        }
    }
}

impl Default for ButtonMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl core::fmt::Display for ButtonMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMode;

impl core::fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown button mode (expected button, command or home)")
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for UnknownMode {}

impl FromStr for ButtonMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or(UnknownMode)
    }
}

/// Mode plus the fixed payloads the non-button modes send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ButtonConfig {
    /// Event family.
    pub mode: ButtonMode,
    /// Command sent in [`ButtonMode::CommandEvent`].
    pub command: Command,
    /// Payload of the home event in [`ButtonMode::HomeEvent`].
    pub home_value: i32,
}

impl ButtonConfig {
    /// Default payloads with the given mode.
    pub const fn with_mode(mode: ButtonMode) -> Self {
        Self {
            mode,
            command: DEFAULT_COMMAND,
            home_value: HOME_VALUE,
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::with_mode(ButtonMode::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("button".parse::<ButtonMode>(), Ok(ButtonMode::ButtonEvent));
        assert_eq!("command".parse::<ButtonMode>(), Ok(ButtonMode::CommandEvent));
        assert_eq!("home".parse::<ButtonMode>(), Ok(ButtonMode::HomeEvent));
        assert_eq!("Home".parse::<ButtonMode>(), Err(UnknownMode));
    }

    #[test]
    fn test_mode_name_round_trip() {
        for mode in ButtonMode::ALL {
            assert_eq!(mode.name().parse::<ButtonMode>(), Ok(mode));
        }
    }

    #[test]
    #[cfg(not(any(feature = "mode-button", feature = "mode-command")))]
    fn test_default_mode_is_home() {
        assert_eq!(ButtonMode::default(), ButtonMode::HomeEvent);
    }

    #[test]
    #[cfg(feature = "mode-button")]
    fn test_default_mode_is_button() {
        // also covers both features enabled: button wins
        assert_eq!(ButtonMode::DEFAULT, ButtonMode::ButtonEvent);
        assert_eq!(ButtonConfig::default().mode, ButtonMode::ButtonEvent);
    }

    #[test]
    #[cfg(all(feature = "mode-command", not(feature = "mode-button")))]
    fn test_default_mode_is_command() {
        assert_eq!(ButtonMode::DEFAULT, ButtonMode::CommandEvent);
        assert_eq!(ButtonConfig::default().mode, ButtonMode::CommandEvent);
    }

    #[test]
    fn test_config_defaults() {
        let config = ButtonConfig::with_mode(ButtonMode::CommandEvent);
        assert_eq!(config.command, Command::Esc);
        assert_eq!(config.home_value, 1);
    }
}
