//! Desktop front-panel emulator
//!
//! Stands in for the device front panel so the button listener can be driven
//! from tests and the `panel-sim` CLI without hardware.
//!
//! ```text
//! FrontPanel::press("USER") ──► ModeListener ──► EventQueue ══► EventReceiver
//!                                                (bounded)       poll / drain / wait
//! ```
//!
//! # Example
//!
//! ```
//! use panel_emulator::PanelConfig;
//! use platform::UiEvent;
//!
//! let config = PanelConfig::from_json_str(r#"{ "listener": { "mode": "button" } }"#)?;
//! let (mut panel, mut events) = config.build()?;
//!
//! panel.click("USER")?;
//! let id = panel.resolve("USER")?.id;
//! assert_eq!(events.drain(), vec![UiEvent::ButtonPressed(id), UiEvent::ButtonPressed(id)]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod panel;
pub mod queue;
pub mod widget;

pub use config::PanelConfig;
pub use error::{ConfigError, PanelError};
pub use panel::FrontPanel;
pub use queue::{EventQueue, EventReceiver};
pub use widget::Widget;
