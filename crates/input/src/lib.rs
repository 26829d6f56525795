//! Front-panel button input
//!
//! Turns button and touch activity into UI events.
//!
//! # Layers
//!
//! ```text
//! Host front panel ──► ModeListener ────────────────────────┐
//!                                                           ▼
//! GPIO edge ──► ButtonsManager ──► ButtonsHelper ──► EventGenerator ──► EventSink
//! Touch poll ───────────────────► TouchHelper ────────┘
//! ```
//!
//! - [`listener`]: the [`ButtonListener`](platform::ButtonListener) the host
//!   front panel calls. Stateless; one [`ButtonMode`] per instance.
//! - [`generator`]: mode-aware press/repeat/release translation for board
//!   drivers, reporting whether the UI accepted each event.
//! - [`buttons`] / [`touch`]: software input state that stays consistent when
//!   the UI event buffer drops events.
//! - [`manager`]: GPIO sampling with per-button polarity.
//! - [`builder`]: fluent configuration.
//!
//! # Features
//!
//! - `mode-button` / `mode-command`: build-time default [`ButtonMode`]
//!   (home event otherwise)
//! - `defmt` / `tracing`: logging backend
//! - `serde`: deserializable [`ButtonConfig`]

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod builder;
pub mod buttons;
pub mod generator;
pub mod listener;
pub mod manager;
pub mod mode;
pub mod touch;

pub use builder::ListenerBuilder;
pub use buttons::ButtonsHelper;
pub use generator::EventGenerator;
pub use listener::ModeListener;
pub use manager::{ButtonsManager, ManagerError, Polarity};
pub use mode::{ButtonConfig, ButtonMode, UnknownMode};
pub use touch::TouchHelper;
