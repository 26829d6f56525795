//! Shared input abstractions for the front-panel button pipeline
//!
//! This crate holds the types every other layer speaks: the button identity,
//! the press/release listener capability and the outbound UI event protocol.
//! It is `no_std` so the same definitions serve the board-side drivers and the
//! desktop front-panel emulator.
//!
//! # Architecture Layers
//!
//! ```text
//! Host front panel (panel-emulator) / GPIO drivers (input::manager)
//!         ↓
//! Listener + helpers (input crate)
//!         ↓
//! Platform traits (this crate)
//!         ↓
//! UI event queue (EventSink implementation)
//! ```
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls and the [`mocks`] module
//! - `serde`: `Serialize`/`Deserialize` on configuration-facing types
//! - `defmt`: `defmt::Format` derives for board logging
//!
//! # Example
//!
//! ```
//! use platform::{ButtonId, EventSink, SinkError, UiEvent};
//!
//! struct Last(Option<UiEvent>);
//!
//! impl EventSink for Last {
//!     fn send(&mut self, event: UiEvent) -> Result<(), SinkError> {
//!         self.0 = Some(event);
//!         Ok(())
//!     }
//! }
//!
//! let mut sink = Last(None);
//! sink.send_button_pressed(ButtonId::new(3)).unwrap();
//! assert_eq!(sink.0, Some(UiEvent::ButtonPressed(ButtonId::new(3))));
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)]
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod event;
pub mod input;
pub mod mocks;

pub use event::{Command, EventSink, SinkError, UiEvent};
pub use input::{ButtonId, ButtonListener, InvalidButtonId, PanelButton};
