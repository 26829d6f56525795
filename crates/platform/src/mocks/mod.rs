//! Mock implementations for testing
//!
//! This module provides mock implementations of the platform traits for use
//! in unit and integration tests.

#![cfg(any(test, feature = "std"))]

use crate::*;

/// Mock button widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockButton {
    id: ButtonId,
}

impl MockButton {
    /// Create a mock button with the given ID
    pub fn new(id: u8) -> Self {
        Self {
            id: ButtonId::new(id),
        }
    }
}

impl PanelButton for MockButton {
    fn id(&self) -> ButtonId {
        self.id
    }
}

/// Event sink that records what it receives
///
/// Capacity `N` behaves like the UI event buffer: once `N` events are held,
/// further sends fail with [`SinkError::QueueFull`]. [`reject_all`] makes
/// every send fail with [`SinkError::Rejected`].
///
/// [`reject_all`]: RecordingSink::reject_all
pub struct RecordingSink<const N: usize> {
    events: heapless::Vec<UiEvent, N>,
    rejecting: bool,
    attempts: usize,
}

impl<const N: usize> RecordingSink<N> {
    /// Create an empty sink
    pub fn new() -> Self {
        Self {
            events: heapless::Vec::new(),
            rejecting: false,
            attempts: 0,
        }
    }

    /// Events accepted so far, oldest first
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// Number of send calls, accepted or not
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Make every following send fail (or succeed again)
    pub fn reject_all(&mut self, rejecting: bool) {
        self.rejecting = rejecting;
    }

    /// Forget recorded events and attempts
    pub fn clear(&mut self) {
        self.events.clear();
        self.attempts = 0;
    }
}

impl<const N: usize> Default for RecordingSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventSink for RecordingSink<N> {
    fn send(&mut self, event: UiEvent) -> Result<(), SinkError> {
        self.attempts = self.attempts.saturating_add(1);
        if self.rejecting {
            return Err(SinkError::Rejected);
        }
        self.events.push(event).map_err(|_| SinkError::QueueFull)
    }
}
