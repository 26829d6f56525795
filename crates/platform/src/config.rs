//! Central configuration constants
//!
//! Board and protocol values shared by the listener, the board drivers and
//! the desktop front panel. Reference these rather than repeating literals.

use crate::event::Command;

/// Generator that receives the "home" event.
///
/// This generator is reserved to the UI framework itself; applications never
/// see its events.
pub const HOME_GENERATOR: &str = "WADAPPS";

/// Payload of the "home" event.
pub const HOME_VALUE: i32 = 1;

/// Command sent in command mode unless configured otherwise.
pub const DEFAULT_COMMAND: Command = Command::Esc;

/// Number of physical buttons wired on the board.
pub const NUMBER_OF_BUTTONS: usize = 1;

/// Pixels a touch must travel after the press before a move is reported.
pub const FIRST_MOVE_PIXEL_LIMIT: u32 = 8;

/// Pixels a touch must travel after a move before the next move is reported.
pub const MOVE_PIXEL_LIMIT: u32 = 2;

/// Depth of the UI event buffer.
pub const EVENT_QUEUE_DEPTH: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_constants() {
        assert_eq!(HOME_GENERATOR, "WADAPPS");
        assert_eq!(HOME_VALUE, 1);
        assert_eq!(DEFAULT_COMMAND, Command::Esc);
    }

    #[test]
    fn test_touch_move_limits() {
        assert_eq!((FIRST_MOVE_PIXEL_LIMIT, MOVE_PIXEL_LIMIT), (8, 2));
    }
}
