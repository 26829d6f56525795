//! Outbound UI event protocol
//!
//! Everything the input layer produces ends up as a [`UiEvent`] pushed into an
//! [`EventSink`]. The sink models the UI framework's bounded event buffer: a
//! push can fail when the buffer is full, and drivers that track button state
//! must take that into account.

use crate::input::ButtonId;

/// UI command codes.
///
/// The discriminants are the wire codes of the UI command event generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum Command {
    /// Escape
    Esc = 0x00,
    /// Back
    Back = 0x01,
    /// Up
    Up = 0x02,
    /// Left
    Left = 0x03,
    /// Down
    Down = 0x04,
    /// Right
    Right = 0x05,
    /// Select
    Select = 0x06,
    /// Cancel
    Cancel = 0x07,
    /// Help
    Help = 0x08,
    /// Menu
    Menu = 0x09,
    /// Exit
    Exit = 0x0A,
    /// Start
    Start = 0x0B,
    /// Stop
    Stop = 0x0C,
    /// Pause
    Pause = 0x0D,
    /// Resume
    Resume = 0x0E,
    /// Copy
    Copy = 0x0F,
    /// Cut
    Cut = 0x10,
    /// Paste
    Paste = 0x11,
    /// Clockwise rotation
    Clockwise = 0x12,
    /// Anticlockwise rotation
    Anticlockwise = 0x13,
    /// Previous
    Previous = 0x14,
    /// Next
    Next = 0x15,
    /// Display
    Display = 0x16,
}

impl Command {
    /// Every command, in code order.
    pub const ALL: [Command; 23] = [
        Command::Esc,
        Command::Back,
        Command::Up,
        Command::Left,
        Command::Down,
        Command::Right,
        Command::Select,
        Command::Cancel,
        Command::Help,
        Command::Menu,
        Command::Exit,
        Command::Start,
        Command::Stop,
        Command::Pause,
        Command::Resume,
        Command::Copy,
        Command::Cut,
        Command::Paste,
        Command::Clockwise,
        Command::Anticlockwise,
        Command::Previous,
        Command::Next,
        Command::Display,
    ];

    /// Wire code of this command.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a command by wire code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Lower-case name, as used in configuration files and CLI flags.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Esc => "esc",
            Self::Back => "back",
            Self::Up => "up",
            Self::Left => "left",
            Self::Down => "down",
            Self::Right => "right",
            Self::Select => "select",
            Self::Cancel => "cancel",
            Self::Help => "help",
            Self::Menu => "menu",
            Self::Exit => "exit",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Copy => "copy",
            Self::Cut => "cut",
            Self::Paste => "paste",
            Self::Clockwise => "clockwise",
            Self::Anticlockwise => "anticlockwise",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Display => "display",
        }
    }

    /// Look up a command by its lower-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// An event handed to the UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    /// Button went down.
    ButtonPressed(ButtonId),
    /// Button is still held.
    ButtonRepeated(ButtonId),
    /// Button went up.
    ButtonReleased(ButtonId),
    /// Command event, independent of the originating button.
    Command(Command),
    /// Event addressed to a named generator with an integer payload.
    Generic {
        /// Generator name, e.g. [`HOME_GENERATOR`](crate::config::HOME_GENERATOR).
        generator: &'static str,
        /// Payload.
        value: i32,
    },
    /// Touch contact at `(x, y)`.
    TouchPressed {
        /// X coordinate in pixels.
        x: i32,
        /// Y coordinate in pixels.
        y: i32,
    },
    /// Touch contact moved to `(x, y)`.
    TouchMoved {
        /// X coordinate in pixels.
        x: i32,
        /// Y coordinate in pixels.
        y: i32,
    },
    /// Touch contact lifted.
    TouchReleased,
}

impl core::fmt::Display for UiEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ButtonPressed(id) => write!(f, "button pressed {id}"),
            Self::ButtonRepeated(id) => write!(f, "button repeated {id}"),
            Self::ButtonReleased(id) => write!(f, "button released {id}"),
            Self::Command(cmd) => write!(f, "command {cmd} (0x{:02x})", cmd.code()),
            Self::Generic { generator, value } => write!(f, "generic {generator}={value}"),
            Self::TouchPressed { x, y } => write!(f, "touch pressed ({x}, {y})"),
            Self::TouchMoved { x, y } => write!(f, "touch moved ({x}, {y})"),
            Self::TouchReleased => write!(f, "touch released"),
        }
    }
}

/// Failure to hand an event to the UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// The event buffer is full; the event was dropped.
    QueueFull,
    /// The framework refused the event (e.g. not started yet).
    Rejected,
}

impl core::fmt::Display for SinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::QueueFull => write!(f, "UI event queue is full"),
            Self::Rejected => write!(f, "UI framework rejected the event"),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for SinkError {}

/// Destination for UI events.
///
/// Only [`send`](EventSink::send) is required; the `send_*` helpers name the
/// individual entry points of the UI event protocol.
pub trait EventSink {
    /// Push one event.
    fn send(&mut self, event: UiEvent) -> Result<(), SinkError>;

    /// Send a button "pressed" event.
    fn send_button_pressed(&mut self, id: ButtonId) -> Result<(), SinkError> {
        self.send(UiEvent::ButtonPressed(id))
    }

    /// Send a button "repeated" event.
    fn send_button_repeated(&mut self, id: ButtonId) -> Result<(), SinkError> {
        self.send(UiEvent::ButtonRepeated(id))
    }

    /// Send a button "released" event.
    fn send_button_released(&mut self, id: ButtonId) -> Result<(), SinkError> {
        self.send(UiEvent::ButtonReleased(id))
    }

    /// Send a command event.
    fn send_command(&mut self, command: Command) -> Result<(), SinkError> {
        self.send(UiEvent::Command(command))
    }

    /// Send an event to a named generator.
    fn send_generic(&mut self, generator: &'static str, value: i32) -> Result<(), SinkError> {
        self.send(UiEvent::Generic { generator, value })
    }

    /// Send a touch "pressed" event.
    fn send_touch_pressed(&mut self, x: i32, y: i32) -> Result<(), SinkError> {
        self.send(UiEvent::TouchPressed { x, y })
    }

    /// Send a touch "moved" event.
    fn send_touch_moved(&mut self, x: i32, y: i32) -> Result<(), SinkError> {
        self.send(UiEvent::TouchMoved { x, y })
    }

    /// Send a touch "released" event.
    fn send_touch_released(&mut self) -> Result<(), SinkError> {
        self.send(UiEvent::TouchReleased)
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn send(&mut self, event: UiEvent) -> Result<(), SinkError> {
        (**self).send(event)
    }
}
