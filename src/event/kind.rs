//! # Event Kinds
//!
//! The discriminant carried by every [`JoystickEvent`](super::JoystickEvent).
//!
//! | Code | Kind | Name |
//! |------|------|------|
//! | 0 | [`EventKind::Up`] | `UP` |
//! | 1 | [`EventKind::Right`] | `RIGHT` |
//! | 2 | [`EventKind::Down`] | `DOWN` |
//! | 3 | [`EventKind::Left`] | `LEFT` |
//! | 4 | [`EventKind::JoystickAction`] | `JOYSTICK_ACTION` |
//! | 5 | [`EventKind::ButtonAction`] | `BUTTON_ACTION` |
//!
//! Codes are mutually exclusive. They are never OR-ed together.

use serde::{Deserialize, Serialize};

use crate::error::{JoystickEventError, Result};

/// Direction pressed up.
pub const UP: i32 = 0;
/// Direction pressed right.
pub const RIGHT: i32 = 1;
/// Direction pressed down.
pub const DOWN: i32 = 2;
/// Direction pressed left.
pub const LEFT: i32 = 3;
/// Stick (axis) movement.
pub const JOYSTICK_ACTION: i32 = 4;
/// Button press.
pub const BUTTON_ACTION: i32 = 5;

/// First valid event code.
pub const ACTION_FIRST: i32 = UP;
/// Last valid event code.
pub const ACTION_LAST: i32 = BUTTON_ACTION;

/// Name rendered for codes outside the valid range.
pub const UNKNOWN_TYPE: &str = "unknown type";

/// Kind of joystick action an event represents.
///
/// # Examples
///
/// ```
/// use joystick_event::event::EventKind;
///
/// assert_eq!(EventKind::from(5), EventKind::ButtonAction);
/// assert_eq!(EventKind::from(99), EventKind::Unknown(99));
/// assert!(EventKind::from_code(99).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum EventKind {
    Up,
    Right,
    Down,
    Left,
    JoystickAction,
    ButtonAction,
    /// A code this crate does not recognize, kept verbatim.
    Unknown(i32),
}

impl EventKind {
    /// Strict conversion from a raw code.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRangeDiscriminant` if `code` is not in
    /// `ACTION_FIRST..=ACTION_LAST`.
    pub fn from_code(code: i32) -> Result<Self> {
        match Self::from(code) {
            EventKind::Unknown(code) => Err(JoystickEventError::OutOfRangeDiscriminant(code)),
            kind => Ok(kind),
        }
    }

    /// Raw integer code of this kind.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            EventKind::Up => UP,
            EventKind::Right => RIGHT,
            EventKind::Down => DOWN,
            EventKind::Left => LEFT,
            EventKind::JoystickAction => JOYSTICK_ACTION,
            EventKind::ButtonAction => BUTTON_ACTION,
            EventKind::Unknown(code) => code,
        }
    }

    /// Symbolic name, or [`UNKNOWN_TYPE`] for unrecognized codes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Up => "UP",
            EventKind::Right => "RIGHT",
            EventKind::Down => "DOWN",
            EventKind::Left => "LEFT",
            EventKind::JoystickAction => "JOYSTICK_ACTION",
            EventKind::ButtonAction => "BUTTON_ACTION",
            EventKind::Unknown(_) => UNKNOWN_TYPE,
        }
    }

    /// True for the four d-pad directions.
    #[must_use]
    pub const fn is_direction(self) -> bool {
        matches!(
            self,
            EventKind::Up | EventKind::Right | EventKind::Down | EventKind::Left
        )
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, EventKind::Unknown(_))
    }
}

impl From<i32> for EventKind {
    fn from(code: i32) -> Self {
        match code {
            UP => EventKind::Up,
            RIGHT => EventKind::Right,
            DOWN => EventKind::Down,
            LEFT => EventKind::Left,
            JOYSTICK_ACTION => EventKind::JoystickAction,
            BUTTON_ACTION => EventKind::ButtonAction,
            other => EventKind::Unknown(other),
        }
    }
}

impl From<EventKind> for i32 {
    fn from(kind: EventKind) -> Self {
        kind.code()
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
