//! # Modifier Keys
//!
//! Bitmask of the auxiliary keys held while a joystick action happened.
//! Bit values follow the legacy AWT input masks.

use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JoystickEventError;

/// Modifier keys held during an event.
///
/// Unknown and negative bit patterns are stored as given; only the known
/// flags are rendered by [`Modifiers::text`].
///
/// # Examples
///
/// ```
/// use joystick_event::event::Modifiers;
///
/// let mods = Modifiers::SHIFT | Modifiers::CTRL;
/// assert_eq!(mods.text(), "Shift+Ctrl");
/// assert_eq!("shift+control".parse::<Modifiers>().unwrap(), mods);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers(i32);

/// Display order and names of the known flags.
const NAMED_FLAGS: [(Modifiers, &str); 6] = [
    (Modifiers::SHIFT, "Shift"),
    (Modifiers::CTRL, "Ctrl"),
    (Modifiers::ALT, "Alt"),
    (Modifiers::META, "Meta"),
    (Modifiers::ALT_GRAPH, "Alt Graph"),
    (Modifiers::BUTTON1, "Button1"),
];

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(1 << 1);
    pub const META: Modifiers = Modifiers(1 << 2);
    pub const ALT: Modifiers = Modifiers(1 << 3);
    /// Primary mouse button.
    pub const BUTTON1: Modifiers = Modifiers(1 << 4);
    pub const ALT_GRAPH: Modifiers = Modifiers(1 << 5);

    /// Wrap a raw mask without validation.
    #[must_use]
    pub const fn from_bits(bits: i32) -> Self {
        Modifiers(bits)
    }

    #[must_use]
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// True if every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Human-readable rendering, e.g. `Shift+Ctrl`. Empty when no known flag is set.
    #[must_use]
    pub fn text(self) -> String {
        NAMED_FLAGS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl From<i32> for Modifiers {
    fn from(bits: i32) -> Self {
        Modifiers(bits)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

impl FromStr for Modifiers {
    type Err = JoystickEventError;

    /// Parses names joined by `+`, e.g. `Shift+Ctrl`. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mods = Modifiers::NONE;
        if s.trim().is_empty() {
            return Ok(mods);
        }

        for part in s.split('+') {
            let flag = match part.trim().to_ascii_lowercase().as_str() {
                "shift" => Modifiers::SHIFT,
                "ctrl" | "control" => Modifiers::CTRL,
                "alt" => Modifiers::ALT,
                "meta" => Modifiers::META,
                "alt graph" | "altgraph" | "altgr" => Modifiers::ALT_GRAPH,
                "button1" => Modifiers::BUTTON1,
                other => {
                    return Err(JoystickEventError::InvalidArgument(format!(
                        "unknown modifier key: {:?}",
                        other
                    )))
                }
            };
            mods |= flag;
        }

        Ok(mods)
    }
}
