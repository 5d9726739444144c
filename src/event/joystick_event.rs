//! # Joystick Event
//!
//! The immutable record produced once per observed joystick action.

use tracing::debug;

use super::kind::EventKind;
use super::modifiers::Modifiers;
use crate::error::{JoystickEventError, Result};

/// A single joystick action: a direction press, stick movement or button press.
///
/// The event is a value: once built nothing can change it, and two events
/// built from equal arguments compare equal. It is `Send + Sync` whenever the
/// source type is, so it can be handed to any number of readers.
///
/// # Examples
///
/// ```
/// use joystick_event::event::{EventKind, JoystickEvent, Modifiers};
///
/// let event = JoystickEvent::with_when(
///     "pad0",
///     EventKind::ButtonAction,
///     Some("fire".to_string()),
///     1000,
///     Modifiers::NONE,
/// );
/// assert_eq!(event.action_command(), Some("fire"));
/// assert_eq!(event.describe(), "BUTTON_ACTION,cmd=fire,when=1000,modifiers=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoystickEvent<S> {
    source: S,
    id: EventKind,
    action_command: Option<String>,
    when: i64,
    modifiers: Modifiers,
}

impl<S> JoystickEvent<S> {
    /// Builds an event with every field given.
    ///
    /// Non-positive `when` values and negative modifier masks are accepted;
    /// keeping them meaningful is up to the caller.
    #[must_use]
    pub fn with_when(
        source: S,
        id: EventKind,
        action_command: Option<String>,
        when: i64,
        modifiers: Modifiers,
    ) -> Self {
        Self {
            source,
            id,
            action_command,
            when,
            modifiers,
        }
    }

    /// Builds an event with `when = 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use joystick_event::event::{EventKind, JoystickEvent, Modifiers};
    ///
    /// let event = JoystickEvent::new("pad0", EventKind::Up, None, Modifiers::SHIFT);
    /// assert_eq!(event.when(), 0);
    /// ```
    #[must_use]
    pub fn new(
        source: S,
        id: EventKind,
        action_command: Option<String>,
        modifiers: Modifiers,
    ) -> Self {
        Self::with_when(source, id, action_command, 0, modifiers)
    }

    /// Builds an event from raw, unchecked values.
    ///
    /// This is the entry point for input layers that hold an optional source
    /// and a bare integer code.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `source` is `None`
    /// - `OutOfRangeDiscriminant` if `id` is not a defined event code
    ///
    /// The source is checked first.
    ///
    /// # Examples
    ///
    /// ```
    /// use joystick_event::event::{JoystickEvent, BUTTON_ACTION};
    ///
    /// assert!(JoystickEvent::try_new(Some("pad0"), BUTTON_ACTION, None, 10, 0).is_ok());
    /// assert!(JoystickEvent::<&str>::try_new(None, BUTTON_ACTION, None, 10, 0).is_err());
    /// assert!(JoystickEvent::try_new(Some("pad0"), 99, None, 10, 0).is_err());
    /// ```
    pub fn try_new(
        source: Option<S>,
        id: i32,
        action_command: Option<String>,
        when: i64,
        modifiers: i32,
    ) -> Result<Self> {
        let source = source.ok_or_else(|| {
            debug!("Rejected joystick event {}: missing source", id);
            JoystickEventError::InvalidArgument("event source must not be null".to_string())
        })?;

        let kind = EventKind::from_code(id).map_err(|e| {
            debug!("Rejected joystick event: {}", e);
            e
        })?;

        if when <= 0 {
            debug!("Joystick event {} built with non-positive timestamp {}", kind, when);
        }
        if modifiers < 0 {
            debug!("Joystick event {} built with negative modifiers {}", kind, modifiers);
        }

        Ok(Self::with_when(
            source,
            kind,
            action_command,
            when,
            Modifiers::from_bits(modifiers),
        ))
    }

    /// The object that originated the event.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the event and returns its source.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    /// The kind of action, i.e. the event id.
    #[must_use]
    pub fn id(&self) -> EventKind {
        self.id
    }

    /// The command label distinguishing among commands from the same source.
    #[must_use]
    pub fn action_command(&self) -> Option<&str> {
        self.action_command.as_deref()
    }

    /// Timestamp of the action, in the producer's time units.
    #[must_use]
    pub fn when(&self) -> i64 {
        self.when
    }

    /// Modifier keys held during the action.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Log-friendly summary, e.g. `BUTTON_ACTION,cmd=fire,when=1000,modifiers=Shift`.
    ///
    /// Unrecognized ids render as `unknown type`. An absent command renders
    /// as an empty string.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{},cmd={},when={},modifiers={}",
            self.id.name(),
            self.action_command.as_deref().unwrap_or(""),
            self.when,
            self.modifiers.text()
        )
    }
}

impl<S> std::fmt::Display for JoystickEvent<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::kind::{ACTION_FIRST, ACTION_LAST, BUTTON_ACTION, UNKNOWN_TYPE};
    use std::sync::Arc;

    #[derive(Debug, PartialEq, Eq, Hash)]
    struct Pad {
        index: u32,
    }

    fn fire_event() -> JoystickEvent<&'static str> {
        JoystickEvent::with_when(
            "pad0",
            EventKind::ButtonAction,
            Some("fire".to_string()),
            1000,
            Modifiers::NONE,
        )
    }

    #[test]
    fn test_accessors_return_inputs() {
        for code in ACTION_FIRST..=ACTION_LAST {
            let kind = EventKind::from_code(code).unwrap();
            let mods = Modifiers::SHIFT | Modifiers::ALT;
            let event =
                JoystickEvent::with_when(Pad { index: 3 }, kind, Some("cmd".to_string()), 42, mods);

            assert_eq!(event.source(), &Pad { index: 3 });
            assert_eq!(event.id(), kind);
            assert_eq!(event.action_command(), Some("cmd"));
            assert_eq!(event.when(), 42);
            assert_eq!(event.modifiers(), mods);
        }
    }

    #[test]
    fn test_try_new_accessors_return_inputs() {
        for code in ACTION_FIRST..=ACTION_LAST {
            let event = JoystickEvent::try_new(Some(7u32), code, None, i64::MAX, 9).unwrap();
            assert_eq!(*event.source(), 7);
            assert_eq!(event.id().code(), code);
            assert_eq!(event.action_command(), None);
            assert_eq!(event.when(), i64::MAX);
            assert_eq!(event.modifiers().bits(), 9);
        }
    }

    #[test]
    fn test_try_new_missing_source_is_invalid_argument() {
        let commands = [None, Some(String::new()), Some("fire".to_string())];
        for id in [-1, ACTION_FIRST, BUTTON_ACTION, 99] {
            for command in &commands {
                for when in [i64::MIN, 0, 1000] {
                    for modifiers in [-1, 0, 3] {
                        let result =
                            JoystickEvent::<u32>::try_new(None, id, command.clone(), when, modifiers);
                        assert!(
                            matches!(result, Err(JoystickEventError::InvalidArgument(_))),
                            "id={} when={} modifiers={}",
                            id,
                            when,
                            modifiers
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_try_new_out_of_range_id() {
        let result = JoystickEvent::try_new(Some("pad0"), 99, None, 1, 0);
        assert!(matches!(
            result,
            Err(JoystickEventError::OutOfRangeDiscriminant(99))
        ));
    }

    #[test]
    fn test_discouraged_values_are_accepted() {
        let event = JoystickEvent::try_new(Some("pad0"), BUTTON_ACTION, None, -5, -1).unwrap();
        assert_eq!(event.when(), -5);
        assert_eq!(event.modifiers().bits(), -1);
    }

    #[test]
    fn test_empty_command_is_legal() {
        let event = JoystickEvent::new("pad0", EventKind::Down, Some(String::new()), Modifiers::NONE);
        assert_eq!(event.action_command(), Some(""));
    }

    #[test]
    fn test_new_defaults_when_to_zero() {
        let full = JoystickEvent::with_when(
            "pad0",
            EventKind::Left,
            Some("strafe".to_string()),
            555,
            Modifiers::CTRL,
        );
        let short = JoystickEvent::new("pad0", EventKind::Left, Some("strafe".to_string()), Modifiers::CTRL);

        assert_eq!(short.when(), 0);
        assert_eq!(short.source(), full.source());
        assert_eq!(short.id(), full.id());
        assert_eq!(short.action_command(), full.action_command());
        assert_eq!(short.modifiers(), full.modifiers());
        assert_ne!(short, full);
    }

    #[test]
    fn test_describe_button_action() {
        let text = fire_event().describe();
        assert!(text.contains("fire"));
        assert!(text.contains("1000"));
        assert!(text.contains("BUTTON_ACTION"));
        assert!(!text.contains(UNKNOWN_TYPE));
    }

    #[test]
    fn test_describe_unknown_id() {
        let event = JoystickEvent::new("pad0", EventKind::from(99), None, Modifiers::NONE);
        assert_eq!(event.describe(), "unknown type,cmd=,when=0,modifiers=");
    }

    #[test]
    fn test_describe_modifiers() {
        let event = JoystickEvent::with_when(
            "pad0",
            EventKind::JoystickAction,
            Some("look".to_string()),
            12,
            Modifiers::SHIFT | Modifiers::CTRL,
        );
        assert_eq!(
            event.describe(),
            "JOYSTICK_ACTION,cmd=look,when=12,modifiers=Shift+Ctrl"
        );
        assert_eq!(event.to_string(), event.describe());
    }

    #[test]
    fn test_value_equality() {
        let a = fire_event();
        let b = fire_event();
        assert_eq!(a, b);

        // A clone moved into another owner still compares equal
        let moved = std::thread::spawn({
            let a = a.clone();
            move || a
        })
        .join()
        .unwrap();
        assert_eq!(moved, b);

        let c = JoystickEvent::with_when("pad1", a.id(), Some("fire".to_string()), 1000, a.modifiers());
        assert_ne!(a, c);
    }

    #[test]
    fn test_equal_events_hash_equally() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(fire_event());
        set.insert(fire_event());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let event = Arc::new(fire_event());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let event = Arc::clone(&event);
                std::thread::spawn(move || event.describe())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), fire_event().describe());
        }
    }

    #[test]
    fn test_into_source() {
        let event = JoystickEvent::new(Pad { index: 1 }, EventKind::Up, None, Modifiers::NONE);
        assert_eq!(event.into_source(), Pad { index: 1 });
    }
}
