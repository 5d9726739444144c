//! # Event Records
//!
//! JSON Lines interchange format for joystick events.
//!
//! Each line holds the raw constructor arguments of one event:
//!
//! ```text
//! {"source":"pad0","id":5,"command":"fire","when":1000,"modifiers":0}
//! ```
//!
//! `when` and `modifiers` default to `0` when omitted. `source` may be
//! omitted on input but an event is only built once a source is known.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::{JoystickEventError, Result};
use crate::event::{EventKind, JoystickEvent};

/// One serialized event, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub id: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default)]
    pub when: i64,

    #[serde(default)]
    pub modifiers: i32,
}

impl EventRecord {
    /// Parse a single JSON line
    ///
    /// # Errors
    ///
    /// Returns `Record` if the line is not a valid event object.
    ///
    /// # Examples
    ///
    /// ```
    /// use joystick_event::record::EventRecord;
    ///
    /// let record = EventRecord::parse_line(r#"{"source":"pad0","id":5,"command":"fire"}"#)?;
    /// assert_eq!(record.id, 5);
    /// assert_eq!(record.when, 0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_line(line: &str) -> Result<Self> {
        serde_json::from_str(line.trim())
            .map_err(|e| JoystickEventError::Record(format!("{}: {}", e, line.trim())))
    }

    /// Capture an existing event, rendering its source with `Display`
    pub fn from_event<S: Display>(event: &JoystickEvent<S>) -> Self {
        Self {
            source: Some(event.source().to_string()),
            id: event.id().code(),
            command: event.action_command().map(str::to_string),
            when: event.when(),
            modifiers: event.modifiers().bits(),
        }
    }

    /// Serialize to one compact JSON line (no trailing newline)
    pub fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build the event this record describes
    ///
    /// With `strict` the record goes through [`JoystickEvent::try_new`], so an
    /// undefined id is rejected. Otherwise unknown ids are kept as
    /// [`EventKind::Unknown`]. A missing source is rejected either way.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the record has no source
    /// - `OutOfRangeDiscriminant` if `strict` and the id is undefined
    pub fn into_event(self, strict: bool) -> Result<JoystickEvent<String>> {
        if strict {
            return JoystickEvent::try_new(
                self.source,
                self.id,
                self.command,
                self.when,
                self.modifiers,
            );
        }

        let source = self.source.ok_or_else(|| {
            JoystickEventError::InvalidArgument("event source must not be null".to_string())
        })?;

        Ok(JoystickEvent::with_when(
            source,
            EventKind::from(self.id),
            self.command,
            self.when,
            self.modifiers.into(),
        ))
    }
}

/// Interpret `when` as Unix epoch milliseconds
///
/// Returns `None` for non-positive or unrepresentable values.
pub fn timestamp_utc(when: i64) -> Option<DateTime<Utc>> {
    if when <= 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(when)
}
