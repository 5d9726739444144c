//! # Joystick Event Library
//!
//! Immutable records of joystick actions: d-pad directions, stick movement
//! and button presses.
//!
//! This library provides the [`JoystickEvent`](event::JoystickEvent) value type
//! handed from an input-detection layer to event consumers, plus a JSON Lines
//! record format and an inspector for captured event logs.

pub mod config;
pub mod error;
pub mod event;
pub mod inspect;
pub mod record;
