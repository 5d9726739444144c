//! # Event Module
//!
//! The joystick event record and the types it carries.
//!
//! This module handles:
//! - Event kinds (d-pad directions, stick movement, button presses)
//! - Modifier key masks and their text rendering
//! - Construction, validation and formatting of [`JoystickEvent`]

pub mod joystick_event;
pub mod kind;
pub mod modifiers;

pub use joystick_event::JoystickEvent;
pub use kind::{
    EventKind, ACTION_FIRST, ACTION_LAST, BUTTON_ACTION, DOWN, JOYSTICK_ACTION, LEFT, RIGHT, UP,
};
pub use modifiers::Modifiers;
