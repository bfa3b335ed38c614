//! Terminal input mapping.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`]s,
//! using the shared canvas [`crate::types::Layout`] to turn pointer positions
//! into card indices or the restart control.

pub mod map;
pub mod pointer;

pub use memory_match_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{action_for_press, hit_test, map_mouse_event, PointerEvent, PointerTarget};
