//! Terminal front end for the memory game.
//!
//! [`GameView`] paints a [`core::GameSnapshot`] into a [`FrameBuffer`] with no
//! I/O, and [`TerminalRenderer`] owns the real terminal and writes only the
//! cells that changed since the last frame.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, WINDOW_TITLE};
