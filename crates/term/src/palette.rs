//! Named colors of the game.

use crate::fb::Rgb;

/// Board background (light blue).
pub const BACKGROUND: Rgb = Rgb::new(173, 216, 230);
/// Header band (sky blue).
pub const HEADER: Rgb = Rgb::new(135, 206, 250);
/// Timer and default text.
pub const TEXT: Rgb = Rgb::new(0, 0, 0);
pub const CARD_BORDER: Rgb = Rgb::new(0, 0, 0);
/// Face-down card fill (green).
pub const CARD_BACK: Rgb = Rgb::new(50, 205, 50);
/// "You Win!" banner (purple).
pub const WIN: Rgb = Rgb::new(128, 0, 128);
/// "Time's Up!" banner (red).
pub const LOSS: Rgb = Rgb::new(255, 0, 0);
pub const BUTTON: Rgb = Rgb::new(30, 144, 255);
pub const BUTTON_HOVER: Rgb = Rgb::new(65, 105, 225);
pub const BUTTON_SHADOW: Rgb = Rgb::new(0, 0, 139);
pub const BUTTON_TEXT: Rgb = Rgb::new(255, 255, 255);
