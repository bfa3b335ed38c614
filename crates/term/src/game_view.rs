//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette;
use crate::types::{CardIndex, CardView, Face, Layout, Outcome, Point};

const RESTART_LABEL: &str = "Play Again";
const TIMER_LABEL: &str = "Time Left: ";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the memory game.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    layout: Layout,
}

impl GameView {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// `pointer` is the last known mouse position in terminal coordinates and
    /// only affects the restart control's hover color.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        pointer: Option<Point>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(palette::TEXT, palette::BACKGROUND),
        });

        let origin = self.layout.origin(viewport.width, viewport.height);

        self.draw_header(fb, snap, origin);
        for idx in CardIndex::all() {
            self.draw_card(fb, snap, idx, origin);
        }
        if snap.show_restart() {
            self.draw_restart(fb, pointer, origin);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        pointer: Option<Point>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, pointer, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: Point) {
        let band = self.layout.header_rect().offset(origin.x, origin.y);
        let style = CellStyle::new(palette::TEXT, palette::HEADER);
        fb.fill_rect(band, ' ', style);

        let y = band.y + band.h / 2;
        let x = fb.put_str(band.x + 1, y, TIMER_LABEL, style);
        let x = fb.put_u32(x, y, snap.time_left_secs, style);
        fb.put_char(x, y, 's', style);

        if let Some(text) = snap.outcome.banner() {
            let color = if snap.outcome == Outcome::Won {
                palette::WIN
            } else {
                palette::LOSS
            };
            let text_w = text.chars().count() as u16;
            let bx = band.right().saturating_sub(text_w + 1);
            fb.put_str(bx, y, text, CellStyle::new(color, palette::HEADER).bold());
        }
    }

    fn draw_card(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, idx: CardIndex, origin: Point) {
        let rect = self.layout.card_rect(idx).offset(origin.x, origin.y);
        let view = snap.card(idx);

        let fill = match snap.visible_face(idx) {
            Some(face) => Rgb::from(face.tint),
            None => palette::CARD_BACK,
        };

        fb.fill_rect(rect, ' ', CellStyle::new(palette::TEXT, fill));
        fb.draw_box(rect, CellStyle::new(palette::CARD_BORDER, fill));

        if let Some(face) = snap.visible_face(idx) {
            let mut style = CellStyle::new(glyph_color(&face), fill);
            if matches!(view, CardView::Matched(_)) {
                style = style.bold();
            }
            fb.put_char(rect.x + rect.w / 2, rect.y + rect.h / 2, face.glyph, style);
        }
    }

    fn draw_restart(&self, fb: &mut FrameBuffer, pointer: Option<Point>, origin: Point) {
        let rect = self.layout.restart_button().offset(origin.x, origin.y);
        let hovered = pointer.is_some_and(|p| rect.contains(p));

        fb.fill_rect(
            rect.offset(1, 1),
            ' ',
            CellStyle::new(palette::BUTTON_TEXT, palette::BUTTON_SHADOW),
        );

        let bg = if hovered {
            palette::BUTTON_HOVER
        } else {
            palette::BUTTON
        };
        fb.fill_rect(rect, ' ', CellStyle::new(palette::BUTTON_TEXT, bg));

        let label_w = RESTART_LABEL.chars().count() as u16;
        fb.put_str(
            rect.x + rect.w.saturating_sub(label_w) / 2,
            rect.y + rect.h / 2,
            RESTART_LABEL,
            CellStyle::new(palette::BUTTON_TEXT, bg).bold(),
        );
    }
}

/// Black on light tints, white on dark ones.
fn glyph_color(face: &Face) -> Rgb {
    let (r, g, b) = face.tint;
    let luma = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
    if luma > 128 {
        Rgb::new(0, 0, 0)
    } else {
        Rgb::new(255, 255, 255)
    }
}
