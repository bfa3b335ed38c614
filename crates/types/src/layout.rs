//! Canvas geometry shared by the input mapper and the renderer.
//!
//! The canvas is measured in terminal cells: a header band of `header_rows`
//! rows on top of a `GRID_SIZE x GRID_SIZE` uniform tiling. Each tile holds one
//! card drawn inset by a one-cell gap on the left, right and bottom.
//!
//! ```text
//! +----------------------------------------+  row 0
//! | Time Left: 60s        You Win!         |  header band
//! +----------------------------------------+  row header_rows
//! | tile 0 | tile 1 | tile 2 | tile 3      |
//! | tile 4 | ...                           |
//! +----------------------------------------+
//! ```

use crate::{CardIndex, GRID_SIZE};

/// Default tile width in terminal columns.
pub const TILE_W: u16 = 10;

/// Default tile height in terminal rows.
///
/// Terminal glyphs are roughly twice as tall as they are wide, so a 10x5 tile
/// reads as a square card.
pub const TILE_H: u16 = 5;

/// Default header band height in rows.
pub const HEADER_ROWS: u16 = 3;

/// Largest tile side that keeps `GRID_SIZE` tiles within `u16`.
const MAX_TILE: u16 = u16::MAX / GRID_SIZE as u16;

/// Restart button size in cells ("Play Again" plus margins).
pub const BUTTON_W: u16 = 16;
pub const BUTTON_H: u16 = 3;

/// A position in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.y >= self.y
            && (p.x - self.x) < self.w
            && (p.y - self.y) < self.h
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// Same size, moved by `(dx, dy)`.
    pub fn offset(&self, dx: u16, dy: u16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }
}

/// Canvas geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    tile_w: u16,
    tile_h: u16,
    header_rows: u16,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(TILE_W, TILE_H, HEADER_ROWS)
    }
}

impl Layout {
    /// Custom tile and header sizes. Tiles smaller than 3x2 are clamped so
    /// every card keeps at least one visible cell, and all sizes are capped so
    /// the whole canvas stays addressable in `u16` cells.
    pub fn new(tile_w: u16, tile_h: u16, header_rows: u16) -> Self {
        let tile_w = tile_w.clamp(3, MAX_TILE);
        let tile_h = tile_h.clamp(2, MAX_TILE);
        let header_rows = header_rows.min(u16::MAX - tile_h * GRID_SIZE as u16);
        Self {
            tile_w,
            tile_h,
            header_rows,
        }
    }

    pub fn tile_w(&self) -> u16 {
        self.tile_w
    }

    pub fn tile_h(&self) -> u16 {
        self.tile_h
    }

    pub fn header_rows(&self) -> u16 {
        self.header_rows
    }

    pub fn canvas_width(&self) -> u16 {
        self.tile_w * GRID_SIZE as u16
    }

    pub fn canvas_height(&self) -> u16 {
        self.header_rows + self.tile_h * GRID_SIZE as u16
    }

    pub fn canvas_rect(&self) -> Rect {
        Rect::new(0, 0, self.canvas_width(), self.canvas_height())
    }

    pub fn header_rect(&self) -> Rect {
        Rect::new(0, 0, self.canvas_width(), self.header_rows)
    }

    pub fn grid_rect(&self) -> Rect {
        Rect::new(
            0,
            self.header_rows,
            self.canvas_width(),
            self.tile_h * GRID_SIZE as u16,
        )
    }

    /// Top-left of the canvas when centered in a `width x height` viewport.
    ///
    /// Viewports smaller than the canvas pin it to the top-left corner.
    pub fn origin(&self, width: u16, height: u16) -> Point {
        Point::new(
            width.saturating_sub(self.canvas_width()) / 2,
            height.saturating_sub(self.canvas_height()) / 2,
        )
    }

    /// Convert a viewport position into canvas coordinates.
    ///
    /// Returns `None` for positions left of, above, or beyond the canvas.
    pub fn to_canvas(&self, origin: Point, p: Point) -> Option<Point> {
        if p.x < origin.x || p.y < origin.y {
            return None;
        }
        let local = Point::new(p.x - origin.x, p.y - origin.y);
        self.canvas_rect().contains(local).then_some(local)
    }

    /// Full tile occupied by a card (card plus its gap).
    pub fn tile_rect(&self, idx: CardIndex) -> Rect {
        Rect::new(
            idx.col() as u16 * self.tile_w,
            self.header_rows + idx.row() as u16 * self.tile_h,
            self.tile_w,
            self.tile_h,
        )
    }

    /// Visible card inside its tile.
    pub fn card_rect(&self, idx: CardIndex) -> Rect {
        let tile = self.tile_rect(idx);
        Rect::new(tile.x + 1, tile.y, tile.w - 2, tile.h - 1)
    }

    /// Card under a canvas position.
    ///
    /// The header band and anything outside the grid map to `None`. The gap
    /// around a card belongs to that card's tile.
    pub fn card_at(&self, p: Point) -> Option<CardIndex> {
        if p.y < self.header_rows {
            return None;
        }
        let row = (p.y - self.header_rows) / self.tile_h;
        let col = p.x / self.tile_w;
        if row > u8::MAX as u16 || col > u8::MAX as u16 {
            return None;
        }
        CardIndex::from_row_col(row as u8, col as u8)
    }

    /// Hit rectangle of the "Play Again" control.
    ///
    /// Horizontally centered, placed below the vertical middle of the canvas
    /// so it overlays the lower half of the grid.
    pub fn restart_button(&self) -> Rect {
        let w = BUTTON_W.min(self.canvas_width());
        let x = (self.canvas_width() - w) / 2;
        let y = (self.canvas_height() / 2 + BUTTON_H)
            .min(self.canvas_height().saturating_sub(BUTTON_H + 1));
        Rect::new(x, y, w, BUTTON_H)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_size() {
        let layout = Layout::default();
        assert_eq!(layout.canvas_width(), 40);
        assert_eq!(layout.canvas_height(), 23);
    }

    #[test]
    fn header_band_maps_to_nothing() {
        let layout = Layout::default();
        for y in 0..HEADER_ROWS {
            for x in 0..layout.canvas_width() {
                assert_eq!(layout.card_at(Point::new(x, y)), None);
            }
        }
    }

    #[test]
    fn first_and_last_tiles() {
        let layout = Layout::default();
        assert_eq!(
            layout.card_at(Point::new(0, HEADER_ROWS)),
            CardIndex::new(0)
        );
        assert_eq!(
            layout.card_at(Point::new(39, 22)),
            CardIndex::new(15)
        );
        // Second tile of the second row.
        assert_eq!(
            layout.card_at(Point::new(TILE_W + 3, HEADER_ROWS + TILE_H + 1)),
            CardIndex::new(5)
        );
    }

    #[test]
    fn beyond_last_column_is_rejected_not_wrapped() {
        let layout = Layout::default();
        assert_eq!(layout.card_at(Point::new(40, HEADER_ROWS)), None);
        assert_eq!(layout.card_at(Point::new(79, HEADER_ROWS)), None);
        assert_eq!(layout.card_at(Point::new(0, 23)), None);
    }

    #[test]
    fn card_rect_is_inset_within_tile() {
        let layout = Layout::default();
        for idx in CardIndex::all() {
            let tile = layout.tile_rect(idx);
            let card = layout.card_rect(idx);
            assert!(card.x > tile.x);
            assert!(card.right() < tile.right());
            assert!(card.bottom() < tile.bottom());
            assert_eq!(layout.card_at(Point::new(card.x, card.y)), Some(idx));
        }
    }

    #[test]
    fn oversized_layout_is_clamped() {
        let layout = Layout::new(u16::MAX, u16::MAX, u16::MAX);
        assert_eq!(layout.tile_w(), u16::MAX / 4);
        assert_eq!(layout.canvas_width(), (u16::MAX / 4) * 4);
        assert_eq!(layout.canvas_height(), u16::MAX);

        let last = CardIndex::new(15).unwrap();
        let card = layout.card_rect(last);
        assert_eq!(layout.card_at(Point::new(card.x, card.y)), Some(last));
        let button = layout.restart_button();
        assert!(button.bottom() <= layout.canvas_height());
    }

    #[test]
    fn origin_centers_canvas() {
        let layout = Layout::default();
        assert_eq!(layout.origin(80, 33), Point::new(20, 5));
        assert_eq!(layout.origin(10, 10), Point::new(0, 0));
    }

    #[test]
    fn to_canvas_rejects_outside_points() {
        let layout = Layout::default();
        let origin = Point::new(20, 5);
        assert_eq!(
            layout.to_canvas(origin, Point::new(20, 5)),
            Some(Point::new(0, 0))
        );
        assert_eq!(layout.to_canvas(origin, Point::new(19, 5)), None);
        assert_eq!(layout.to_canvas(origin, Point::new(20, 4)), None);
        assert_eq!(layout.to_canvas(origin, Point::new(60, 5)), None);
        assert_eq!(layout.to_canvas(origin, Point::new(59, 27)), Some(Point::new(39, 22)));
    }

    #[test]
    fn restart_button_lies_inside_grid() {
        let layout = Layout::default();
        let button = layout.restart_button();
        assert_eq!(button, Rect::new(12, 14, 16, 3));
        assert!(button.y >= layout.header_rows());
        assert!(button.bottom() <= layout.canvas_height());
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(r.contains(Point::new(2, 3)));
        assert!(r.contains(Point::new(5, 4)));
        assert!(!r.contains(Point::new(6, 4)));
        assert!(!r.contains(Point::new(5, 5)));
        assert!(!r.contains(Point::new(1, 3)));
    }
}
