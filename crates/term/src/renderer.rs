//! TerminalRenderer: owns the terminal while the game runs and presents frames.
//!
//! Frames are diffed against the previously presented one so that a 30 Hz
//! loop only writes the cells that changed (usually just the timer digits).

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Window title set on entry.
pub const WINDOW_TITLE: &str = "Memory Puzzle Game";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor, mouse reporting on.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle(WINDOW_TITLE))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present a framebuffer, swapping it into internal state.
    ///
    /// After the call `fb` holds the previously presented frame, so callers can
    /// keep two buffers alive and never clone.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        pen.write_run(fb, 0, y, fb.width(), out)?;
    }
    pen.finish(out)
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        pen.write_run(next, x, y, len, out)?;
    }
    pen.finish(out)
}

/// Tracks the active style so repeated cells don't re-emit escape codes.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn write_run(
        &mut self,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        len: u16,
        out: &mut Vec<u8>,
    ) -> Result<()> {
        for cx in x..x + len {
            let cell = fb.get(cx, y).unwrap_or_default();
            if self.style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                self.style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.style.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of differing cells, row by row.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let w = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < w && !differs(x) {
                x += 1;
            }
            if x >= w {
                return None;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 2);
        let mut b = FrameBuffer::new(5, 2);

        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }
        b.set(4, 1, Cell { ch: 'Y', style });

        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![(1, 0, 3), (4, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let a = FrameBuffer::new(4, 3);
        let b = a.clone();
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn full_redraw_contains_every_char() {
        let style = CellStyle::default();
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 1, Cell { ch: 'D', style });

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('A'));
        assert!(text.contains('D'));
    }

    #[test]
    fn style_conversion() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
