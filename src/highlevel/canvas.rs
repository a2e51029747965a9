//! Headless drawing surface.
//!
//! A [`Canvas`] turns pointer events into one symbol per cell, the way an
//! interactive front end would, without owning a window. Coordinates are in
//! pixels with `block_size` pixels per cell and y growing downward.

use crate::error::{HopfieldError, Result};
use crate::symbols::{classify, Channel, ChannelSet};
use std::fmt;

/// What pointer input does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Dragging draws the stroke channel matching the motion.
    Pen,
    /// Dragging resets cells to blank.
    Eraser,
    /// Pointer input is ignored while a recall result is on display.
    Recall,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Pen => write!(f, "pen"),
            Mode::Eraser => write!(f, "eraser"),
            Mode::Recall => write!(f, "recall"),
        }
    }
}

/// Grid of symbols edited by pointer strokes.
#[derive(Clone, Debug)]
pub struct Canvas {
    side: usize,
    block_size: f64,
    channels: ChannelSet,
    symbols: Vec<Channel>,
    mode: Mode,
    pen_down: bool,
    cursor: (f64, f64),
    last_change: Option<usize>,
}

impl Canvas {
    /// Create a blank `side × side` canvas.
    pub fn new(side: usize, block_size: f64, channels: ChannelSet) -> Result<Self> {
        if side == 0 {
            return Err(HopfieldError::InvalidDimension(
                "canvas side must be at least 1".into(),
            ));
        }
        if !(block_size.is_finite() && block_size > 0.0) {
            return Err(HopfieldError::InvalidDimension(format!(
                "block size must be positive, got {}",
                block_size
            )));
        }
        let cells = side.checked_mul(side).ok_or_else(|| {
            HopfieldError::InvalidDimension(format!("canvas side {} overflows", side))
        })?;

        Ok(Self {
            side,
            block_size,
            symbols: vec![channels.blank(); cells],
            channels,
            mode: Mode::Pen,
            pen_down: false,
            cursor: (0.0, 0.0),
            last_change: None,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.pen_down = false;
        self.last_change = None;
    }

    /// Flip between pen and eraser. From recall mode this returns to the pen.
    pub fn toggle_eraser(&mut self) {
        let next = match self.mode {
            Mode::Pen => Mode::Eraser,
            Mode::Eraser | Mode::Recall => Mode::Pen,
        };
        self.set_mode(next);
    }

    /// Current symbols, row-major.
    pub fn symbols(&self) -> &[Channel] {
        &self.symbols
    }

    /// Replace every symbol, e.g. with a recall result.
    pub fn set_symbols(&mut self, symbols: &[Channel]) -> Result<()> {
        if symbols.len() != self.symbols.len() {
            return Err(HopfieldError::CellCountMismatch {
                expected: self.symbols.len(),
                got: symbols.len(),
            });
        }
        for &symbol in symbols {
            self.channels.check(symbol)?;
        }
        self.symbols.copy_from_slice(symbols);
        Ok(())
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.symbols.fill(self.channels.blank());
        self.last_change = None;
    }

    /// Cell under pixel `(x, y)`, if it lies on the grid.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<usize> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let row = (y / self.block_size) as usize;
        let col = (x / self.block_size) as usize;
        (row < self.side && col < self.side).then(|| row * self.side + col)
    }

    /// Top-left pixel of a cell.
    pub fn cell_origin(&self, cell: usize) -> (f64, f64) {
        let row = cell / self.side;
        let col = cell % self.side;
        (col as f64 * self.block_size, row as f64 * self.block_size)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.mode == Mode::Recall {
            return;
        }
        self.pen_down = true;
        self.cursor = (x, y);
    }

    pub fn pointer_up(&mut self) {
        self.pen_down = false;
        self.last_change = None;
    }

    /// Apply a pointer move. Returns the cell that changed, if any.
    ///
    /// The pen writes each cell at most once per visit: re-entering the
    /// cell it just wrote does nothing until the pointer lands elsewhere.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        if !self.pen_down || self.mode == Mode::Recall {
            return None;
        }

        let (cx, cy) = self.cursor;
        self.cursor = (x, y);
        let cell = self.cell_at(x, y)?;

        match self.mode {
            Mode::Eraser => {
                self.symbols[cell] = self.channels.blank();
                Some(cell)
            }
            Mode::Pen if self.last_change != Some(cell) => {
                let channel = classify(&self.channels, x - cx, y - cy)?;
                self.symbols[cell] = channel;
                self.last_change = Some(cell);
                Some(cell)
            }
            _ => None,
        }
    }

    /// Mode indicator line followed by one line of glyphs per grid row.
    pub fn render(&self) -> String {
        let mut out = self.mode.to_string();
        for row in self.symbols.chunks(self.side) {
            out.push('\n');
            out.extend(row.iter().map(|&c| self.channels.glyph(c)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(4, 10.0, ChannelSet::strokes()).unwrap()
    }

    fn glyphs(c: &Canvas) -> String {
        c.symbols().iter().map(|&s| c.channels().glyph(s)).collect()
    }

    #[test]
    fn test_new_is_blank() {
        let c = canvas();
        assert_eq!(c.symbols().len(), 16);
        assert!(c.symbols().iter().all(|&s| s == c.channels().blank()));
        assert_eq!(c.mode(), Mode::Pen);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Canvas::new(0, 10.0, ChannelSet::strokes()).is_err());
        assert!(Canvas::new(4, 0.0, ChannelSet::strokes()).is_err());
        assert!(Canvas::new(4, f64::NAN, ChannelSet::strokes()).is_err());
    }

    #[test]
    fn test_cell_mapping() {
        let c = canvas();
        assert_eq!(c.cell_at(0.0, 0.0), Some(0));
        assert_eq!(c.cell_at(15.0, 5.0), Some(1));
        assert_eq!(c.cell_at(5.0, 15.0), Some(4));
        assert_eq!(c.cell_at(39.9, 39.9), Some(15));
        assert_eq!(c.cell_at(40.0, 0.0), None);
        assert_eq!(c.cell_at(-1.0, 0.0), None);
        assert_eq!(c.cell_origin(6), (20.0, 10.0));
    }

    #[test]
    fn test_horizontal_stroke() {
        let mut c = canvas();
        c.pointer_down(1.0, 15.0);
        assert_eq!(c.pointer_move(8.0, 15.0), Some(4));
        assert_eq!(c.pointer_move(18.0, 15.0), Some(5));
        assert_eq!(c.pointer_move(28.0, 15.0), Some(6));
        c.pointer_up();
        assert_eq!(glyphs(&c), "    --- ".to_string() + "        ");
    }

    #[test]
    fn test_pen_writes_cell_once_per_visit() {
        let mut c = canvas();
        c.pointer_down(1.0, 1.0);
        assert_eq!(c.pointer_move(2.0, 8.0), Some(0));
        // Still in cell 0: the first classification stands.
        assert_eq!(c.pointer_move(9.0, 8.0), None);
        assert_eq!(c.channels().glyph(c.symbols()[0]), '|');
    }

    #[test]
    fn test_zero_motion_leaves_cell() {
        let mut c = canvas();
        c.pointer_down(5.0, 5.0);
        assert_eq!(c.pointer_move(5.0, 5.0), None);
        assert_eq!(c.symbols()[0], c.channels().blank());
    }

    #[test]
    fn test_pen_up_stops_drawing() {
        let mut c = canvas();
        assert_eq!(c.pointer_move(5.0, 5.0), None);
        c.pointer_down(0.0, 0.0);
        c.pointer_up();
        assert_eq!(c.pointer_move(5.0, 5.0), None);
    }

    #[test]
    fn test_eraser_and_clear() {
        let mut c = canvas();
        c.pointer_down(0.0, 0.0);
        c.pointer_move(5.0, 5.0);
        c.pointer_move(15.0, 15.0);
        c.pointer_up();
        assert_eq!(glyphs(&c).trim(), "\\    \\");

        c.toggle_eraser();
        assert_eq!(c.mode(), Mode::Eraser);
        c.pointer_down(15.0, 15.0);
        assert_eq!(c.pointer_move(15.0, 15.0), Some(5));
        c.pointer_up();
        assert_eq!(glyphs(&c).trim(), "\\");

        c.clear();
        assert!(glyphs(&c).trim().is_empty());
    }

    #[test]
    fn test_recall_mode_ignores_pointer() {
        let mut c = canvas();
        c.set_mode(Mode::Recall);
        c.pointer_down(0.0, 0.0);
        assert_eq!(c.pointer_move(5.0, 5.0), None);
        c.toggle_eraser();
        assert_eq!(c.mode(), Mode::Pen);
    }

    #[test]
    fn test_set_symbols_validated() {
        let mut c = canvas();
        assert!(c.set_symbols(&[Channel::new(1); 3]).is_err());
        assert!(c.set_symbols(&[Channel::new(9); 16]).is_err());
        c.set_symbols(&[Channel::new(1); 16]).unwrap();
        assert_eq!(glyphs(&c), "|".repeat(16));
    }

    #[test]
    fn test_render() {
        let mut c = Canvas::new(2, 1.0, ChannelSet::strokes()).unwrap();
        let symbols = c.channels().parse_glyphs("|- /").unwrap();
        c.set_symbols(&symbols).unwrap();
        assert_eq!(c.render(), "pen\n|-\n /");
        c.toggle_eraser();
        assert!(c.render().starts_with("eraser\n"));
    }
}
