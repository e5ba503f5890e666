use super::Cell;
use crate::layout::Rect;
use crate::text::char_width;
use crate::types::{Border, Rgb, TextStyle};

/// A grid of cells that a frame is painted into before it is diffed
/// against the previous frame.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Blank every cell in `rect` onto background `bg`.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        let rect = rect.intersection(self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(i) = self.index(x, y) {
                    self.cells[i] = Cell::default().with_bg(bg);
                }
            }
        }
    }

    /// Print `text` starting at `(x, y)`, clipped to `clip`. Returns the
    /// column after the last printed cell.
    pub fn print(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb,
        style: TextStyle,
        clip: Rect,
    ) -> u16 {
        let clip = clip.intersection(self.area());
        if y < clip.y || y >= clip.bottom() {
            return x;
        }

        let mut col = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if col < clip.x {
                col += w;
                continue;
            }
            if col + w > clip.right() {
                break;
            }
            let Some(i) = self.index(col, y) else { break };
            let bg = self.cells[i].bg;
            self.cells[i] = Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style);
            if w == 2 {
                if let Some(j) = self.index(col + 1, y) {
                    self.cells[j] = Cell {
                        wide_continuation: true,
                        ..self.cells[i]
                    };
                }
            }
            col += w;
        }
        col
    }

    /// Outline `rect` with the given border glyphs.
    pub fn outline(&mut self, rect: Rect, border: Border, fg: Rgb) {
        let Some([tl, tr, bl, br, h, v]) = border.glyphs() else {
            return;
        };
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        for x in rect.x..=right {
            let (top_ch, bottom_ch) = if x == rect.x {
                (tl, bl)
            } else if x == right {
                (tr, br)
            } else {
                (h, h)
            };
            self.stroke(x, rect.y, top_ch, fg);
            self.stroke(x, bottom, bottom_ch, fg);
        }
        for y in rect.y + 1..bottom {
            self.stroke(rect.x, y, v, fg);
            self.stroke(right, y, v, fg);
        }
    }

    fn stroke(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if let Some(i) = self.index(x, y) {
            let bg = self.cells[i].bg;
            self.cells[i] = Cell::new(ch).with_fg(fg).with_bg(bg);
        }
    }

    /// Read one row back as text, skipping wide continuations.
    pub fn line(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    /// Cells of `self` that differ from `other`, with their coordinates.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self) {
        self.reset(Cell::default());
    }

    /// Overwrite every cell with `cell`.
    pub fn reset(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }
}
