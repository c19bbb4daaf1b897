//! Drawing data for a grid. Nothing here draws; a front end turns these
//! rectangles, lines and colours into pixels.

use std::fmt;
use crate::grid::{Cell, Grid, Tag};


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const PURPLE: Rgb = Rgb(128, 0, 128);
pub const ORANGE: Rgb = Rgb(255, 165, 0);
pub const GREY: Rgb = Rgb(128, 128, 128);
pub const TURQUOISE: Rgb = Rgb(64, 224, 208);

/// Colour of the lines separating cells
pub const GRID_LINE: Rgb = GREY;

/// Fill colour for a tag
pub fn color(tag: Tag) -> Rgb {
    match tag {
        Tag::Empty => BLACK,
        Tag::Barrier => WHITE,
        Tag::Start => ORANGE,
        Tag::End => TURQUOISE,
        Tag::Frontier => GREEN,
        Tag::Visited => RED,
        Tag::Path => PURPLE,
    }
}

/// Single character used for text output
pub fn glyph(tag: Tag) -> char {
    match tag {
        Tag::Empty => '.',
        Tag::Barrier => '#',
        Tag::Start => 'S',
        Tag::End => 'E',
        Tag::Frontier => 'o',
        Tag::Visited => 'x',
        Tag::Path => '*',
    }
}


/// Square area covered by one cell, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// Straight line between two pixel positions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub from: (u32, u32),
    pub to: (u32, u32),
}

/// Filled rectangle and colour for every cell, row-major
pub fn cell_rects(grid: &Grid) -> impl Iterator<Item = (Cell, Rect, Rgb)> + '_ {
    let size = grid.cell_size();
    grid.cells().filter_map(move |(cell, tag)| {
        let (x, y) = grid.pixel_origin(cell)?;
        Some((cell, Rect { x, y, size }, color(tag)))
    })
}

/// One horizontal and one vertical line per row, spanning the full width
pub fn grid_lines(grid: &Grid) -> Vec<Line> {
    let width = grid.pixel_width();
    let gap = grid.cell_size();
    let mut lines = Vec::with_capacity(grid.rows() * 2);
    for i in 0..grid.rows() as u32 {
        lines.push(Line { from: (0, i * gap), to: (width, i * gap) });
        lines.push(Line { from: (i * gap, 0), to: (i * gap, width) });
    }
    lines
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        for (cell, tag) in self.cells() {
            write!(f, "{}", glyph(tag))?;
            if cell.col + 1 == rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
