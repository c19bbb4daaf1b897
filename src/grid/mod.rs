use std::fmt;
use rand::Rng;
use crate::errors::GridError;


/// Position on the grid, addressed by row and column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` shares an edge with this cell
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// State of a single cell. Exactly one tag holds at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    Frontier, // queued in the open set
    Visited, // popped and expanded
    Path,
}

impl Tag {
    /// Tags written by a search run, as opposed to user edits
    pub fn is_search_mark(self) -> bool {
        matches!(self, Tag::Frontier | Tag::Visited | Tag::Path)
    }
}


/// Square grid of tagged cells
/// Row and column counts are fixed for the lifetime of the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    pixel_width: u32,
    cell_size: u32,
    tags: Vec<Tag>, // row-major
}

impl Grid {

    /// Build a `rows` x `rows` grid of empty cells spread over `pixel_width` pixels
    pub fn new(rows: usize, pixel_width: u32) -> Result<Self, GridError> {
        let invalid = GridError::InvalidConstruction { rows, pixel_width };

        if rows == 0 {
            return Err(invalid);
        }
        let cell_size = match u32::try_from(rows) {
            Ok(r) if r <= pixel_width => pixel_width / r,
            _ => return Err(invalid),
        };
        let len = rows.checked_mul(rows).ok_or(invalid)?;

        Ok(Self {
            rows,
            pixel_width,
            cell_size,
            tags: vec![Tag::Empty; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Side length of one cell in pixels
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.rows
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.rows + cell.col)
    }

    /// Tag of `cell`, `None` when out of bounds
    pub fn tag(&self, cell: Cell) -> Option<Tag> {
        self.index(cell).map(|i| self.tags[i])
    }

    pub fn set_tag(&mut self, cell: Cell, tag: Tag) -> Result<(), GridError> {
        let i = self.index(cell).ok_or(GridError::OutOfBounds(cell))?;
        self.tags[i] = tag;
        Ok(())
    }

    pub fn is_barrier(&self, cell: Cell) -> bool {
        self.tag(cell) == Some(Tag::Barrier)
    }

    /// All cells in row-major order with their tags
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Tag)> + '_ {
        let rows = self.rows;
        self.tags
            .iter()
            .enumerate()
            .map(move |(i, &tag)| (Cell::new(i / rows, i % rows), tag))
    }

    /// Open cells sharing an edge with `cell`
    /// Order is fixed: down, up, right, left. Barriers and out of bounds cells are skipped.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut out = Vec::with_capacity(4);
        if !self.contains(cell) {
            return out;
        }

        let Cell { row, col } = cell;
        let candidates = [
            (row + 1 < self.rows).then(|| Cell::new(row + 1, col)), // down
            (row > 0).then(|| Cell::new(row - 1, col)), // up
            (col + 1 < self.rows).then(|| Cell::new(row, col + 1)), // right
            (col > 0).then(|| Cell::new(row, col - 1)), // left
        ];

        for n in candidates.into_iter().flatten() {
            if !self.is_barrier(n) {
                out.push(n);
            }
        }
        out
    }

    /// Reset Frontier, Visited and Path cells back to Empty
    pub fn clear_search_marks(&mut self) {
        for tag in self.tags.iter_mut().filter(|t| t.is_search_mark()) {
            *tag = Tag::Empty;
        }
    }

    /// Map a pixel position to the cell under it
    /// The first coordinate selects the row and the second the column.
    /// Pixels in the leftover margin (when `pixel_width` is not a multiple of `rows`) map to `None`.
    pub fn cell_at_pixel(&self, x: u32, y: u32) -> Option<Cell> {
        let cell = Cell::new((x / self.cell_size) as usize, (y / self.cell_size) as usize);
        self.contains(cell).then_some(cell)
    }

    /// Top-left pixel of `cell`, mirroring `cell_at_pixel`
    /// `None` when the cell is out of bounds
    pub fn pixel_origin(&self, cell: Cell) -> Option<(u32, u32)> {
        // in-bounds cells start below pixel_width, so neither product can overflow
        self.contains(cell)
            .then(|| (cell.row as u32 * self.cell_size, cell.col as u32 * self.cell_size))
    }

    /// Turn each Empty cell into a Barrier with the given probability
    /// Returns the number of barriers placed
    pub fn scatter_barriers<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) -> usize {
        let p = probability.clamp(0.0, 1.0);
        let mut placed = 0;
        for tag in self.tags.iter_mut().filter(|t| **t == Tag::Empty) {
            if rng.random_bool(p) {
                *tag = Tag::Barrier;
                placed += 1;
            }
        }
        placed
    }
}
