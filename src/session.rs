use std::ops::ControlFlow;
use log::debug;
use crate::errors::{GridError, PathPlannerError};
use crate::graph_algos::a_star::{AStar, SearchOutcome};
use crate::grid::{Cell, Grid, Tag};


/// Grid dimensions for a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub rows: usize,
    pub pixel_width: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { rows: 50, pixel_width: 600 }
    }
}


/// Editing state behind an interactive front end
/// Tracks which cells are the start and end while the user draws on the grid.
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    start: Option<Cell>,
    end: Option<Cell>,
    a_star: AStar,
}

impl Session {

    pub fn new(config: SessionConfig) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(config.rows, config.pixel_width)?,
            config,
            start: None,
            end: None,
            a_star: AStar::new(),
        })
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Primary click at a pixel position, see `place`
    pub fn primary(&mut self, x: u32, y: u32) -> Result<Option<Tag>, GridError> {
        match self.grid.cell_at_pixel(x, y) {
            Some(cell) => self.place(cell),
            None => Ok(None),
        }
    }

    /// Secondary click at a pixel position, see `erase`
    pub fn secondary(&mut self, x: u32, y: u32) -> Result<bool, GridError> {
        match self.grid.cell_at_pixel(x, y) {
            Some(cell) => self.erase(cell).map(|_| true),
            None => Ok(false),
        }
    }

    /// Set the start if missing, then the end, then barriers on any other cell
    /// Returns the tag written, if any
    pub fn place(&mut self, cell: Cell) -> Result<Option<Tag>, GridError> {
        let tag = if self.start.is_none() && self.end != Some(cell) {
            self.start = Some(cell);
            Tag::Start
        } else if self.end.is_none() && self.start != Some(cell) {
            self.end = Some(cell);
            Tag::End
        } else if self.start != Some(cell) && self.end != Some(cell) {
            Tag::Barrier
        } else {
            return Ok(None);
        };

        self.grid.set_tag(cell, tag)?;
        Ok(Some(tag))
    }

    /// Reset a cell to Empty, forgetting it as start or end
    pub fn erase(&mut self, cell: Cell) -> Result<(), GridError> {
        self.grid.set_tag(cell, Tag::Empty)?;
        if self.start == Some(cell) {
            self.start = None;
        } else if self.end == Some(cell) {
            self.end = None;
        }
        Ok(())
    }

    /// Replace the grid with a fresh one and drop both endpoints
    pub fn clear(&mut self) -> Result<(), GridError> {
        self.grid = Grid::new(self.config.rows, self.config.pixel_width)?;
        self.start = None;
        self.end = None;
        debug!("grid reset to {0}x{0}", self.config.rows);
        Ok(())
    }

    /// Search between the current endpoints
    /// Marks left by a previous run are cleared first; barriers and endpoints stay.
    pub fn run<F>(&mut self, on_step: F) -> Result<SearchOutcome, PathPlannerError>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(PathPlannerError::InvalidEndpoints("start and end must both be placed".to_string()));
        };

        self.grid.clear_search_marks();
        self.a_star.search(&mut self.grid, start, end, on_step)
    }
}
