use crate::grid::Cell;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cannot build a grid of {rows} rows across {pixel_width} pixels")]
    InvalidConstruction { rows: usize, pixel_width: u32 },
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Cell),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathPlannerError {
    #[error("invalid endpoints: {0}")]
    InvalidEndpoints(String), // start/end missing, equal or blocked
    #[error(transparent)]
    Grid(#[from] GridError),
}
