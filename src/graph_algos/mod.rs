pub mod a_star;
mod shortest_path;

pub use shortest_path::reconstruct;

use crate::collections::FxIndexMap;
use crate::grid::Cell;

/// Cost of a path, counted in unit steps
pub type Cost = u32;

/// Maps each reached cell to the cell it was best reached from
/// The start cell never has an entry
pub type PredecessorMap = FxIndexMap<Cell, Cell>;
