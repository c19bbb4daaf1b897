//! Grid pathfinding with an observable A* search.
//!
//! A [`Grid`] holds tagged cells; [`AStar::search`] finds a shortest 4-connected
//! route between two cells and calls back after every expansion so a front end
//! can redraw the Frontier, Visited and Path tags as they change.

pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod render;
pub mod session;
mod collections;

pub use errors::{GridError, PathPlannerError};
pub use graph_algos::a_star::{AStar, Route, SearchOutcome};
pub use grid::{Cell, Grid, Tag};
pub use session::{Session, SessionConfig};
