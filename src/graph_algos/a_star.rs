use crate::collections::{FxHashMap, FxHashSet};
use crate::errors::PathPlannerError;
use crate::geometry::manhattan;
use crate::grid::{Cell, Grid, Tag};
use super::{Cost, PredecessorMap, reconstruct};

use std::{
    collections::BinaryHeap,
    cmp::Ordering,
    ops::ControlFlow,
};
use log::{debug, trace};



/// Entry on the open list
/// Ordered by f_cost, then by insertion sequence so the first queued entry wins ties.
/// The cell itself never takes part in the ordering.
#[derive(Debug)]
struct Node {
    f_cost: Cost, // cost + h(n)
    seq: u64, // insertion counter, unique per run
    cell: Cell,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both keys are reversed
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}
impl Eq for Node {}


/// Bookkeeping for a single run. Created per call to `search` and dropped when it returns.
#[derive(Debug, Default)]
struct SearchState {
    g_score: FxHashMap<Cell, Cost>, // missing entries are infinite
    f_score: FxHashMap<Cell, Cost>,
    predecessors: PredecessorMap,
    open_list: BinaryHeap<Node>,
    open_set: FxHashSet<Cell>, // mirrors open_list for membership checks
    seq: u64,
}

impl SearchState {

    fn new(start: Cell, h_start: Cost) -> Self {
        let mut state = Self::default();
        state.g_score.insert(start, 0);
        state.f_score.insert(start, h_start);
        state.open_list.push(Node { f_cost: h_start, seq: 0, cell: start });
        state.open_set.insert(start);
        state
    }

    fn g(&self, cell: Cell) -> Cost {
        self.g_score.get(&cell).copied().unwrap_or(Cost::MAX)
    }

    fn push(&mut self, f_cost: Cost, cell: Cell) {
        self.seq += 1;
        self.open_list.push(Node { f_cost, seq: self.seq, cell });
    }
}


/// Result of a search run. Only malformed input is reported as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Route),
    NotFound, // open list ran dry before reaching the end
    Cancelled, // the step hook asked to stop
}

impl SearchOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            _ => None,
        }
    }
}


/// Shortest route found by a search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub start: Cell,
    pub end: Cell,
    pub cost: Cost, // g-score of the end cell when it was popped
    pub trail: Vec<Cell>, // end first, walking back to the start (excluded)
}

impl Route {

    /// Full path ordered from start to end, both included
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.trail.len() + 1);
        cells.push(self.start);
        cells.extend(self.trail.iter().rev().copied());
        cells
    }

    /// Number of unit steps from start to end
    pub fn steps(&self) -> usize {
        self.trail.len()
    }
}


/// A* Algorithm over a 4-connected grid with unit edge costs
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// The heuristic defaults to Manhattan distance. A custom one must stay admissible
/// (never overestimate the remaining cost) for routes to be shortest.
pub struct AStar<H = fn(Cell, Cell) -> Cost> {
    heuristic: H,
}

impl AStar {
    pub fn new() -> Self {
        Self { heuristic: manhattan }
    }
}

impl Default for AStar {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> AStar<H>
where
    H: Fn(Cell, Cell) -> Cost,
{

    pub fn with_heuristic(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// Search from `start` to `end`, tagging cells as the search proceeds
    /// Queued cells become Frontier and expanded cells become Visited; Start and End are never retagged.
    /// `on_step` runs once per expanded cell and once per path cell during reconstruction.
    /// Returning `Break` from it stops the run with `SearchOutcome::Cancelled`.
    pub fn search<F>(&self, grid: &mut Grid, start: Cell, end: Cell, mut on_step: F) -> Result<SearchOutcome, PathPlannerError>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        validate_endpoints(grid, start, end)?;

        let h = &self.heuristic;
        let mut state = SearchState::new(start, h(start, end));
        debug!("a* search from {start} to {end} on a {0}x{0} grid", grid.rows());

        while let Some(Node { cell: current, f_cost, seq }) = state.open_list.pop() {
            state.open_set.remove(&current);
            trace!(
                "pop {current} queued f={f_cost} best f={} seq={seq}",
                state.f_score.get(&current).copied().unwrap_or(Cost::MAX)
            );

            if current == end {
                let cost = state.g(end);
                let trail = match reconstruct(grid, &state.predecessors, end, &mut on_step)? {
                    ControlFlow::Continue(trail) => trail,
                    ControlFlow::Break(()) => {
                        debug!("a* search cancelled during reconstruction");
                        return Ok(SearchOutcome::Cancelled);
                    }
                };
                debug!("a* search found a route of cost {cost}, {} cells queued", state.seq + 1);
                return Ok(SearchOutcome::Found(Route { start, end, cost, trail }));
            }

            // every edge costs exactly 1
            let tentative_g = state.g(current).saturating_add(1);

            for neighbor in grid.neighbors(current) {
                if tentative_g >= state.g(neighbor) {
                    continue;
                }

                let f_cost = tentative_g.saturating_add(h(neighbor, end));
                state.predecessors.insert(neighbor, current);
                state.g_score.insert(neighbor, tentative_g);
                state.f_score.insert(neighbor, f_cost);

                if state.open_set.insert(neighbor) {
                    state.push(f_cost, neighbor);
                    if neighbor != end {
                        grid.set_tag(neighbor, Tag::Frontier)?;
                    }
                }
            }

            if on_step(grid).is_break() {
                debug!("a* search cancelled after expanding {current}");
                return Ok(SearchOutcome::Cancelled);
            }

            if current != start {
                grid.set_tag(current, Tag::Visited)?;
            }
        }

        debug!("a* search exhausted the open list without reaching {end}");
        Ok(SearchOutcome::NotFound)
    }
}


/// Reject endpoints that are out of bounds, blocked or identical
fn validate_endpoints(grid: &Grid, start: Cell, end: Cell) -> Result<(), PathPlannerError> {
    if start == end {
        return Err(PathPlannerError::InvalidEndpoints(format!("start and end are both {start}")));
    }
    for (name, cell) in [("start", start), ("end", end)] {
        match grid.tag(cell) {
            None => return Err(PathPlannerError::InvalidEndpoints(format!("{name} {cell} is outside the grid"))),
            Some(Tag::Barrier) => return Err(PathPlannerError::InvalidEndpoints(format!("{name} {cell} is a barrier"))),
            Some(_) => {}
        }
    }
    Ok(())
}
