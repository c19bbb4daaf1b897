use std::ops::ControlFlow;
use crate::errors::GridError;
use crate::grid::{Cell, Grid, Tag};
use super::PredecessorMap;

/// Walk the predecessor map back from `end`
/// Returns `end` followed by each predecessor up to, but excluding, the start.
/// Cells between the endpoints are tagged Path and `on_step` runs once per tagged cell;
/// `end` keeps its tag. A `Break` from `on_step` stops the walk and is passed back.
/// The result is empty when `end` has no predecessor.
pub fn reconstruct<F>(grid: &mut Grid, predecessors: &PredecessorMap, end: Cell, on_step: &mut F) -> Result<ControlFlow<(), Vec<Cell>>, GridError>
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    let mut path = Vec::new();
    if !predecessors.contains_key(&end) {
        return Ok(ControlFlow::Continue(path));
    }
    path.push(end);
    let mut current = end;

    while let Some(&prev) = predecessors.get(&current) {
        // start is the only reached cell without a predecessor
        if !predecessors.contains_key(&prev) {
            break;
        }

        grid.set_tag(prev, Tag::Path)?;
        path.push(prev);
        if on_step(grid).is_break() {
            return Ok(ControlFlow::Break(()));
        }
        current = prev;
    }

    Ok(ControlFlow::Continue(path))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn chain(cells: &[Cell]) -> PredecessorMap {
        let mut map = PredecessorMap::default();
        for pair in cells.windows(2) {
            map.insert(pair[1], pair[0]);
        }
        map
    }

    #[test]
    fn test_reconstruct_walks_goal_to_start() {
        let mut grid = Grid::new(3, 30).unwrap();
        let route = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1), Cell::new(2, 1), Cell::new(2, 2)];
        let map = chain(&route);

        let mut renders = 0;
        let result = reconstruct(&mut grid, &map, Cell::new(2, 2), &mut |_: &Grid| {
            renders += 1;
            ControlFlow::Continue(())
        }).unwrap();

        assert_eq!(
            result,
            ControlFlow::Continue(vec![Cell::new(2, 2), Cell::new(2, 1), Cell::new(1, 1), Cell::new(1, 0)])
        );
        assert_eq!(renders, 3);
        assert_eq!(grid.tag(Cell::new(0, 0)), Some(Tag::Empty));
        assert_eq!(grid.tag(Cell::new(2, 2)), Some(Tag::Empty));
        assert_eq!(grid.cells().filter(|(_, t)| *t == Tag::Path).count(), 3);
    }

    #[test]
    fn test_reconstruct_render_sees_each_new_tag() {
        let mut grid = Grid::new(3, 30).unwrap();
        let map = chain(&[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 2)]);

        let mut seen = Vec::new();
        reconstruct(&mut grid, &map, Cell::new(1, 2), &mut |g: &Grid| {
            seen.push(g.cells().filter(|(_, t)| *t == Tag::Path).count());
            ControlFlow::Continue(())
        }).unwrap();

        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_reconstruct_without_predecessor_is_empty() {
        let mut grid = Grid::new(2, 20).unwrap();
        let map = PredecessorMap::default();
        let result = reconstruct(&mut grid, &map, Cell::new(1, 1), &mut |_: &Grid| ControlFlow::Continue(())).unwrap();
        assert_eq!(result, ControlFlow::Continue(vec![]));
    }

    #[test]
    fn test_reconstruct_adjacent_endpoints() {
        let mut grid = Grid::new(2, 20).unwrap();
        grid.set_tag(Cell::new(0, 1), Tag::End).unwrap();
        let map = chain(&[Cell::new(0, 0), Cell::new(0, 1)]);

        let mut renders = 0;
        let result = reconstruct(&mut grid, &map, Cell::new(0, 1), &mut |_: &Grid| {
            renders += 1;
            ControlFlow::Continue(())
        }).unwrap();

        assert_eq!(result, ControlFlow::Continue(vec![Cell::new(0, 1)]));
        assert_eq!(renders, 0);
        assert_eq!(grid.tag(Cell::new(0, 1)), Some(Tag::End));
    }

    #[test]
    fn test_reconstruct_stops_on_break() {
        let mut grid = Grid::new(4, 40).unwrap();
        let map = chain(&[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 3), Cell::new(1, 3)]);

        let result = reconstruct(&mut grid, &map, Cell::new(1, 3), &mut |_: &Grid| ControlFlow::Break(())).unwrap();

        assert_eq!(result, ControlFlow::Break(()));
        // only the first cell was tagged before the walk stopped
        assert_eq!(grid.tag(Cell::new(0, 3)), Some(Tag::Path));
        assert_eq!(grid.tag(Cell::new(0, 2)), Some(Tag::Empty));
    }
}
