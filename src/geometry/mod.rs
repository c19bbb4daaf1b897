use num_traits::{Num, Signed};
use crate::graph_algos::Cost;
use crate::grid::Cell;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Manhattan distance between two cells
/// Admissible and consistent for unit-cost, 4-directional movement
pub fn manhattan(a: Cell, b: Cell) -> Cost {
    let d = manhattan_distance(a.row as i64, a.col as i64, b.row as i64, b.col as i64);
    Cost::try_from(d).unwrap_or(Cost::MAX)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(0, 0, 3, 4), 7);
        assert_eq!(manhattan_distance(-2, 5, 2, -1), 10);
        assert_eq!(manhattan_distance(1.5, 0.0, 0.0, 0.5), 2.0);
    }

    #[test]
    fn test_manhattan_cells() {
        assert_eq!(manhattan(Cell::new(0, 0), Cell::new(2, 2)), 4);
        assert_eq!(manhattan(Cell::new(4, 1), Cell::new(1, 3)), 5);
        assert_eq!(manhattan(Cell::new(3, 3), Cell::new(3, 3)), 0);
    }

    #[test]
    fn test_manhattan_is_symmetric_and_consistent() {
        let cells: Vec<Cell> = (0..4).flat_map(|r| (0..4).map(move |c| Cell::new(r, c))).collect();
        let goal = Cell::new(3, 0);
        for &a in &cells {
            for &b in &cells {
                assert_eq!(manhattan(a, b), manhattan(b, a));
                // one unit step never drops the estimate by more than its cost
                if a.is_adjacent(&b) {
                    assert!(manhattan(a, goal) <= 1 + manhattan(b, goal));
                }
            }
        }
    }
}
