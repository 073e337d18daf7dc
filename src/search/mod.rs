// vim: set ai et ts=4 sw=4 sts=4:
mod cheat;

pub use self::cheat::{wall_passing_reach, savings, Race, Shortcut};

use std::collections::VecDeque;
use log::trace;

use super::grid::{Grid, Position};

/// Minimum step counts from one source over open cells; `None` marks unreachable cells.
#[derive(Clone, PartialEq, Eq)]
pub struct DistanceField {
    source: Position,
    width: usize,
    distances: Vec<Option<u32>>,
}

impl DistanceField {
    pub fn source(&self) -> Position { self.source }

    fn _index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width {
            return None;
        }
        let index = pos.y as usize * self.width + pos.x as usize;
        if index < self.distances.len() { Some(index) } else { None }
    }

    pub fn get(&self, pos: Position) -> Option<u32> {
        self._index(pos).and_then(|i| self.distances[i])
    }

    pub fn reachable<'a>(&'a self) -> impl Iterator<Item=(Position, u32)> + 'a {
        let width = self.width;
        self.distances.iter()
                      .enumerate()
                      .filter_map(move |(i, d)| d.map(|d| (Position::new((i % width) as i32, (i / width) as i32), d)))
    }
}

impl std::fmt::Debug for DistanceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DistanceField(source={}, reachable={})", self.source(), self.reachable().count())
    }
}

/// Breadth-first search from `source` across open cells, unit cost per step.
pub fn distances_from(grid: &Grid, source: Position) -> DistanceField {
    let mut field = DistanceField {
        source,
        width: grid.width(),
        distances: vec![None; grid.area()],
    };
    let start = match field._index(source) {
        Some(i) => i,
        None    => return field,
    };
    field.distances[start] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back((source, 0u32));
    while let Some((current, dist)) = queue.pop_front() {
        for &next in current.neighbors().iter() {
            if !grid.is_open(next) {
                continue;
            }
            if let Some(i) = field._index(next) {
                if field.distances[i].is_none() {
                    field.distances[i] = Some(dist + 1);
                    queue.push_back((next, dist + 1));
                }
            }
        }
    }
    trace!("{:?}", field);
    field
}

pub fn shortest_path(grid: &Grid, from: Position, to: Position) -> Option<u32> {
    distances_from(grid, from).get(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::grid::Cell;
    use proptest::prelude::*;

    #[test]
    fn open_three_by_three_corner_to_corner_is_four() {
        let grid = Grid::new(3, 3);
        let field = distances_from(&grid, Position::new(0, 0));
        assert_eq!(field.get(Position::new(0, 0)), Some(0));
        assert_eq!(field.get(Position::new(2, 2)), Some(4));
        assert_eq!(field.reachable().count(), 9);
    }

    #[test]
    fn walls_force_a_detour() {
        let mut grid = Grid::new(3, 3);
        grid.set(Position::new(1, 0), Cell::Wall);
        grid.set(Position::new(1, 1), Cell::Wall);
        assert_eq!(shortest_path(&grid, Position::new(0, 0), Position::new(2, 0)), Some(6));
    }

    #[test]
    fn sealed_cells_are_unreachable() {
        let mut grid = Grid::new(3, 1);
        grid.set(Position::new(1, 0), Cell::Wall);
        let field = distances_from(&grid, Position::new(0, 0));
        assert_eq!(field.get(Position::new(2, 0)), None);
        assert_eq!(field.get(Position::new(1, 0)), None);
        assert_eq!(field.get(Position::new(-1, 0)), None);
    }

    #[test]
    fn source_outside_the_grid_reaches_nothing() {
        let grid = Grid::new(2, 2);
        let field = distances_from(&grid, Position::new(5, 5));
        assert_eq!(field.reachable().count(), 0);
    }

    proptest! {
        #[test]
        fn distances_are_one_more_than_the_best_neighbour(
            (w, h, walls) in (1usize..9, 1usize..9).prop_flat_map(|(w, h)|
                (Just(w), Just(h), proptest::collection::vec(proptest::bool::weighted(0.3), w * h))))
        {
            let mut grid = Grid::new(w, h);
            for (i, wall) in walls.into_iter().enumerate() {
                if wall {
                    grid.set(Position::new((i % w) as i32, (i / w) as i32), Cell::Wall);
                }
            }
            let source = Position::new(0, 0);
            grid.set(source, Cell::Open);
            let field = distances_from(&grid, source);

            prop_assert_eq!(field.get(source), Some(0));
            for (pos, dist) in field.reachable() {
                prop_assert!(grid.is_open(pos));
                if pos == source {
                    continue;
                }
                let best = pos.neighbors()
                              .iter()
                              .filter(|&&n| grid.is_open(n))
                              .filter_map(|&n| field.get(n))
                              .min();
                prop_assert_eq!(Some(dist), best.map(|b| b + 1));
            }
        }
    }
}
