// vim: set ai et ts=4 sts=4 sw=4:
use std::collections::BTreeSet;
use log::{debug, info};
use rayon::prelude::*;

use super::{walk, Outcome, State};
use super::super::grid::{Grid, Position};

/// Outcome of the walk from `start` after a wall is added at `candidate`,
/// or `None` when the candidate is not an open cell or is the start cell.
/// The grid is never modified; each trial works on its own copy.
pub fn probe(grid: &Grid, start: State, candidate: Position) -> Option<Outcome> {
    if candidate == start.position || !grid.is_open(candidate) {
        return None;
    }
    let trial = grid.with_wall(candidate);
    Some(walk(&trial, start))
}

/// All cells where a single added wall sends the walker into a loop, in (x, y) order.
pub fn loop_inducing_obstructions(grid: &Grid, start: State) -> Vec<Position> {
    // a wall off the unobstructed route is never touched, so only the route matters
    let candidates: BTreeSet<Position> = match walk(grid, start) {
        Outcome::Exited(route) => route.into_iter().collect(),
        Outcome::Looping       => grid.open_positions().filter(|&p| p != start.position).collect(),
    };
    debug!("probing {} candidate obstructions", candidates.len());

    let hits: Vec<Position> = candidates.into_par_iter()
                                        .filter(|&c| probe(grid, start, c).map_or(false, |o| o.is_looping()))
                                        .collect();
    info!("{} obstructions cause a loop", hits.len());
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::super::grid::{Cell, GridLoader, Marker};
    use super::super::super::util::Direction;

    fn load(text: &str) -> (Grid, State) {
        let layout = GridLoader::new().facing_markers().require(Marker::Start).load(text).unwrap();
        (layout.grid, State::new(layout.start.unwrap(), layout.facing.unwrap()))
    }

    #[test]
    fn sample_has_six_looping_obstructions() {
        let (grid, start) = load("\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
");
        let hits = loop_inducing_obstructions(&grid, start);
        assert_eq!(hits.len(), 6);
        assert!(hits.contains(&Position::new(3, 6)));
        assert!(hits.contains(&Position::new(7, 9)));
    }

    #[test]
    fn start_and_walls_are_not_candidates() {
        let (grid, start) = load("#..\n.^.\n...\n");
        assert_eq!(probe(&grid, start, start.position), None);
        assert_eq!(probe(&grid, start, Position::new(0, 0)), None);
        assert_eq!(probe(&grid, start, Position::new(5, 5)), None);
    }

    #[test]
    fn probing_does_not_mutate_the_grid() {
        let (grid, start) = load("....\n.#..\n.^.#\n..#.\n");
        let before = grid.clone();
        let outcome = probe(&grid, start, Position::new(2, 1));
        assert!(outcome.is_some());
        assert_eq!(grid, before);
        assert_eq!(grid.get(Position::new(2, 1)), Cell::Open);
    }

    #[test]
    fn closing_a_box_creates_a_loop() {
        // one wall short of the boxed-in loop
        let (grid, start) = load(".#..\n....\n#^..\n..#.\n");
        assert!(!walk(&grid, start).is_looping());
        assert_eq!(probe(&grid, start, Position::new(3, 1)), Some(Outcome::Looping));
        assert_eq!(start.facing, Direction::Up);
    }

    #[test]
    fn looping_start_tries_every_open_cell() {
        let (grid, start) = load(".#..\n...#\n#^..\n..#.\n");
        assert!(walk(&grid, start).is_looping());
        assert_eq!(grid.open_positions().count(), 12);

        let hits = loop_inducing_obstructions(&grid, start);
        assert_eq!(hits, vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 3),
            Position::new(1, 3),
            Position::new(2, 0),
            Position::new(3, 0),
            Position::new(3, 2),
            Position::new(3, 3),
        ]);
        assert!(!hits.contains(&start.position));
        assert!(hits.iter().all(|&p| grid.is_open(p)));
    }
}
