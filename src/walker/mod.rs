// vim: set ai et ts=4 sw=4 sts=4:
mod probe;

pub use self::probe::{probe, loop_inducing_obstructions};

use std::collections::HashSet;
use log::trace;

use super::grid::{Cell, Grid, Position};
use super::util::Direction;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct State {
    pub position: Position,
    pub facing: Direction,
}
impl State {
    pub fn new(position: Position, facing: Direction) -> Self {
        State { position, facing }
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Outcome {
    Exited(HashSet<Position>), // distinct positions visited, start included
    Looping,
}
impl Outcome {
    pub fn is_looping(&self) -> bool {
        matches!(self, Outcome::Looping)
    }
    pub fn visited(&self) -> Option<&HashSet<Position>> {
        match self {
            Outcome::Exited(visited) => Some(visited),
            Outcome::Looping         => None,
        }
    }
}

/// Deterministic walk over a grid: move forward until the cell ahead is a wall,
/// then turn right in place. Yields the state reached after every step or turn,
/// and stops once the cell ahead is outside the grid or a state repeats.
pub struct Walker<'a> {
    grid: &'a Grid,
    state: State,
    seen: HashSet<State>,
    visited: HashSet<Position>,
    outcome: Option<Outcome>,
}

impl<'a> Walker<'a> {
    pub fn new(grid: &'a Grid, start: State) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.position);
        Walker {
            grid,
            state: start,
            seen: HashSet::new(),
            visited,
            outcome: None,
        }
    }

    pub fn visited(&self) -> &HashSet<Position> { &self.visited }

    /// Set once the walk has terminated.
    pub fn outcome(&self) -> Option<&Outcome> { self.outcome.as_ref() }

    fn advance(&mut self) -> Option<State> {
        if self.outcome.is_some() {
            return None;
        }
        if !self.seen.insert(self.state) {
            trace!("state {:?} repeated", self.state);
            self.outcome = Some(Outcome::Looping);
            return None;
        }

        let ahead = self.state.position.step(self.state.facing);
        match self.grid.get(ahead) {
            Cell::Boundary => {
                trace!("leaving the grid from {}", self.state.position);
                self.outcome = Some(Outcome::Exited(self.visited.clone()));
                return None;
            },
            Cell::Wall => {
                self.state.facing = self.state.facing.turn_right();
            },
            Cell::Open => {
                self.state.position = ahead;
                self.visited.insert(ahead);
            },
        }
        Some(self.state)
    }

    /// Runs the walk to completion.
    pub fn run(mut self) -> Outcome {
        while self.advance().is_some() {}
        match self.outcome {
            Some(outcome) => outcome,
            None          => unreachable!("walker stopped without an outcome"),
        }
    }
}

impl<'a> Iterator for Walker<'a> {
    type Item = State;
    fn next(&mut self) -> Option<State> {
        self.advance()
    }
}

pub fn walk(grid: &Grid, start: State) -> Outcome {
    Walker::new(grid, start).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::grid::{GridLoader, Marker};
    use proptest::prelude::*;

    fn load(text: &str) -> (Grid, State) {
        let layout = GridLoader::new().facing_markers().require(Marker::Start).load(text).unwrap();
        let start = State::new(layout.start.unwrap(), layout.facing.unwrap());
        (layout.grid, start)
    }

    const SAMPLE: &str = "\
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
";

    #[test]
    fn short_walk_exits_with_non_decreasing_visited_count() {
        let (grid, start) = load("....#\n.....\n..^..\n");
        assert_eq!(start, State::new(Position::new(2, 2), Direction::Up));

        let mut walker = Walker::new(&grid, start);
        let mut last = walker.visited().len();
        while let Some(_) = walker.next() {
            let count = walker.visited().len();
            assert!(count >= last);
            last = count;
        }
        match walker.outcome() {
            Some(Outcome::Exited(visited)) => {
                assert_eq!(visited.len(), 3);
                assert!(visited.contains(&Position::new(2, 0)));
            },
            other => panic!("expected Exited, got {:?}", other),
        }
    }

    #[test]
    fn sample_route_visits_41_positions() {
        let (grid, start) = load(SAMPLE);
        let outcome = walk(&grid, start);
        assert_eq!(outcome.visited().map(|v| v.len()), Some(41));
    }

    #[test]
    fn walls_make_the_walker_turn_in_place() {
        let (grid, start) = load(".#.\n.^.\n...\n");
        let mut walker = Walker::new(&grid, start);
        assert_eq!(walker.next(), Some(State::new(Position::new(1, 1), Direction::Right)));
        assert_eq!(walker.next(), Some(State::new(Position::new(2, 1), Direction::Right)));
        assert_eq!(walker.next(), None);
        assert!(!walker.outcome().unwrap().is_looping());
    }

    #[test]
    fn boxed_in_walker_loops() {
        let (grid, start) = load(".#..\n...#\n#^..\n..#.\n");
        assert_eq!(walk(&grid, start), Outcome::Looping);
    }

    #[test]
    fn fully_enclosed_walker_spins_then_loops() {
        let (grid, start) = load(".#.\n#^#\n.#.\n");
        let steps = Walker::new(&grid, start).count();
        assert_eq!(steps, 4);
        assert_eq!(walk(&grid, start), Outcome::Looping);
    }

    fn arb_grid() -> impl Strategy<Value = (Grid, State)> {
        (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
            (
                proptest::collection::vec(proptest::bool::weighted(0.25), w * h),
                0..w,
                0..h,
                0usize..4,
            ).prop_map(move |(walls, sx, sy, d)| {
                let mut grid = Grid::new(w, h);
                for (i, wall) in walls.into_iter().enumerate() {
                    if wall {
                        grid.set(Position::new((i % w) as i32, (i / w) as i32), Cell::Wall);
                    }
                }
                let start = Position::new(sx as i32, sy as i32);
                grid.set(start, Cell::Open);
                (grid, State::new(start, Direction::ALL[d]))
            })
        })
    }

    proptest! {
        #[test]
        fn walker_terminates_within_the_state_space((grid, start) in arb_grid()) {
            let mut walker = Walker::new(&grid, start);
            let bound = grid.area() * 4;
            let mut steps = 0;
            while walker.next().is_some() {
                steps += 1;
                prop_assert!(steps <= bound);
            }
            prop_assert!(walker.outcome().is_some());
        }

        #[test]
        fn exited_and_looping_are_exclusive((grid, start) in arb_grid()) {
            let outcome = walk(&grid, start);
            prop_assert_ne!(outcome.is_looping(), outcome.visited().is_some());
            if let Some(visited) = outcome.visited() {
                prop_assert!(visited.contains(&start.position));
                prop_assert!(visited.iter().all(|&p| grid.is_open(p)));
            }
        }
    }
}
