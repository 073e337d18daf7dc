// vim: set ai et ts=4 sw=4 sts=4:
use std::collections::HashSet;

use super::{Answer, Part, Solution};
use super::super::grid::{Grid, GridLoader, Marker};
use super::super::walker::{walk, loop_inducing_obstructions, Outcome, State};
use super::super::render::render;
use super::super::error::{Error, Result};

/// Guard patrol: a walker that turns right at every wall.
pub struct Patrol {
    pub grid: Grid,
    pub start: State,
}

impl Patrol {
    pub fn parse(text: &str) -> Result<Self> {
        let layout = GridLoader::new()
            .facing_markers()
            .require(Marker::Start)
            .load(text)?;
        let start = State::new(layout.start()?, layout.facing()?);
        Ok(Patrol { grid: layout.grid, start })
    }

    /// The grid with the unobstructed route drawn over it.
    pub fn show(&self, emit_color: bool) -> String {
        let route = match walk(&self.grid, self.start) {
            Outcome::Exited(visited) => visited,
            Outcome::Looping         => HashSet::new(),
        };
        render(&self.grid, &route, Some(self.start), emit_color)
    }
}

impl Solution for Patrol {
    fn name(&self) -> &'static str { "patrol" }

    fn part_one(&self) -> Result<Answer> {
        match walk(&self.grid, self.start) {
            Outcome::Exited(visited) => Ok(Answer::new(Part::One, visited.len())),
            Outcome::Looping         => Err(Error::NeverExits(self.start.position)),
        }
    }

    fn part_two(&self) -> Result<Answer> {
        let hits = loop_inducing_obstructions(&self.grid, self.start);
        Ok(Answer::new(Part::Two, hits.len()))
    }
}
