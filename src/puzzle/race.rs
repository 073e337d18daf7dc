// vim: set ai et ts=4 sw=4 sts=4:
use log::info;

use super::{Answer, Part, Solution};
use super::super::config::RaceConfig;
use super::super::grid::{Grid, GridLoader, Marker, Position};
use super::super::search::Race;
use super::super::error::Result;

pub struct RaceTrack {
    pub grid: Grid,
    pub start: Position,
    pub end: Position,
    pub min_savings: u32,
    pub short_budget: u32,
    pub long_budget: u32,
}

impl RaceTrack {
    pub fn parse(text: &str, config: &RaceConfig) -> Result<Self> {
        let layout = GridLoader::new()
            .marker('S', Marker::Start)
            .marker('E', Marker::End)
            .require(Marker::Start)
            .require(Marker::End)
            .load(text)?;
        Ok(RaceTrack {
            start: layout.start()?,
            end: layout.end()?,
            grid: layout.grid,
            min_savings: config.min_savings,
            short_budget: config.short_budget,
            long_budget: config.long_budget,
        })
    }

    fn _count(&self, budget: u32) -> Result<usize> {
        let race = Race::new(&self.grid, self.start, self.end)?;
        info!("track is {} steps long without shortcuts", race.baseline());
        Ok(race.shortcuts(budget, self.min_savings).len())
    }
}

impl Solution for RaceTrack {
    fn name(&self) -> &'static str { "race" }

    fn part_one(&self) -> Result<Answer> {
        Ok(Answer::new(Part::One, self._count(self.short_budget)?))
    }

    fn part_two(&self) -> Result<Answer> {
        Ok(Answer::new(Part::Two, self._count(self.long_budget)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use super::super::super::error::Error;

    fn config(min_savings: u32) -> RaceConfig {
        RaceConfig {
            input: PathBuf::from("unused"),
            min_savings,
            short_budget: 2,
            long_budget: 20,
        }
    }

    const SAMPLE: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    #[test]
    fn sample_answers() {
        let track = RaceTrack::parse(SAMPLE, &config(64)).unwrap();
        assert_eq!(track.solve(Part::One).unwrap(), Answer::new(Part::One, 1));
        let track = RaceTrack::parse(SAMPLE, &config(76)).unwrap();
        assert_eq!(track.solve(Part::Two).unwrap(), Answer::new(Part::Two, 3));
    }

    #[test]
    fn both_markers_are_required() {
        assert!(matches!(RaceTrack::parse("S..\n", &config(1)), Err(Error::MissingMarker("end"))));
    }

    #[test]
    fn blocked_track_fails_the_part() {
        let track = RaceTrack::parse("S#E\n", &config(1)).unwrap();
        assert!(matches!(track.solve(Part::One), Err(Error::Unreachable(_, _))));
    }
}
