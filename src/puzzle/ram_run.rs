// vim: set ai et ts=4 sw=4 sts=4:
use super::{Answer, Part, Solution};
use super::super::config::RamRunConfig;
use super::super::corruption::MemorySpace;
use super::super::error::Result;

pub struct RamRun {
    pub space: MemorySpace,
    pub fallen: usize,
}

impl RamRun {
    pub fn parse(text: &str, config: &RamRunConfig) -> Self {
        RamRun {
            space: MemorySpace::parse(text, config.width, config.height),
            fallen: config.fallen,
        }
    }
}

impl Solution for RamRun {
    fn name(&self) -> &'static str { "ram-run" }

    fn part_one(&self) -> Result<Answer> {
        Ok(Answer::new(Part::One, self.space.steps_to_exit(self.fallen)?))
    }

    fn part_two(&self) -> Result<Answer> {
        Ok(match self.space.first_blocking_byte() {
            Some(pos) => Answer::new(Part::Two, format!("{},{}", pos.x, pos.y)),
            None      => Answer::new(Part::Two, "none"),
        })
    }
}
