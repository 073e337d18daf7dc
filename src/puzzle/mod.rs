// vim: set ai et ts=4 sw=4 sts=4:
mod patrol;
mod race;
mod ram_run;
mod print_queue;

pub use self::patrol::Patrol;
pub use self::race::RaceTrack;
pub use self::ram_run::RamRun;
pub use self::print_queue::PrintQueue;

use std::fmt;
use log::info;

use super::error::Result;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Part {
    One,
    Two,
}
impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Part::One => "Part One",
            Part::Two => "Part Two",
        })
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Answer {
    pub part: Part,
    pub value: String,
}
impl Answer {
    pub fn new<T: ToString>(part: Part, value: T) -> Self {
        Answer { part, value: value.to_string() }
    }
}
impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.part, self.value)
    }
}

pub trait Solution {
    fn name(&self) -> &'static str;
    fn part_one(&self) -> Result<Answer>;
    fn part_two(&self) -> Result<Answer>;

    fn solve(&self, part: Part) -> Result<Answer> {
        info!("{}: solving {}", self.name(), part);
        match part {
            Part::One => self.part_one(),
            Part::Two => self.part_two(),
        }
    }
}
