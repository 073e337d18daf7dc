// vim: set ai et ts=4 sts=4 sw=4:
use std::collections::{BTreeMap, HashMap, VecDeque};
use log::debug;

use super::{distances_from, DistanceField};
use super::super::grid::{Grid, Position};
use super::super::error::{Error, Result};

/// Every in-grid position within `budget` steps of `from` when walls are passable,
/// mapped to the fewest steps that reach it.
pub fn wall_passing_reach(grid: &Grid, from: Position, budget: u32) -> HashMap<Position, u32> {
    let mut reached = HashMap::new();
    if !grid.contains(from) {
        return reached;
    }
    reached.insert(from, 0);

    let mut queue = VecDeque::new();
    queue.push_back((from, 0u32));
    while let Some((current, steps)) = queue.pop_front() {
        if steps >= budget {
            continue;
        }
        for &next in current.neighbors().iter() {
            if !grid.contains(next) {
                continue;
            }
            let next_steps = steps + 1;
            let shorter = reached.get(&next).map_or(true, |&known| next_steps < known);
            if shorter {
                reached.insert(next, next_steps);
                queue.push_back((next, next_steps));
            }
        }
    }
    reached
}

/// Steps saved by a shortcut: negative when the detour is longer than the baseline.
pub fn savings(baseline: u32, before: u32, cheat: u32, after: u32) -> i64 {
    baseline as i64 - (before as i64 + cheat as i64 + after as i64)
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Shortcut {
    pub from: Position,
    pub to: Position,
    pub steps: u32,
    pub savings: u32,
}

/// Distance fields from both ends of a track, used to score shortcuts against
/// the baseline shortest path.
pub struct Race<'a> {
    grid: &'a Grid,
    from_start: DistanceField,
    from_end: DistanceField,
    baseline: u32,
}

impl<'a> Race<'a> {
    pub fn new(grid: &'a Grid, start: Position, end: Position) -> Result<Self> {
        let from_start = distances_from(grid, start);
        let from_end = distances_from(grid, end);
        let baseline = from_start.get(end).ok_or(Error::Unreachable(start, end))?;
        debug!("baseline path from {} to {} takes {} steps", start, end, baseline);
        Ok(Race { grid, from_start, from_end, baseline })
    }

    pub fn baseline(&self) -> u32 { self.baseline }

    /// Shortcuts of at most `budget` steps that save at least `min_savings`,
    /// one per (from, to) pair, ordered by that pair.
    pub fn shortcuts(&self, budget: u32, min_savings: u32) -> Vec<Shortcut> {
        let mut found: BTreeMap<(Position, Position), Shortcut> = BTreeMap::new();

        for (p1, before) in self.from_start.reachable() {
            let on_best_path = self.from_end.get(p1).map_or(false, |d| before + d == self.baseline);
            if !on_best_path {
                continue;
            }
            for (p2, steps) in wall_passing_reach(self.grid, p1, budget) {
                if !self.grid.is_open(p2) {
                    continue;
                }
                let after = match self.from_end.get(p2) {
                    Some(d) => d,
                    None    => continue,
                };
                let saved = savings(self.baseline, before, steps, after);
                if saved >= min_savings as i64 {
                    found.insert((p1, p2), Shortcut { from: p1, to: p2, steps, savings: saved as u32 });
                }
            }
        }
        debug!("{} shortcuts within {} steps save at least {}", found.len(), budget, min_savings);
        found.into_iter().map(|(_, s)| s).collect()
    }
}
