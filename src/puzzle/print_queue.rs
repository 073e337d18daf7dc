// vim: set ai et ts=4 sw=4 sts=4:
use log::{info, warn};

use super::{Answer, Part, Solution};
use super::super::ordering::{is_ordered, middle, reorder, Manual};
use super::super::error::Result;

pub struct PrintQueue {
    pub manual: Manual,
}

impl PrintQueue {
    pub fn parse(text: &str) -> Self {
        PrintQueue { manual: Manual::parse(text) }
    }
}

impl Solution for PrintQueue {
    fn name(&self) -> &'static str { "print-queue" }

    fn part_one(&self) -> Result<Answer> {
        let sum: u64 = self.manual.updates.iter()
                                          .filter(|u| is_ordered(&self.manual.rules, u))
                                          .filter_map(|u| middle(u))
                                          .map(u64::from)
                                          .sum();
        Ok(Answer::new(Part::One, sum))
    }

    fn part_two(&self) -> Result<Answer> {
        let mut sum: u64 = 0;
        for (i, update) in self.manual.updates.iter().enumerate() {
            if is_ordered(&self.manual.rules, update) {
                continue;
            }
            match reorder(&self.manual.rules, update) {
                Ok(sorted) => {
                    info!("update {} reordered: {:?} -> {:?}", i + 1, update, sorted);
                    sum += middle(&sorted).map_or(0, u64::from);
                },
                Err(e) => warn!("skipping update {}: {}", i + 1, e),
            }
        }
        Ok(Answer::new(Part::Two, sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_updates_are_skipped() {
        let queue = PrintQueue::parse("1|2\n2|3\n3|1\n\n3,1,2\n5,9,7\n7,8\n");
        assert_eq!(queue.solve(Part::One).unwrap(), Answer::new(Part::One, 9 + 8));
        assert_eq!(queue.solve(Part::Two).unwrap(), Answer::new(Part::Two, 0));
    }

    #[test]
    fn out_of_order_update_is_corrected() {
        let queue = PrintQueue::parse("1|2\n2|3\n\n3,1,2\n");
        assert_eq!(queue.solve(Part::One).unwrap().value, "0");
        assert_eq!(queue.solve(Part::Two).unwrap().value, "2");
    }
}
