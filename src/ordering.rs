// vim: set ai et ts=4 sw=4 sts=4:
use std::collections::{HashMap, HashSet, VecDeque};
use log::warn;

use super::error::{Error, Result};

/// `before|after`: when both pages are in an update, `before` must come first.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Rule {
    pub before: u32,
    pub after: u32,
}
impl Rule {
    pub fn new(before: u32, after: u32) -> Self {
        Rule { before, after }
    }
}

#[derive(PartialEq, Debug, Default)]
pub struct Manual {
    pub rules: Vec<Rule>,
    pub updates: Vec<Vec<u32>>,
}

impl Manual {
    /// Parses rule lines (`X|Y`) and update lines (`A,B,C`). Lines that fit
    /// neither shape, or carry bad numbers, are skipped with a warning.
    pub fn parse(text: &str) -> Self {
        let mut manual = Manual::default();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let parsed = if line.contains('|') {
                Self::_parse_rule(i + 1, line).map(|r| manual.rules.push(r))
            } else if line.contains(',') {
                Self::_parse_update(i + 1, line).map(|u| manual.updates.push(u))
            } else {
                Err(Error::malformed_record(i + 1, line, "neither a rule nor an update"))
            };
            if let Err(e) = parsed {
                warn!("skipping line: {}", e);
            }
        }
        manual
    }

    fn _parse_rule(line_no: usize, line: &str) -> Result<Rule> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != 2 {
            return Err(Error::malformed_record(line_no, line, "a rule has exactly two pages"));
        }
        match (parts[0].trim().parse(), parts[1].trim().parse()) {
            (Ok(before), Ok(after)) => Ok(Rule::new(before, after)),
            _ => Err(Error::malformed_record(line_no, line, "page numbers must be integers")),
        }
    }

    fn _parse_update(line_no: usize, line: &str) -> Result<Vec<u32>> {
        line.split(',')
            .map(|page| page.trim()
                            .parse()
                            .map_err(|_| Error::malformed_record(line_no, line, "page numbers must be integers")))
            .collect()
    }
}

/// True when no page is followed by a page that a rule says must precede it.
/// Repeated pages are checked at every occurrence.
pub fn is_ordered(rules: &[Rule], update: &[u32]) -> bool {
    let rules: HashSet<Rule> = rules.iter().cloned().collect();
    update.iter().enumerate().all(|(i, &earlier)| {
        update[i + 1..].iter().all(|&later| !rules.contains(&Rule::new(later, earlier)))
    })
}

/// Reorders `update` so every applicable rule holds. Pages with no constraint
/// between them keep their relative order of appearance.
pub fn reorder(rules: &[Rule], update: &[u32]) -> Result<Vec<u32>> {
    // graph nodes are slots in the update, so a repeated page is constrained once per occurrence
    let mut slots: HashMap<u32, Vec<usize>> = HashMap::new();
    for (i, &page) in update.iter().enumerate() {
        slots.entry(page).or_insert_with(Vec::new).push(i);
    }
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); update.len()];
    let mut in_degree: Vec<usize> = vec![0; update.len()];

    for rule in rules {
        if let (Some(before), Some(after)) = (slots.get(&rule.before), slots.get(&rule.after)) {
            for &b in before {
                for &a in after.iter().filter(|&&a| a != b) {
                    successors[b].push(a);
                    in_degree[a] += 1;
                }
            }
        }
    }

    let mut queue: VecDeque<usize> = (0..update.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut sorted = Vec::with_capacity(update.len());
    while let Some(slot) = queue.pop_front() {
        sorted.push(update[slot]);
        for &next in &successors[slot] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    if sorted.len() != update.len() {
        return Err(Error::CycleDetected(update.to_vec()));
    }
    Ok(sorted)
}

pub fn middle(update: &[u32]) -> Option<u32> {
    update.get(update.len() / 2).cloned()
}
