// vim: set ai et ts=4 sw=4 sts=4:
use log::{debug, warn};

use super::grid::{Cell, Grid, Position};
use super::search::shortest_path;
use super::error::{Error, Result};

/// A square memory space that bytes fall into, one per line of input (`x,y`).
pub struct MemorySpace {
    width: usize,
    height: usize,
    bytes: Vec<Position>,
}

impl MemorySpace {
    /// Lines that do not parse, and bytes outside the space, are skipped with a warning.
    pub fn parse(text: &str, width: usize, height: usize) -> Self {
        let mut space = MemorySpace { width, height, bytes: Vec::new() };
        let bounds = Grid::new(width, height);
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match Self::_parse_byte(i + 1, line) {
                Ok(pos) if bounds.contains(pos) => space.bytes.push(pos),
                Ok(pos) => warn!("skipping byte {} outside the {}x{} space", pos, width, height),
                Err(e)  => warn!("skipping line: {}", e),
            }
        }
        space
    }

    fn _parse_byte(line_no: usize, line: &str) -> Result<Position> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 2 {
            return Err(Error::malformed_record(line_no, line, "expected x,y"));
        }
        match (parts[0].trim().parse(), parts[1].trim().parse()) {
            (Ok(x), Ok(y)) => Ok(Position::new(x, y)),
            _ => Err(Error::malformed_record(line_no, line, "coordinates must be integers")),
        }
    }

    pub fn bytes(&self) -> &[Position] { &self.bytes }
    pub fn start(&self) -> Position { Position::new(0, 0) }
    pub fn exit(&self) -> Position { Position::new(self.width as i32 - 1, self.height as i32 - 1) }

    /// The space after the first `fallen` bytes have landed. Bytes on the start
    /// or the exit never corrupt those cells.
    pub fn corrupted(&self, fallen: usize) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        for &pos in self.bytes.iter().take(fallen) {
            if pos == self.start() || pos == self.exit() {
                continue;
            }
            grid.set(pos, Cell::Wall);
        }
        grid
    }

    pub fn steps_to_exit(&self, fallen: usize) -> Result<u32> {
        let grid = self.corrupted(fallen);
        shortest_path(&grid, self.start(), self.exit())
            .ok_or(Error::Unreachable(self.start(), self.exit()))
    }

    fn _is_blocked(&self, fallen: usize) -> bool {
        shortest_path(&self.corrupted(fallen), self.start(), self.exit()).is_none()
    }

    /// The first byte whose landing cuts the start off from the exit.
    pub fn first_blocking_byte(&self) -> Option<Position> {
        if !self._is_blocked(self.bytes.len()) {
            return None;
        }
        // blocked(n) is monotone in n; find the smallest blocked prefix
        let mut lo = 0;
        let mut hi = self.bytes.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self._is_blocked(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        debug!("path closes after {} bytes", lo);
        lo.checked_sub(1).map(|i| self.bytes[i])
    }
}
