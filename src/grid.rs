// vim: set ai et ts=4 sts=4:
use std::fmt;
use std::collections::HashMap;
use log::{debug, warn};

use super::util::Direction;
use super::error::{Error, Result};

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Cell {
    Open,
    Wall,
    Boundary,
}
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Cell::Open     => ".",
            Cell::Wall     => "#",
            Cell::Boundary => " ",
        })
    }
}

// ------------------------------------------------

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}
impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Position::new(self.x + dx, self.y + dy)
    }
    pub fn neighbors(self) -> [Position; 4] {
        [
            self.step(Direction::Up),
            self.step(Direction::Right),
            self.step(Direction::Down),
            self.step(Direction::Left),
        ]
    }
}
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

// ------------------------------------------------

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}
impl Grid {
    /// All-open grid of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            cells: vec![vec![Cell::Open; width]; height],
        }
    }

    pub fn width(&self) -> usize { self.cells.first().map_or(0, |row| row.len()) }
    pub fn height(&self) -> usize { self.cells.len() }
    pub fn area(&self) -> usize { self.width() * self.height() }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0
            && (pos.x as usize) < self.width()
            && (pos.y as usize) < self.height()
    }

    /// Cell kind at `pos`; anything outside the grid is `Boundary`.
    pub fn get(&self, pos: Position) -> Cell {
        if !self.contains(pos) {
            return Cell::Boundary;
        }
        self.cells[pos.y as usize][pos.x as usize]
    }
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Open
    }

    /// Positions outside the grid are left alone; returns whether the cell was written.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        if !self.contains(pos) || cell == Cell::Boundary {
            return false;
        }
        self.cells[pos.y as usize][pos.x as usize] = cell;
        true
    }

    /// Independent copy of this grid with a wall placed at `pos`.
    pub fn with_wall(&self, pos: Position) -> Grid {
        let mut copy = self.clone();
        copy.set(pos, Cell::Wall);
        copy
    }

    pub fn positions(&self) -> impl Iterator<Item=Position> {
        let width = self.width() as i32;
        let height = self.height() as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
    pub fn open_positions<'a>(&'a self) -> impl Iterator<Item=Position> + 'a {
        self.positions().filter(move |&p| self.is_open(p))
    }
}
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(w={}, h={})", self.width(), self.height())
    }
}
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ------------------------------------------------

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Marker {
    Start,
    End,
}
impl Marker {
    pub fn name(self) -> &'static str {
        match self {
            Marker::Start => "start",
            Marker::End   => "end",
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum Glyph {
    Open,
    Wall,
    Marker(Marker),
    Facing(Direction),  // start marker that also sets the initial facing
}

/// A loaded grid together with the positions its markers designated.
#[derive(Clone, Debug)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Position>,
    pub end: Option<Position>,
    pub facing: Option<Direction>,
}
impl Layout {
    pub fn start(&self) -> Result<Position> {
        self.start.ok_or(Error::MissingMarker(Marker::Start.name()))
    }
    pub fn end(&self) -> Result<Position> {
        self.end.ok_or(Error::MissingMarker(Marker::End.name()))
    }
    pub fn facing(&self) -> Result<Direction> {
        self.facing.ok_or(Error::MissingMarker("facing"))
    }
}

pub struct GridLoader {
    glyphs: HashMap<char, Glyph>,
    required: Vec<Marker>,
}
impl GridLoader {
    pub fn new() -> Self {
        let mut glyphs = HashMap::new();
        glyphs.insert('.', Glyph::Open);
        glyphs.insert('#', Glyph::Wall);
        GridLoader {
            glyphs,
            required: Vec::new(),
        }
    }
    pub fn marker(mut self, glyph: char, marker: Marker) -> Self {
        self.glyphs.insert(glyph, Glyph::Marker(marker));
        self
    }
    /// Recognise `^ > v <` as the start position plus its initial facing.
    pub fn facing_markers(mut self) -> Self {
        for &dir in Direction::ALL.iter() {
            self.glyphs.insert(dir.glyph(), Glyph::Facing(dir));
        }
        self
    }
    pub fn require(mut self, marker: Marker) -> Self {
        self.required.push(marker);
        self
    }

    pub fn load(&self, text: &str) -> Result<Layout> {
        let mut lines: Vec<&str> = text.lines().skip_while(|l| l.is_empty()).collect();
        while lines.last().map_or(false, |l| l.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(Error::MalformedGrid("input contains no rows".to_string()));
        }

        let width = lines[0].chars().count();
        let mut grid = Grid::new(width, lines.len());
        let mut start: Option<Position> = None;
        let mut end: Option<Position> = None;
        let mut facing: Option<Direction> = None;

        for (y, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(Error::MalformedGrid(
                    format!("row {} has length {}, expected {}", y, len, width)));
            }
            for (x, c) in line.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                let glyph = match self.glyphs.get(&c) {
                    Some(glyph) => *glyph,
                    None => return Err(Error::MalformedGrid(
                        format!("unexpected symbol {:?} at row {}, column {}", c, y, x))),
                };
                match glyph {
                    Glyph::Open => {},
                    Glyph::Wall => { grid.set(pos, Cell::Wall); },
                    Glyph::Marker(Marker::Start) => Self::_record(&mut start, pos, c),
                    Glyph::Marker(Marker::End)   => Self::_record(&mut end, pos, c),
                    Glyph::Facing(dir) => {
                        if start.is_none() {
                            facing = Some(dir);
                        }
                        Self::_record(&mut start, pos, c);
                    },
                }
            }
        }

        for marker in &self.required {
            let found = match marker {
                Marker::Start => start.is_some(),
                Marker::End   => end.is_some(),
            };
            if !found {
                return Err(Error::MissingMarker(marker.name()));
            }
        }

        debug!("loaded grid {}x{}, start={:?}, end={:?}, facing={:?}",
               grid.width(), grid.height(), start, end, facing);
        Ok(Layout { grid, start, end, facing })
    }

    fn _record(slot: &mut Option<Position>, pos: Position, glyph: char) {
        match *slot {
            Some(first) => warn!("ignoring duplicate marker {:?} at {}, keeping {}", glyph, pos, first),
            None        => *slot = Some(pos),
        }
    }
}
