// vim: set ai et ts=4 sw=4 sts=4:
use std::collections::HashSet;
use ansi_term::{ANSIString, Colour, Style};

use super::grid::{Cell, Grid, Position};
use super::util::maybe_color;
use super::walker::State;

fn _fmt_line(left_delim: &str,
             right_delim: &str,
             content_parts: &[String])
    -> String
{
    let mut result = String::from(left_delim);
    for s in content_parts {
        result.push_str(s);
    }
    result.push_str(right_delim);
    result.push('\n');
    result
}

fn _cell_glyph(grid: &Grid, pos: Position, route: &HashSet<Position>, start: Option<State>) -> ANSIString<'static> {
    if let Some(state) = start {
        if state.position == pos {
            return Colour::Green.bold().paint(state.facing.glyph().to_string());
        }
    }
    match grid.get(pos) {
        Cell::Wall => Style::new().fg(Colour::Fixed(241)).paint("#"),
        _ if route.contains(&pos) => Colour::Yellow.paint("X"),
        _ => Style::default().paint("."),
    }
}

/// Draws the grid in a box frame, with the route marked `X` and the start
/// shown by its facing glyph.
pub fn render(grid: &Grid, route: &HashSet<Position>, start: Option<State>, emit_color: bool) -> String {
    let horizontal = (0..grid.width()).map(|_| String::from("\u{2550}"))
                                      .collect::<Vec<_>>();
    let mut result = _fmt_line("\u{2554}", "\u{2557}", &horizontal);
    for y in 0..grid.height() {
        let parts = (0..grid.width()).map(|x| Position::new(x as i32, y as i32))
                                     .map(|pos| maybe_color(&_cell_glyph(grid, pos, route, start), emit_color))
                                     .collect::<Vec<_>>();
        result.push_str(&_fmt_line("\u{2551}", "\u{2551}", &parts));
    }
    result.push_str(&_fmt_line("\u{255A}", "\u{255D}", &horizontal));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::util::Direction;

    #[test]
    fn plain_rendering_frames_the_route() {
        let mut grid = Grid::new(3, 2);
        grid.set(Position::new(2, 0), Cell::Wall);
        let route: HashSet<Position> = vec![Position::new(0, 1), Position::new(0, 0), Position::new(1, 0)]
            .into_iter()
            .collect();
        let start = State::new(Position::new(0, 1), Direction::Up);

        let text = render(&grid, &route, Some(start), false);
        assert_eq!(text, "\
\u{2554}\u{2550}\u{2550}\u{2550}\u{2557}
\u{2551}XX#\u{2551}
\u{2551}^..\u{2551}
\u{255A}\u{2550}\u{2550}\u{2550}\u{255D}
");
    }

    #[test]
    fn colored_rendering_contains_escape_codes() {
        let grid = Grid::new(1, 1);
        let text = render(&grid, &HashSet::new(), Some(State::new(Position::new(0, 0), Direction::Left)), true);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains('<'));
    }
}
