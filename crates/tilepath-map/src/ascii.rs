//! Text form of a [`TileGrid`].
//!
//! One character per tile, one line per row:
//!
//! | Glyph | Terrain |
//! |---|---|
//! | `.` | [`Terrain::FLOOR`] |
//! | `#` | [`Terrain::WALL`] |
//! | `~` | [`Terrain::WATER`] |
//!
//! [`TileGrid::render`] additionally marks route waypoints with `*`.

use std::fmt;

use tilepath_core::Point;

use crate::grid::{Terrain, TileGrid};

fn glyph(t: Terrain) -> char {
    match t {
        Terrain::FLOOR => '.',
        Terrain::WALL => '#',
        Terrain::WATER => '~',
        _ => '?',
    }
}

fn terrain(ch: char) -> Option<Terrain> {
    match ch {
        '.' => Some(Terrain::FLOOR),
        '#' => Some(Terrain::WALL),
        '~' => Some(Terrain::WATER),
        _ => None,
    }
}

impl TileGrid {
    /// Parse a grid from text.
    ///
    /// Surrounding blank lines and each line's leading and trailing
    /// whitespace are ignored, so maps can be written as indented string
    /// literals. Every row must have the same width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        let rows = match rows.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &rows[..=last],
            None => return Err(MapError::Empty),
        };

        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let mut n = 0;
            for (x, ch) in row.chars().enumerate() {
                let Some(t) = terrain(ch) else {
                    return Err(MapError::UnknownGlyph {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                };
                cells.push(t);
                n += 1;
            }
            if n != width {
                return Err(MapError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found: n,
                });
            }
        }
        Ok(TileGrid::from_cells(width as i32, rows.len() as i32, cells))
    }

    /// Draw the grid as text, marking every point of `path` with `*`.
    ///
    /// Points outside the grid are ignored.
    pub fn render(&self, path: &[Point]) -> String {
        let w = self.width() as usize;
        let mut chars: Vec<char> = self.iter().map(|(_, t)| glyph(t)).collect();
        for &p in path {
            if self.bounds().contains(p) {
                chars[p.y as usize * w + p.x as usize] = '*';
            }
        }
        let mut out = String::with_capacity(chars.len() + self.height() as usize);
        for row in chars.chunks(w.max(1)) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

/// Errors that can occur when parsing a [`TileGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text holds no rows.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character with no terrain meaning.
    UnknownGlyph { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no rows"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} is {found} tiles wide, expected {expected}"
            ),
            Self::UnknownGlyph { ch, pos } => {
                write!(f, "map: unknown glyph \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: &str = "
        #####
        #.~.#
        #...#
        #####
    ";

    #[test]
    fn parse_indented_literal() {
        let g = TileGrid::parse(POOL).unwrap();
        assert_eq!((g.width(), g.height()), (5, 4));
        assert_eq!(g.at(Point::new(2, 1)), Some(Terrain::WATER));
        assert_eq!(g.at(Point::new(1, 2)), Some(Terrain::FLOOR));
        assert_eq!(g.count(Terrain::WALL), 14);
    }

    #[test]
    fn display_round_trips() {
        let g = TileGrid::parse(POOL).unwrap();
        assert_eq!(TileGrid::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn render_marks_path() {
        let g = TileGrid::parse("...\n...").unwrap();
        let out = g.render(&[Point::new(1, 0), Point::new(2, 1), Point::new(9, 9)]);
        assert_eq!(out, ".*.\n..*\n");
    }

    #[test]
    fn inconsistent_width() {
        let err = TileGrid::parse("...\n..\n...").unwrap_err();
        assert_eq!(
            err,
            MapError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn unknown_glyph() {
        let err = TileGrid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            MapError::UnknownGlyph {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert_eq!(err.to_string(), "map: unknown glyph \u{201c}x\u{201d} at (1, 1)");
    }

    #[test]
    fn empty_text() {
        assert_eq!(TileGrid::parse("  \n\n").unwrap_err(), MapError::Empty);
    }
}
