use std::fmt;
use std::ops::Index;

use chumsky::prelude::*;
use itertools::{iproduct, Itertools};

use crate::config::ScanConfig;
use crate::error::SchematicError;

/// Longest accepted digit run. Keeps every value below 10^9, so a gear ratio
/// stays below 10^18 and summing one per cell can't overflow a `u128`.
pub const MAX_NUMBER_DIGITS: usize = 9;

/// Moore neighbourhood, row-major so enumeration order is stable.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_empty(c: char, config: ScanConfig) -> bool {
    c == config.empty
}

/// Anything that is neither a digit nor filler.
pub fn is_symbol(c: char, config: ScanConfig) -> bool {
    !is_digit(c) && !is_empty(c, config)
}

pub fn matches_target(c: char, target: char) -> bool {
    c == target
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Inclusive containment in the rectangle spanned by `min` and `max`.
    pub fn within(self, min: Position, max: Position) -> bool {
        (min.row..=max.row).contains(&self.row) && (min.col..=max.col).contains(&self.col)
    }

    fn offset(self, dr: isize, dc: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable, rectangular engine schematic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Builds a grid from an already split list of lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, SchematicError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect())
            .collect::<Vec<Vec<char>>>();
        Self::from_rows(rows)
    }

    /// Validates and flattens rows. Every row must match the first row's
    /// width and no digit run may be wider than [`MAX_NUMBER_DIGITS`].
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, SchematicError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(SchematicError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }

            let runs = cells
                .iter()
                .enumerate()
                .chunk_by(|&(_, &c)| is_digit(c));
            for (digits, run) in &runs {
                let run = run.collect::<Vec<_>>();
                if digits && run.len() > MAX_NUMBER_DIGITS {
                    return Err(SchematicError::NumberTooWide {
                        row,
                        col: run[0].0,
                        len: run.len(),
                    });
                }
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bottom-right cell, `None` for an empty grid.
    pub fn last_position(&self) -> Option<Position> {
        Some(Position {
            row: self.height.checked_sub(1)?,
            col: self.width.checked_sub(1)?,
        })
    }

    /// Bounds use the last valid index, not the row/column count.
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.last_position()
            .is_some_and(|last| pos.within(Position::ORIGIN, last))
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.in_bounds(pos)
            .then(|| self.cells[pos.row * self.width + pos.col])
    }

    pub fn row(&self, row: usize) -> Option<&[char]> {
        (row < self.height).then(|| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.height, 0..self.width).map(|(row, col)| Position::new(row, col))
    }

    /// In-bounds Moore neighbours of `pos`, at most eight.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        OFFSETS.iter().filter_map(move |&(dr, dc)| {
            pos.offset(dr, dc)
                .filter(|&candidate| self.in_bounds(candidate))
        })
    }
}

impl Index<Position> for Grid {
    type Output = char;

    fn index(&self, pos: Position) -> &char {
        assert!(
            self.in_bounds(pos),
            "{pos} is outside the {}x{} schematic",
            self.height,
            self.width
        );
        &self.cells[pos.row * self.width + pos.col]
    }
}

/// Splits the schematic into rows of cells.
///
/// Only blank rows at the end are dropped (trailing newlines at EOF). A blank
/// row in the middle is kept so grid construction rejects it as ragged
/// instead of gluing its neighbours together.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<char>>, extra::Err<Rich<'a, char>>> {
    none_of("\r\n")
        .repeated()
        .collect::<Vec<char>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|mut rows: Vec<Vec<char>>| {
            while rows.last().is_some_and(Vec::is_empty) {
                rows.pop();
            }
            rows
        })
}

pub fn parse_schematic(input: &str) -> Result<Grid, SchematicError> {
    let rows = parser()
        .parse(input)
        .into_result()
        .map_err(|errors| SchematicError::Parse {
            message: format!("{:?}", errors),
        })?;
    Grid::from_rows(rows)
}
