use crate::grid::{is_digit, Grid, Position};

/// A maximal horizontal run of digits.
///
/// Identified by `(row, start_col)`: expanding from any cell of the same run
/// yields an equal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberToken {
    pub value: u64,
    pub row: usize,
    pub start_col: usize,
    /// Inclusive.
    pub end_col: usize,
}

impl NumberToken {
    /// Grows the digit at `pos` left and right to the whole run. Returns
    /// `None` when `pos` is out of bounds or doesn't hold a digit.
    pub fn expand(grid: &Grid, pos: Position) -> Option<Self> {
        if !grid.get(pos).is_some_and(is_digit) {
            return None;
        }

        let digit_at = |col: usize| grid.get(Position::new(pos.row, col)).is_some_and(is_digit);

        let mut start_col = pos.col;
        while start_col > 0 && digit_at(start_col - 1) {
            start_col -= 1;
        }
        let mut end_col = pos.col;
        while digit_at(end_col + 1) {
            end_col += 1;
        }

        let digits = grid.row(pos.row)?[start_col..=end_col]
            .iter()
            .collect::<String>();
        // Grid construction caps runs at 9 digits, so this always fits.
        let value = digits
            .parse::<u64>()
            .unwrap_or_else(|e| panic!("digit run {digits:?} at {pos} failed to parse: {e}"));

        Some(Self {
            value,
            row: pos.row,
            start_col,
            end_col,
        })
    }

    pub fn width(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    pub fn start(&self) -> Position {
        Position::new(self.row, self.start_col)
    }

    /// Every cell the number occupies, left to right.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let row = self.row;
        (self.start_col..=self.end_col).map(move |col| Position::new(row, col))
    }
}
