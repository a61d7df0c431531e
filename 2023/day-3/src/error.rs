use miette::Diagnostic;
use thiserror::Error;

/// Reasons a schematic is rejected before any query runs.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum SchematicError {
    #[error("failed to parse schematic: {message}")]
    #[diagnostic(code(schematic::parse))]
    Parse { message: String },

    #[error("row {row} is {found} cells wide, expected {expected}")]
    #[diagnostic(
        code(schematic::ragged_row),
        help("every row of the schematic must have the same width")
    )]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("number at row {row}, column {col} has {len} digits")]
    #[diagnostic(
        code(schematic::number_too_wide),
        help("part numbers are limited to 9 digits")
    )]
    NumberTooWide { row: usize, col: usize, len: usize },
}
