//! Day 3: Gear Ratios.
//!
//! The engine schematic is a rectangular grid of digits, filler cells and
//! symbols. Part one sums every number touching a symbol, part two sums the
//! ratios of gears touching exactly two numbers.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod number;
pub mod part1;
pub mod part2;

pub use config::{ScanConfig, EMPTY_CHAR, GEAR_CHAR};
pub use engine::{sum_adjacent_to_any_symbol, sum_gear_products, Gear};
pub use error::SchematicError;
pub use grid::{parse_schematic, Grid, Position};
pub use number::NumberToken;
