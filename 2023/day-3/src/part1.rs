use miette::*;

use crate::config::ScanConfig;
use crate::engine::sum_adjacent_to_any_symbol;
use crate::grid::parse_schematic;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parse_schematic(input)?;
    let total = sum_adjacent_to_any_symbol(&grid, ScanConfig::default());

    Ok(total.to_string())
}
