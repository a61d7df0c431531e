use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::grid::{is_digit, is_symbol, matches_target, Grid, Position};
use crate::number::NumberToken;

/// Cells already attributed to a counted number.
#[derive(Debug, Default)]
struct VisitedSet {
    cells: HashSet<Position>,
}

impl VisitedSet {
    fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    fn mark(&mut self, token: &NumberToken) {
        self.cells.extend(token.positions());
    }
}

/// A gear symbol touching exactly two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gear {
    pub position: Position,
    pub numbers: [NumberToken; 2],
}

impl Gear {
    pub fn ratio(&self) -> u128 {
        u128::from(self.numbers[0].value) * u128::from(self.numbers[1].value)
    }
}

/// Symbol positions in row-major order.
pub fn find_symbols(grid: &Grid, config: ScanConfig) -> impl Iterator<Item = Position> + '_ {
    grid.positions()
        .filter(move |&pos| is_symbol(grid[pos], config))
}

/// Positions holding exactly `target`, in row-major order.
pub fn find_targets(grid: &Grid, target: char) -> impl Iterator<Item = Position> + '_ {
    grid.positions()
        .filter(move |&pos| matches_target(grid[pos], target))
}

/// Neighbours of `pos` that hold a digit.
pub fn adjacent_digits(grid: &Grid, pos: Position) -> impl Iterator<Item = Position> + '_ {
    grid.neighbors(pos)
        .filter(|&neighbor| is_digit(grid[neighbor]))
}

/// Expands every number touching `pos` that `visited` hasn't claimed yet,
/// claiming its cells as it goes.
fn claim_adjacent_numbers(
    grid: &Grid,
    pos: Position,
    visited: &mut VisitedSet,
) -> Vec<NumberToken> {
    let mut numbers = Vec::new();
    for neighbor in adjacent_digits(grid, pos) {
        if visited.contains(neighbor) {
            continue;
        }
        if let Some(token) = NumberToken::expand(grid, neighbor) {
            visited.mark(&token);
            numbers.push(token);
        }
    }
    numbers
}

/// Every number touching at least one symbol, each counted once no matter
/// how many symbols touch it. Ordered by discovery.
pub fn part_numbers(grid: &Grid, config: ScanConfig) -> Vec<NumberToken> {
    let mut visited = VisitedSet::default();
    let mut numbers = Vec::new();
    let mut symbols = 0;

    for symbol in find_symbols(grid, config) {
        symbols += 1;
        for token in claim_adjacent_numbers(grid, symbol, &mut visited) {
            trace!(value = token.value, start = %token.start(), %symbol, "part number");
            numbers.push(token);
        }
    }

    debug!(symbols, part_numbers = numbers.len(), "scanned symbols");
    numbers
}

#[tracing::instrument(skip(grid), fields(height = grid.height(), width = grid.width()))]
pub fn sum_adjacent_to_any_symbol(grid: &Grid, config: ScanConfig) -> u128 {
    let sum = part_numbers(grid, config)
        .iter()
        .map(|token| u128::from(token.value))
        .sum();
    debug!(sum, "summed part numbers");
    sum
}

/// Checks one gear candidate with its own visited set, so a number shared by
/// two gears counts toward both.
fn gear_at(grid: &Grid, position: Position) -> Option<Gear> {
    let mut visited = VisitedSet::default();
    let numbers = claim_adjacent_numbers(grid, position, &mut visited);
    let numbers: [NumberToken; 2] = numbers.try_into().ok()?;
    Some(Gear { position, numbers })
}

/// Candidates touching exactly two distinct numbers, in row-major order.
pub fn gears(grid: &Grid, gear: char) -> Vec<Gear> {
    let mut candidates = 0;
    let gears = find_targets(grid, gear)
        .inspect(|_| candidates += 1)
        .filter_map(|position| gear_at(grid, position))
        .inspect(|gear| trace!(position = %gear.position, ratio = gear.ratio(), "gear"))
        .collect::<Vec<_>>();

    debug!(candidates, gears = gears.len(), "scanned gear candidates");
    gears
}

#[tracing::instrument(skip(grid), fields(height = grid.height(), width = grid.width()))]
pub fn sum_gear_products(grid: &Grid, gear: char) -> u128 {
    let sum = gears(grid, gear).iter().map(Gear::ratio).sum();
    debug!(sum, "summed gear ratios");
    sum
}

/// Same result as [`sum_gear_products`], with candidates checked in parallel.
#[tracing::instrument(skip(grid), fields(height = grid.height(), width = grid.width()))]
pub fn par_sum_gear_products(grid: &Grid, gear: char) -> u128 {
    let candidates = find_targets(grid, gear).collect::<Vec<_>>();
    let sum = candidates
        .par_iter()
        .filter_map(|&position| gear_at(grid, position))
        .map(|gear| gear.ratio())
        .sum();
    debug!(candidates = candidates.len(), sum, "summed gear ratios");
    sum
}
