use miette::*;

use crate::config::ScanConfig;
use crate::engine::sum_gear_products;
use crate::grid::parse_schematic;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parse_schematic(input)?;
    let total = sum_gear_products(&grid, ScanConfig::default().gear);

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";
        assert_eq!("467835", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("12*34", "408")]
    #[case("12#34", "0")]
    #[case("1*2*3", "8")]
    #[case("", "0")]
    fn small_schematics(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
