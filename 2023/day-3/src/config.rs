/// Filler character for cells that hold neither a digit nor a symbol.
pub const EMPTY_CHAR: char = '.';

/// Symbol that marks a potential gear.
pub const GEAR_CHAR: char = '*';

/// The two characters the scanner treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub empty: char,
    pub gear: char,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            empty: EMPTY_CHAR,
            gear: GEAR_CHAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_puzzle() {
        let config = ScanConfig::default();
        assert_eq!(config.empty, '.');
        assert_eq!(config.gear, '*');
    }
}
