//! Combat rule constants

// Units
pub const DEFAULT_HIT_POINTS: i32 = 200;
pub const DEFAULT_ATTACK_POWER: i32 = 3;

// Attack-power search starts one above the default
pub const MIN_BOOSTED_ATTACK: i32 = DEFAULT_ATTACK_POWER + 1;

// Rounds
pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

// Map symbols
pub const WALL_SYMBOL: char = '#';
pub const EMPTY_SYMBOL: char = '.';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boosted_attack_above_default() {
        assert!(MIN_BOOSTED_ATTACK > DEFAULT_ATTACK_POWER);
    }

    #[test]
    fn test_symbols_distinct() {
        assert_ne!(WALL_SYMBOL, EMPTY_SYMBOL);
    }
}
