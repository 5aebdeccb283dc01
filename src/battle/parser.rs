//! Parse the textual map into a battlefield
//!
//! `#` wall, `.` open floor, `G` goblin, `E` elf. Lines must all have the
//! same length; trailing whitespace and blank lines are ignored.

use crate::battle::battle_map::Battlefield;
use crate::battle::constants::{EMPTY_SYMBOL, WALL_SYMBOL};
use crate::battle::grid::{Cell, Grid};
use crate::battle::units::Roster;
use crate::core::config::CombatConfig;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::{Faction, Point};

/// Build the initial battlefield, one unit per `G`/`E`
///
/// Units are numbered in reading order of their starting squares.
pub fn parse_battlefield(input: &str, config: &CombatConfig) -> Result<Battlefield> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    let width = lines.first().ok_or(SkirmishError::EmptyInput)?.chars().count();
    let height = lines.len();

    let mut grid = Grid::new(width, height);
    let mut roster = Roster::new();

    for (y, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(SkirmishError::RaggedInput {
                line: y,
                expected: width,
                found,
            });
        }

        for (x, symbol) in line.chars().enumerate() {
            let point = Point::new(x as i32, y as i32);
            let cell = match symbol {
                WALL_SYMBOL => Cell::Wall,
                EMPTY_SYMBOL => Cell::Empty,
                other => {
                    let faction = Faction::from_symbol(other)
                        .ok_or(SkirmishError::InvalidInput { symbol: other, x, y })?;
                    let id = roster.spawn(
                        faction,
                        point,
                        config.hit_points,
                        config.attack_power(faction),
                    );
                    Cell::Unit(id)
                }
            };
            grid.set(point, cell)?;
        }
    }

    tracing::debug!(
        "Parsed {}x{} battlefield with {} goblins and {} elves",
        width,
        height,
        roster.count_alive(Faction::Goblin),
        roster.count_alive(Faction::Elf)
    );

    Ok(Battlefield::new(grid, roster))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::UnitId;

    #[test]
    fn test_parse_small_map() {
        let field = parse_battlefield("#####\n#G.E#\n#####\n", &CombatConfig::default()).unwrap();

        assert_eq!(field.grid.width, 5);
        assert_eq!(field.grid.height, 3);
        assert_eq!(field.grid.get(Point::new(0, 0)).unwrap(), Cell::Wall);
        assert_eq!(field.grid.get(Point::new(2, 1)).unwrap(), Cell::Empty);
        assert_eq!(field.grid.get(Point::new(1, 1)).unwrap(), Cell::Unit(UnitId(0)));
        assert_eq!(field.grid.get(Point::new(3, 1)).unwrap(), Cell::Unit(UnitId(1)));

        let elf = field.unit(UnitId(1)).unwrap();
        assert_eq!(elf.faction, Faction::Elf);
        assert_eq!(elf.position, Point::new(3, 1));
        assert_eq!(elf.hit_points, 200);
        assert_eq!(elf.attack_power, 3);
    }

    #[test]
    fn test_parse_applies_config() {
        let config = CombatConfig::default().with_elf_attack(15);
        let field = parse_battlefield("#G.E#", &config).unwrap();
        assert_eq!(field.unit(UnitId(0)).unwrap().attack_power, 3);
        assert_eq!(field.unit(UnitId(1)).unwrap().attack_power, 15);
    }

    #[test]
    fn test_parse_unknown_symbol() {
        let err = parse_battlefield("###\n#X#\n###", &CombatConfig::default()).unwrap_err();
        match err {
            SkirmishError::InvalidInput { symbol, x, y } => {
                assert_eq!(symbol, 'X');
                assert_eq!((x, y), (1, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_ragged_lines() {
        let err = parse_battlefield("####\n#.#\n####", &CombatConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SkirmishError::RaggedInput {
                line: 1,
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            parse_battlefield("\n\n", &CombatConfig::default()),
            Err(SkirmishError::EmptyInput)
        ));
    }
}
