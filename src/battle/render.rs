//! Text rendering in the notation used by the published worked examples

use std::fmt;

use crate::battle::battle_map::Battlefield;
use crate::battle::execution::{CombatEnd, CombatOutcome};
use crate::battle::grid::{Cell, Grid};
use crate::core::types::Point;

impl fmt::Display for Battlefield {
    /// One line per row; rows with units get `   G(200), E(197)` appended
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.height {
            let mut row = String::with_capacity(self.grid.width);
            let mut annotations = Vec::new();

            for x in 0..self.grid.width {
                let point = Point::new(x as i32, y as i32);
                let cell = self.grid.get(point).map_err(|_| fmt::Error)?;
                match Grid::terrain_symbol(cell) {
                    Some(symbol) => row.push(symbol),
                    None => {
                        let unit = cell
                            .unit()
                            .and_then(|id| self.roster.get(id).ok())
                            .ok_or(fmt::Error)?;
                        row.push(unit.faction.symbol());
                        annotations.push(format!("{}({})", unit.faction.symbol(), unit.hit_points));
                    }
                }
            }

            if annotations.is_empty() {
                writeln!(f, "{}", row)?;
            } else {
                writeln!(f, "{}   {}", row, annotations.join(", "))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CombatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Combat ends after {} full rounds", self.full_rounds)?;
        match (self.end, self.winner) {
            (CombatEnd::ElfDied, _) => writeln!(f, "An Elf died; combat abandoned")?,
            (_, Some(winner)) => writeln!(
                f,
                "{} win with {} total hit points left",
                winner, self.remaining_hit_points
            )?,
            (_, None) => writeln!(f, "Nobody survives")?,
        }
        write!(
            f,
            "Outcome: {} * {} = {}",
            self.full_rounds, self.remaining_hit_points, self.score
        )
    }
}

/// Render just the map symbols, without hit point annotations
pub fn render_map(field: &Battlefield) -> String {
    let mut out = String::new();
    for y in 0..field.grid.height {
        for x in 0..field.grid.width {
            let symbol = match field.grid.get(Point::new(x as i32, y as i32)) {
                Ok(Cell::Unit(id)) => field
                    .roster
                    .get(id)
                    .map(|u| u.faction.symbol())
                    .unwrap_or('?'),
                Ok(cell) => Grid::terrain_symbol(cell).unwrap_or('?'),
                Err(_) => '?',
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
