//! The battlefield: grid plus the units standing on it
//!
//! All board mutation goes through here so the grid and the units' own
//! positions never disagree.

use serde::{Deserialize, Serialize};

use crate::battle::grid::{Cell, Grid};
use crate::battle::units::{Roster, Unit};
use crate::core::error::Result;
use crate::core::types::{Faction, Point, UnitId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battlefield {
    pub grid: Grid,
    pub roster: Roster,
}

impl Battlefield {
    pub fn new(grid: Grid, roster: Roster) -> Self {
        Self { grid, roster }
    }

    pub fn unit(&self, id: UnitId) -> Result<&Unit> {
        self.roster.get(id)
    }

    /// Living unit standing at `point`, if any
    pub fn unit_at(&self, point: Point) -> Option<&Unit> {
        let id = self.grid.get(point).ok()?.unit()?;
        self.roster.get(id).ok().filter(|u| u.is_alive())
    }

    /// Does any living enemy of `faction` remain?
    pub fn has_enemies(&self, faction: Faction) -> bool {
        self.roster.living_of(faction.enemy()).next().is_some()
    }

    /// Open squares adjacent to a living enemy of `faction`, in reading order
    pub fn in_range_squares(&self, faction: Faction) -> Vec<Point> {
        let mut squares: Vec<Point> = self
            .roster
            .living_of(faction.enemy())
            .flat_map(|enemy| self.grid.neighbors(enemy.position))
            .filter(|(_, cell)| cell.is_empty())
            .map(|(p, _)| p)
            .collect();
        squares.sort();
        squares.dedup();
        squares
    }

    /// Living enemies of `faction` orthogonally adjacent to `point`, in
    /// neighbour order
    pub fn adjacent_enemies(&self, point: Point, faction: Faction) -> Vec<&Unit> {
        self.grid
            .neighbors(point)
            .into_iter()
            .filter_map(|(p, _)| self.unit_at(p))
            .filter(|u| u.faction != faction)
            .collect()
    }

    /// Step a living unit onto an open square
    pub fn move_unit(&mut self, id: UnitId, to: Point) -> Result<()> {
        debug_assert!(self.grid.is_open(to), "moving onto occupied square {}", to);

        let from = self.roster.get(id)?.position;
        self.grid.set(from, Cell::Empty)?;
        self.grid.set(to, Cell::Unit(id))?;
        self.roster.get_mut(id)?.position = to;
        Ok(())
    }

    /// Clear a dead unit's square
    pub fn remove_unit(&mut self, id: UnitId) -> Result<()> {
        let position = self.roster.get(id)?.position;
        self.grid.set(position, Cell::Empty)
    }

    /// Check that grid occupancy and unit positions agree
    ///
    /// Every living unit sits on a cell that names it, every unit cell names
    /// a living unit at that position, and no two units share a square.
    pub fn check_consistency(&self) -> std::result::Result<(), String> {
        let mut occupied = 0;
        for (point, id) in self.grid.occupants() {
            let unit = self
                .roster
                .get(id)
                .map_err(|e| format!("cell {} references {}", point, e))?;
            if !unit.is_alive() {
                return Err(format!("dead unit {} still occupies {}", id, point));
            }
            if unit.position != point {
                return Err(format!(
                    "unit {} stored at {} but occupies {}",
                    id, unit.position, point
                ));
            }
            occupied += 1;
        }

        let living = self.roster.living().count();
        if occupied != living {
            return Err(format!(
                "{} occupied cells for {} living units",
                occupied, living
            ));
        }

        Ok(())
    }
}
