//! Combat units and the roster that owns them

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SkirmishError};
use crate::core::types::{Faction, Point, UnitId};

/// A single combatant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub faction: Faction,
    pub position: Point,
    pub hit_points: i32,
    pub attack_power: i32,
}

impl Unit {
    pub fn new(id: UnitId, faction: Faction, position: Point, hit_points: i32, attack_power: i32) -> Self {
        Self {
            id,
            faction,
            position,
            hit_points,
            attack_power,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Apply damage, returning true if this blow killed the unit
    pub fn take_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.hit_points -= amount;
        was_alive && !self.is_alive()
    }
}

/// Arena of every unit that took part in the combat, dead or alive
///
/// `UnitId(n)` indexes slot `n`. Dead units keep their slot so ids stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    units: Vec<Unit>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit and return its handle
    pub fn spawn(&mut self, faction: Faction, position: Point, hit_points: i32, attack_power: i32) -> UnitId {
        let id = UnitId(self.units.len());
        self.units
            .push(Unit::new(id, faction, position, hit_points, attack_power));
        id
    }

    pub fn get(&self, id: UnitId) -> Result<&Unit> {
        self.units.get(id.0).ok_or(SkirmishError::UnknownUnit(id))
    }

    pub fn get_mut(&mut self, id: UnitId) -> Result<&mut Unit> {
        self.units.get_mut(id.0).ok_or(SkirmishError::UnknownUnit(id))
    }

    pub fn living(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| u.is_alive())
    }

    pub fn living_of(&self, faction: Faction) -> impl Iterator<Item = &Unit> {
        self.living().filter(move |u| u.faction == faction)
    }

    pub fn count_alive(&self, faction: Faction) -> usize {
        self.living_of(faction).count()
    }

    /// Units of `faction` that have died
    pub fn count_dead(&self, faction: Faction) -> usize {
        self.units
            .iter()
            .filter(|u| u.faction == faction && !u.is_alive())
            .count()
    }

    /// Sum of hit points over living units
    pub fn total_hit_points(&self) -> i32 {
        self.living().map(|u| u.hit_points).sum()
    }

    /// Living units in reading order of their current positions
    pub fn turn_order(&self) -> Vec<UnitId> {
        let mut living: Vec<&Unit> = self.living().collect();
        living.sort_by_key(|u| u.position);
        living.into_iter().map(|u| u.id).collect()
    }

    /// Set every unit of `faction` to the given attack power
    pub fn set_attack_power(&mut self, faction: Faction, attack_power: i32) {
        for unit in self.units.iter_mut().filter(|u| u.faction == faction) {
            unit.attack_power = attack_power;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_damage_and_death() {
        let mut unit = Unit::new(UnitId(0), Faction::Elf, Point::new(1, 1), 5, 3);
        assert!(!unit.take_damage(3));
        assert!(unit.is_alive());
        assert!(unit.take_damage(3));
        assert!(!unit.is_alive());
        assert_eq!(unit.hit_points, -1);
    }

    #[test]
    fn test_exact_lethal_damage() {
        let mut unit = Unit::new(UnitId(0), Faction::Goblin, Point::new(0, 0), 3, 3);
        assert!(unit.take_damage(3));
        assert_eq!(unit.hit_points, 0);
        assert!(!unit.is_alive());
    }

    #[test]
    fn test_roster_ids_sequential() {
        let mut roster = Roster::new();
        let a = roster.spawn(Faction::Goblin, Point::new(1, 1), 200, 3);
        let b = roster.spawn(Faction::Elf, Point::new(2, 1), 200, 3);
        assert_eq!(a, UnitId(0));
        assert_eq!(b, UnitId(1));
        assert_eq!(roster.get(b).unwrap().faction, Faction::Elf);
        assert!(roster.get(UnitId(5)).is_err());
    }

    #[test]
    fn test_turn_order_follows_positions() {
        let mut roster = Roster::new();
        let a = roster.spawn(Faction::Goblin, Point::new(3, 2), 200, 3);
        let b = roster.spawn(Faction::Elf, Point::new(1, 1), 200, 3);
        let c = roster.spawn(Faction::Elf, Point::new(1, 2), 200, 3);
        assert_eq!(roster.turn_order(), vec![b, c, a]);

        roster.get_mut(c).unwrap().hit_points = 0;
        assert_eq!(roster.turn_order(), vec![b, a]);
    }

    #[test]
    fn test_hit_point_totals_skip_dead() {
        let mut roster = Roster::new();
        roster.spawn(Faction::Goblin, Point::new(0, 0), 200, 3);
        let dead = roster.spawn(Faction::Goblin, Point::new(1, 0), 200, 3);
        roster.spawn(Faction::Elf, Point::new(2, 0), 131, 3);
        roster.get_mut(dead).unwrap().hit_points = -2;

        assert_eq!(roster.total_hit_points(), 331);
        assert_eq!(roster.count_alive(Faction::Goblin), 1);
        assert_eq!(roster.count_dead(Faction::Goblin), 1);
    }
}
