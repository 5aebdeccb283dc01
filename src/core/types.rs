//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Grid coordinate
///
/// Ordering is reading order: by row (`y`), then by column (`x`). Every
/// tie-break in the combat rules relies on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours in the fixed order up, left, right, down
    ///
    /// This order is already reading order, so the first match in a scan is
    /// also the reading-order winner.
    pub fn adjacent(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y - 1),
            Point::new(self.x - 1, self.y),
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y + 1),
        ]
    }

    /// Manhattan distance
    pub fn distance(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.distance(other) == 1
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The two opposing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Goblin,
    Elf,
}

impl Faction {
    pub fn enemy(&self) -> Self {
        match self {
            Faction::Goblin => Faction::Elf,
            Faction::Elf => Faction::Goblin,
        }
    }

    /// Map symbol (`G` / `E`)
    pub fn symbol(&self) -> char {
        match self {
            Faction::Goblin => 'G',
            Faction::Elf => 'E',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' => Some(Faction::Goblin),
            'E' => Some(Faction::Elf),
            _ => None,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Faction::Goblin => write!(f, "Goblins"),
            Faction::Elf => write!(f, "Elves"),
        }
    }
}

/// Handle into the unit roster
///
/// Ids are assigned in parse order and never reused, so a dead unit keeps
/// its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub usize);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_order_row_first() {
        assert!(Point::new(5, 0) < Point::new(0, 1));
        assert!(Point::new(1, 3) < Point::new(2, 3));
    }

    #[test]
    fn test_adjacent_order() {
        let p = Point::new(2, 2);
        let adj = p.adjacent();
        assert_eq!(adj[0], Point::new(2, 1));
        assert_eq!(adj[1], Point::new(1, 2));
        assert_eq!(adj[2], Point::new(3, 2));
        assert_eq!(adj[3], Point::new(2, 3));

        // Fixed order coincides with reading order
        let mut sorted = adj;
        sorted.sort();
        assert_eq!(sorted, adj);
    }

    #[test]
    fn test_faction_enemy() {
        assert_eq!(Faction::Goblin.enemy(), Faction::Elf);
        assert_eq!(Faction::Elf.enemy(), Faction::Goblin);
    }

    #[test]
    fn test_faction_symbols() {
        assert_eq!(Faction::from_symbol('G'), Some(Faction::Goblin));
        assert_eq!(Faction::from_symbol('E'), Some(Faction::Elf));
        assert_eq!(Faction::from_symbol('#'), None);
        assert_eq!(Faction::Elf.symbol(), 'E');
    }
}
