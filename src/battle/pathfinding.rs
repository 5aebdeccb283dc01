//! Movement resolution
//!
//! Breadth-first search over open floor, recomputed for every move because
//! the board changes after each unit's turn. Ties are broken in reading
//! order at every level: nearest in-range square first, then the first
//! step that starts a shortest path to it.

use ahash::{AHashMap, AHashSet};

use crate::battle::battle_map::Battlefield;
use crate::battle::grid::Grid;
use crate::core::error::Result;
use crate::core::types::{Point, UnitId};

/// The square a unit will step onto and why
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    /// Adjacent open square to move onto this turn
    pub step: Point,
    /// In-range square the unit is heading for
    pub target: Point,
    /// Steps from the unit's current square to `target`
    pub distance: u32,
}

/// Choose the unit's next step, or `None` if no in-range square is reachable
///
/// Lexicographically minimises (path length, target reading order, first
/// step reading order).
pub fn resolve_move(field: &Battlefield, id: UnitId) -> Result<Option<MoveChoice>> {
    let unit = field.unit(id)?;
    let targets: AHashSet<Point> = field.in_range_squares(unit.faction).into_iter().collect();
    if targets.is_empty() {
        return Ok(None);
    }

    let Some((distance, target)) = nearest_target(&field.grid, unit.position, &targets) else {
        return Ok(None);
    };

    // Distances measured back from the target; only squares one step from
    // the unit matter, so nothing beyond `distance - 1` is explored.
    let from_target = distances_from(&field.grid, target, distance - 1);
    let step = unit
        .position
        .adjacent()
        .into_iter()
        .filter(|p| field.grid.is_open(*p))
        .filter_map(|p| from_target.get(&p).map(|d| (*d, p)))
        .min()
        .map(|(_, p)| p);

    Ok(step.map(|step| MoveChoice {
        step,
        target,
        distance,
    }))
}

/// Level-by-level BFS from `start` through open squares
///
/// Stops at the first depth where any target is reached and returns the
/// reading-order-first target found at that depth.
fn nearest_target(grid: &Grid, start: Point, targets: &AHashSet<Point>) -> Option<(u32, Point)> {
    let mut visited = AHashSet::new();
    visited.insert(start);

    let mut frontier = vec![start];
    let mut depth = 0;

    while !frontier.is_empty() {
        depth += 1;
        let mut next = Vec::new();
        for point in frontier {
            for (neighbor, cell) in grid.neighbors(point) {
                if cell.is_empty() && visited.insert(neighbor) {
                    next.push(neighbor);
                }
            }
        }

        if let Some(target) = next.iter().filter(|p| targets.contains(*p)).min() {
            return Some((depth, *target));
        }
        frontier = next;
    }

    None
}

/// Distance from `origin` to every open square within `max_depth` steps
fn distances_from(grid: &Grid, origin: Point, max_depth: u32) -> AHashMap<Point, u32> {
    let mut distances = AHashMap::new();
    distances.insert(origin, 0);

    let mut frontier = vec![origin];
    for depth in 1..=max_depth {
        let mut next = Vec::new();
        for point in frontier {
            for (neighbor, cell) in grid.neighbors(point) {
                if cell.is_empty() && !distances.contains_key(&neighbor) {
                    distances.insert(neighbor, depth);
                    next.push(neighbor);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    distances
}
