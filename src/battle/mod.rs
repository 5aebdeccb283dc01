//! Battle system - turn-based grid combat between Goblins and Elves
//!
//! Every round each living unit, in reading order, looks for enemies, steps
//! toward the nearest reachable one and attacks the weakest adjacent one.
//! Reading order breaks every tie.

pub mod battle_map;
pub mod constants;
pub mod execution;
pub mod grid;
pub mod parser;
pub mod pathfinding;
pub mod render;
pub mod search;
pub mod turn;
pub mod units;

// Re-exports for convenient access
pub use battle_map::Battlefield;
pub use constants::*;
pub use execution::{
    CombatEnd, CombatEngine, CombatEvent, CombatOutcome, CombatPhase, EngineOptions,
    RoundObserver, RoundOutcome, RoundReport, SilentObserver,
};
pub use grid::{Cell, Grid};
pub use parser::parse_battlefield;
pub use pathfinding::{resolve_move, MoveChoice};
pub use render::render_map;
pub use search::{find_flawless_attack_power, simulate_with_elf_attack, SearchResult};
pub use turn::{select_target, take_turn, TurnPhase, TurnResult};
pub use units::{Roster, Unit};
