pub mod config;
pub mod error;
pub mod types;

pub use config::CombatConfig;
pub use error::{Result, SkirmishError};
pub use types::{Faction, Point, UnitId};
