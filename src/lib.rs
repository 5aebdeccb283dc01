//! Skirmish - turn-based grid combat simulation

pub mod battle;
pub mod core;
