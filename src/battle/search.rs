//! Search for the weakest Elf attack power that still wins without losses
//!
//! Candidates are independent simulations on copies of the starting
//! battlefield, so they run in parallel; `find_map_first` still reports the
//! lowest qualifying power.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::battle::battle_map::Battlefield;
use crate::battle::constants::MIN_BOOSTED_ATTACK;
use crate::battle::execution::{CombatEngine, CombatOutcome, EngineOptions};
use crate::core::config::CombatConfig;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::Faction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub attack_power: i32,
    pub outcome: CombatOutcome,
}

/// Run `field` with the Elves hitting for `attack_power`, stopping at the
/// first Elf death
pub fn simulate_with_elf_attack(
    field: &Battlefield,
    config: &CombatConfig,
    attack_power: i32,
) -> Result<CombatOutcome> {
    let mut field = field.clone();
    field.roster.set_attack_power(Faction::Elf, attack_power);

    let mut engine = CombatEngine::new(field, config.with_elf_attack(attack_power))?
        .with_options(EngineOptions {
            abort_on_elf_death: true,
        });
    let outcome = engine.simulate()?;

    tracing::debug!(
        "Elf attack {}: {:?} after {} rounds, {} elf deaths",
        attack_power,
        outcome.end,
        outcome.full_rounds,
        outcome.elf_deaths
    );
    Ok(outcome)
}

/// Lowest Elf attack power (at least `MIN_BOOSTED_ATTACK`) giving a
/// flawless Elf victory
///
/// The search stops at the configured hit points: beyond that every Elf
/// blow is already a one-hit kill.
pub fn find_flawless_attack_power(field: &Battlefield, config: &CombatConfig) -> Result<SearchResult> {
    let max_attack = config.hit_points;

    let found = (MIN_BOOSTED_ATTACK..=max_attack)
        .into_par_iter()
        .find_map_first(|attack_power| {
            match simulate_with_elf_attack(field, config, attack_power) {
                Ok(outcome) if outcome.is_flawless_elf_victory() => Some(Ok(SearchResult {
                    attack_power,
                    outcome,
                })),
                Ok(_) => None,
                // A fight that never finishes is not a flawless win; a
                // stronger Elf may still end it.
                Err(SkirmishError::Stalemate { .. } | SkirmishError::RoundLimit { .. }) => None,
                Err(err) => Some(Err(err)),
            }
        });

    let result = found.unwrap_or(Err(SkirmishError::NoFlawlessVictory { max_attack }))?;
    tracing::info!(
        "Elves need attack power {} (score {})",
        result.attack_power,
        result.outcome.score
    );
    Ok(result)
}
