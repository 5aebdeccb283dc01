//! A single unit's turn: find enemies, maybe move, maybe attack
//!
//! The board is passed in explicitly; units hold no reference back to it.

use crate::battle::battle_map::Battlefield;
use crate::battle::execution::CombatEvent;
use crate::battle::pathfinding::resolve_move;
use crate::core::error::Result;
use crate::core::types::UnitId;

/// Progress through one unit's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    ComputeEnemies,
    Move,
    Attack,
    Done,
}

/// What a turn produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    /// No living enemies remain; combat is over and nothing changed
    NoEnemies,
    /// The turn ran; events list whatever moves and attacks happened
    Acted(Vec<CombatEvent>),
}

/// Run one turn for `id`
///
/// A dead unit's turn is a no-op.
pub fn take_turn(field: &mut Battlefield, id: UnitId) -> Result<TurnResult> {
    let mut events = Vec::new();
    let mut phase = TurnPhase::ComputeEnemies;

    loop {
        phase = match phase {
            TurnPhase::ComputeEnemies => {
                let unit = field.unit(id)?;
                if !unit.is_alive() {
                    TurnPhase::Done
                } else if !field.has_enemies(unit.faction) {
                    return Ok(TurnResult::NoEnemies);
                } else if field
                    .adjacent_enemies(unit.position, unit.faction)
                    .is_empty()
                {
                    TurnPhase::Move
                } else {
                    TurnPhase::Attack
                }
            }
            TurnPhase::Move => {
                if let Some(choice) = resolve_move(field, id)? {
                    let from = field.unit(id)?.position;
                    field.move_unit(id, choice.step)?;
                    tracing::debug!(
                        "Unit {} moved {} -> {} toward {}",
                        id,
                        from,
                        choice.step,
                        choice.target
                    );
                    events.push(CombatEvent::Moved {
                        unit: id,
                        from,
                        to: choice.step,
                    });
                }
                TurnPhase::Attack
            }
            TurnPhase::Attack => {
                if let Some(target) = select_target(field, id)? {
                    attack(field, id, target, &mut events)?;
                }
                TurnPhase::Done
            }
            TurnPhase::Done => return Ok(TurnResult::Acted(events)),
        };
    }
}

/// Adjacent enemy with the fewest hit points, ties by reading order
pub fn select_target(field: &Battlefield, id: UnitId) -> Result<Option<UnitId>> {
    let unit = field.unit(id)?;
    Ok(field
        .adjacent_enemies(unit.position, unit.faction)
        .into_iter()
        .min_by_key(|enemy| (enemy.hit_points, enemy.position))
        .map(|enemy| enemy.id))
}

fn attack(
    field: &mut Battlefield,
    attacker: UnitId,
    target: UnitId,
    events: &mut Vec<CombatEvent>,
) -> Result<()> {
    let damage = field.unit(attacker)?.attack_power;
    let victim = field.roster.get_mut(target)?;
    let killed = victim.take_damage(damage);
    let remaining = victim.hit_points;
    let at = victim.position;

    events.push(CombatEvent::Attacked {
        attacker,
        target,
        damage,
        remaining,
    });

    if killed {
        field.remove_unit(target)?;
        tracing::debug!("Unit {} killed unit {} at {}", attacker, target, at);
        events.push(CombatEvent::Killed { unit: target, at });
    }

    Ok(())
}
