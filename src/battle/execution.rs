//! Combat execution loop
//!
//! Each round every unit alive at round start acts once, in reading order of
//! where it stood when the round began. Combat ends the moment an acting
//! unit finds no enemies; that final partial round is not counted.

use serde::{Deserialize, Serialize};

use crate::battle::battle_map::Battlefield;
use crate::battle::parser::parse_battlefield;
use crate::battle::turn::{take_turn, TurnResult};
use crate::battle::units::Unit;
use crate::core::config::CombatConfig;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::{Faction, Point, UnitId};

/// Something that happened during a unit's turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    Moved {
        unit: UnitId,
        from: Point,
        to: Point,
    },
    Attacked {
        attacker: UnitId,
        target: UnitId,
        damage: i32,
        remaining: i32,
    },
    Killed {
        unit: UnitId,
        at: Point,
    },
}

/// Events from one completed round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub events: Vec<CombatEvent>,
}

/// Why combat stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEnd {
    /// An acting unit found no enemies left
    FactionEliminated,
    /// An Elf died while `abort_on_elf_death` was set
    ElfDied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CombatPhase {
    #[default]
    Active,
    Finished(CombatEnd),
}

/// Result of asking the engine for one more round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Completed(RoundReport),
    Ended(CombatEnd),
}

/// Engine behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    /// Stop as soon as any Elf dies
    pub abort_on_elf_death: bool,
}

/// Called by the engine after every completed round
pub trait RoundObserver {
    fn round_completed(&mut self, engine: &CombatEngine, report: &RoundReport);
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl RoundObserver for SilentObserver {
    fn round_completed(&mut self, _engine: &CombatEngine, _report: &RoundReport) {}
}

/// Final result of a combat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub end: CombatEnd,
    pub full_rounds: u32,
    pub remaining_hit_points: i32,
    pub score: i64,
    pub winner: Option<Faction>,
    pub elf_deaths: usize,
    pub goblin_deaths: usize,
    pub survivors: Vec<Unit>,
}

impl CombatOutcome {
    /// Elves won without losing anyone
    pub fn is_flawless_elf_victory(&self) -> bool {
        self.winner == Some(Faction::Elf) && self.elf_deaths == 0
    }
}

/// Drives a battlefield round by round until one side is gone
#[derive(Debug, Clone)]
pub struct CombatEngine {
    field: Battlefield,
    config: CombatConfig,
    options: EngineOptions,
    rounds_completed: u32,
    phase: CombatPhase,
}

impl CombatEngine {
    pub fn new(field: Battlefield, config: CombatConfig) -> Result<Self> {
        config.validate().map_err(SkirmishError::InvalidConfig)?;
        Ok(Self {
            field,
            config,
            options: EngineOptions::default(),
            rounds_completed: 0,
            phase: CombatPhase::Active,
        })
    }

    /// Parse `input` and build an engine for it
    pub fn from_input(input: &str, config: CombatConfig) -> Result<Self> {
        let field = parse_battlefield(input, &config)?;
        Self::new(field, config)
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.field
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Full rounds completed so far
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, CombatPhase::Finished(_))
    }

    /// Run one round
    ///
    /// Turn order is fixed at round start. Units killed before their turn
    /// are skipped, and a unit that moves never gets a second turn.
    pub fn run_round(&mut self) -> Result<RoundOutcome> {
        if let CombatPhase::Finished(end) = self.phase {
            return Ok(RoundOutcome::Ended(end));
        }

        if self.field.roster.living().next().is_none() {
            return Ok(self.finish(CombatEnd::FactionEliminated));
        }

        let mut events = Vec::new();
        for id in self.field.roster.turn_order() {
            if !self.field.unit(id)?.is_alive() {
                continue;
            }

            match take_turn(&mut self.field, id)? {
                TurnResult::NoEnemies => return Ok(self.finish(CombatEnd::FactionEliminated)),
                TurnResult::Acted(turn_events) => {
                    let elf_died = self.options.abort_on_elf_death
                        && self.any_elf_killed(&turn_events)?;
                    events.extend(turn_events);
                    if elf_died {
                        return Ok(self.finish(CombatEnd::ElfDied));
                    }
                }
            }
        }

        self.rounds_completed += 1;
        tracing::debug!(
            "Round {} complete: {} events, {} hit points remaining",
            self.rounds_completed,
            events.len(),
            self.field.roster.total_hit_points()
        );

        Ok(RoundOutcome::Completed(RoundReport {
            round: self.rounds_completed,
            events,
        }))
    }

    /// Run to completion and return the outcome
    pub fn simulate(&mut self) -> Result<CombatOutcome> {
        self.simulate_with(&mut SilentObserver)
    }

    /// Run to completion, reporting every completed round to `observer`
    pub fn simulate_with(&mut self, observer: &mut dyn RoundObserver) -> Result<CombatOutcome> {
        loop {
            match self.run_round()? {
                RoundOutcome::Completed(report) => {
                    observer.round_completed(self, &report);

                    // Nothing moved and nothing was hit, so every later round
                    // would repeat this one exactly.
                    if report.events.is_empty() {
                        tracing::warn!("Stalemate after {} rounds", self.rounds_completed);
                        return Err(SkirmishError::Stalemate {
                            rounds: self.rounds_completed,
                        });
                    }

                    if self.rounds_completed > self.config.max_rounds {
                        tracing::warn!("Round limit {} exceeded", self.config.max_rounds);
                        return Err(SkirmishError::RoundLimit {
                            limit: self.config.max_rounds,
                        });
                    }
                }
                RoundOutcome::Ended(_) => break,
            }
        }

        let outcome = self.outcome();
        tracing::info!(
            "Combat ended after {} full rounds: {} x {} = {}",
            outcome.full_rounds,
            outcome.full_rounds,
            outcome.remaining_hit_points,
            outcome.score
        );
        Ok(outcome)
    }

    /// Full rounds times hit points still standing
    pub fn score(&self) -> i64 {
        i64::from(self.rounds_completed) * i64::from(self.field.roster.total_hit_points())
    }

    /// Snapshot of the current result
    pub fn outcome(&self) -> CombatOutcome {
        let roster = &self.field.roster;
        let end = match self.phase {
            CombatPhase::Finished(end) => end,
            CombatPhase::Active => CombatEnd::FactionEliminated,
        };
        let winner = match end {
            CombatEnd::FactionEliminated => {
                let goblins = roster.count_alive(Faction::Goblin);
                let elves = roster.count_alive(Faction::Elf);
                match (goblins, elves) {
                    (0, 0) => None,
                    (_, 0) => Some(Faction::Goblin),
                    (0, _) => Some(Faction::Elf),
                    _ => None,
                }
            }
            CombatEnd::ElfDied => None,
        };

        CombatOutcome {
            end,
            full_rounds: self.rounds_completed,
            remaining_hit_points: roster.total_hit_points(),
            score: self.score(),
            winner,
            elf_deaths: roster.count_dead(Faction::Elf),
            goblin_deaths: roster.count_dead(Faction::Goblin),
            survivors: {
                let mut survivors: Vec<Unit> = roster.living().cloned().collect();
                survivors.sort_by_key(|u| u.position);
                survivors
            },
        }
    }

    fn finish(&mut self, end: CombatEnd) -> RoundOutcome {
        self.phase = CombatPhase::Finished(end);
        tracing::debug!(
            "Combat finished ({:?}) during round {}",
            end,
            self.rounds_completed + 1
        );
        RoundOutcome::Ended(end)
    }

    fn any_elf_killed(&self, events: &[CombatEvent]) -> Result<bool> {
        for event in events {
            if let CombatEvent::Killed { unit, .. } = event {
                if self.field.unit(*unit)?.faction == Faction::Elf {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
