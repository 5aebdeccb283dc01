//! Combat configuration
//!
//! Defaults reproduce the standard rules: every unit starts with 200 hit
//! points and strikes for 3. Only the Elves' attack power is ever varied.

use serde::{Deserialize, Serialize};

use crate::battle::constants::{DEFAULT_ATTACK_POWER, DEFAULT_HIT_POINTS, DEFAULT_MAX_ROUNDS};
use crate::core::error::{Result, SkirmishError};
use crate::core::types::Faction;

/// Configuration for a single combat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Starting hit points for every unit
    pub hit_points: i32,

    /// Damage dealt by a Goblin per attack
    pub goblin_attack: i32,

    /// Damage dealt by an Elf per attack
    ///
    /// Raised by the attack-power search until the Elves win flawlessly.
    pub elf_attack: i32,

    /// Hard ceiling on full rounds before combat is abandoned
    ///
    /// Well-formed battles end long before this; it guards against boards
    /// where the factions keep shuffling without ever meeting.
    pub max_rounds: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hit_points: DEFAULT_HIT_POINTS,
            goblin_attack: DEFAULT_ATTACK_POWER,
            elf_attack: DEFAULT_ATTACK_POWER,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl CombatConfig {
    /// Same config with a different Elf attack power
    pub fn with_elf_attack(&self, elf_attack: i32) -> Self {
        Self {
            elf_attack,
            ..self.clone()
        }
    }

    pub fn attack_power(&self, faction: Faction) -> i32 {
        match faction {
            Faction::Goblin => self.goblin_attack,
            Faction::Elf => self.elf_attack,
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.hit_points <= 0 {
            return Err(format!("hit_points ({}) must be positive", self.hit_points));
        }

        if self.goblin_attack <= 0 || self.elf_attack <= 0 {
            return Err(format!(
                "attack powers must be positive (goblin {}, elf {})",
                self.goblin_attack, self.elf_attack
            ));
        }

        if self.max_rounds == 0 {
            return Err("max_rounds must be at least 1".into());
        }

        Ok(())
    }

    /// Load a config from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string, filling unspecified keys with defaults
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: CombatConfig = toml::from_str(content)?;
        config.validate().map_err(SkirmishError::InvalidConfig)?;
        Ok(config)
    }
}
