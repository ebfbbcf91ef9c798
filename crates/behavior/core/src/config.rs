use std::time::Duration;

use crate::state::AbilityId;

/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    /// Factor applied to a unit's movement-speed multiplier while chasing.
    pub pursuit_speed_factor: f32,
    /// Range the chase movement tries to close to.
    pub max_attack_range: f32,
    /// The two auto-attack abilities, used alternately starting with the first.
    pub auto_attack_abilities: [AbilityId; 2],
    /// Cadence between auto-attacks.
    pub auto_attack_interval_ms: u64,
    /// Cadence of the special ability when a creature entry does not set one.
    pub special_ability_interval_ms: u64,
    /// Remaining execution delay at or below this value is treated as consumed.
    pub execution_delay_epsilon_us: u64,
}

impl BehaviorConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum length of an activation ability chain.
    pub const MAX_CHAIN_LENGTH: usize = 4;
    /// Maximum number of typed checks in one prerequisite entry.
    pub const MAX_PREREQUISITE_CHECKS: usize = 3;
    /// Maximum nesting of prerequisite rules referencing other rules.
    pub const MAX_PREREQUISITE_DEPTH: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PURSUIT_SPEED_FACTOR: f32 = 7.0;
    pub const DEFAULT_MAX_ATTACK_RANGE: f32 = 5.0;
    pub const DEFAULT_AUTO_ATTACK_ABILITIES: [AbilityId; 2] = [AbilityId(28704), AbilityId(28705)];
    pub const DEFAULT_AUTO_ATTACK_INTERVAL_MS: u64 = 1_500;
    pub const DEFAULT_SPECIAL_ABILITY_INTERVAL_MS: u64 = 10_000;
    pub const DEFAULT_EXECUTION_DELAY_EPSILON_US: u64 = 100;

    pub fn new() -> Self {
        Self {
            pursuit_speed_factor: Self::DEFAULT_PURSUIT_SPEED_FACTOR,
            max_attack_range: Self::DEFAULT_MAX_ATTACK_RANGE,
            auto_attack_abilities: Self::DEFAULT_AUTO_ATTACK_ABILITIES,
            auto_attack_interval_ms: Self::DEFAULT_AUTO_ATTACK_INTERVAL_MS,
            special_ability_interval_ms: Self::DEFAULT_SPECIAL_ABILITY_INTERVAL_MS,
            execution_delay_epsilon_us: Self::DEFAULT_EXECUTION_DELAY_EPSILON_US,
        }
    }

    pub fn auto_attack_interval(&self) -> Duration {
        Duration::from_millis(self.auto_attack_interval_ms)
    }

    pub fn special_ability_interval(&self) -> Duration {
        Duration::from_millis(self.special_ability_interval_ms)
    }

    pub fn execution_delay_epsilon(&self) -> Duration {
        Duration::from_micros(self.execution_delay_epsilon_us)
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self::new()
    }
}
