//! Predicates bound to each rule type by the standard registry.

use tracing::warn;

use super::{CheckContext, Comparison, PrerequisiteError, PrerequisiteType};
use crate::env::AccountCurrency;
use crate::state::{AbilityId, PrerequisiteId};

/// When set, a CosmicRewards check with `LessThanOrEqual` passes if the player
/// holds *at least* `value`, matching how existing rule data was authored.
pub const COSMIC_REWARDS_LTE_MEANS_AT_LEAST: bool = true;

type CheckResult = Result<bool, PrerequisiteError>;

fn unhandled(kind: PrerequisiteType, comparison: Option<Comparison>, default: bool) -> bool {
    warn!(
        target: "behavior::prerequisite",
        kind = %kind,
        comparison = ?comparison,
        default,
        "unhandled comparison for prerequisite type"
    );
    default
}

/// Equal / NotEqual against a single player fact; anything else is unhandled.
fn equality(
    kind: PrerequisiteType,
    comparison: Option<Comparison>,
    fact: u32,
    value: u32,
) -> bool {
    match comparison {
        Some(Comparison::Equal) => fact == value,
        Some(Comparison::NotEqual) => fact != value,
        other => unhandled(kind, other, false),
    }
}

fn presence(kind: PrerequisiteType, comparison: Option<Comparison>, present: bool) -> bool {
    match comparison {
        Some(Comparison::Equal) => present,
        Some(Comparison::NotEqual) => !present,
        other => unhandled(kind, other, false),
    }
}

/// Level checks interpret no comparison; every one passes with a warning.
pub(super) fn level(
    _ctx: &CheckContext<'_, '_>,
    comparison: Option<Comparison>,
    _value: u32,
    _object_id: u32,
) -> CheckResult {
    Ok(unhandled(PrerequisiteType::Level, comparison, true))
}

pub(super) fn race(
    ctx: &CheckContext<'_, '_>,
    comparison: Option<Comparison>,
    value: u32,
    _object_id: u32,
) -> CheckResult {
    Ok(equality(PrerequisiteType::Race, comparison, ctx.player.race(), value))
}

pub(super) fn class(
    ctx: &CheckContext<'_, '_>,
    comparison: Option<Comparison>,
    value: u32,
    _object_id: u32,
) -> CheckResult {
    Ok(equality(PrerequisiteType::Class, comparison, ctx.player.class(), value))
}

pub(super) fn faction(
    ctx: &CheckContext<'_, '_>,
    comparison: Option<Comparison>,
    value: u32,
    _object_id: u32,
) -> CheckResult {
    Ok(equality(
        PrerequisiteType::Faction,
        comparison,
        ctx.player.faction(),
        value,
    ))
}

pub(super) fn path(
    ctx: &CheckContext<'_, '_>,
    comparison: Option<Comparison>,
    value: u32,
    _object_id: u32,
) -> CheckResult {
    Ok(equality(PrerequisiteType::Path, comparison, ctx.player.path(), value))
}

/// `object_id` names the quest, `value` the required quest state.
pub(super) fn quest(
    ctx: &CheckContext<'_, '_>,
    comparison: Option<Comparison>,
    value: u32,
    object_id: u32,
) -> CheckResult {
    Ok(equality(
        PrerequisiteType::Quest,
        comparison,
        ctx.player.quest_state(object_id),
        value,
    ))
}

pub(super) fn achievement(
    ctx: &CheckContext<'_, '_>,
    comparison: Option<Comparison>,
    _value: u32,
    object_id: u32,
) -> CheckResult {
    Ok(presence(
        PrerequisiteType::Achievement,
        comparison,
        ctx.player.has_achievement(object_id),
    ))
}

pub(super) fn spell(
    ctx: &CheckContext<'_, '_>,
    comparison: Option<Comparison>,
    _value: u32,
    object_id: u32,
) -> CheckResult {
    Ok(presence(
        PrerequisiteType::Spell,
        comparison,
        ctx.player.knows_spell(AbilityId(object_id)),
    ))
}

/// Evaluates the rule named by `object_id`, negated for NotEqual.
pub(super) fn prerequisite(
    ctx: &CheckContext<'_, '_>,
    comparison: Option<Comparison>,
    _value: u32,
    object_id: u32,
) -> CheckResult {
    let nested = ctx.evaluate_nested(PrerequisiteId(object_id))?;
    Ok(match comparison {
        Some(Comparison::NotEqual) => !nested,
        _ => nested,
    })
}

pub(super) fn cosmic_rewards(
    ctx: &CheckContext<'_, '_>,
    comparison: Option<Comparison>,
    value: u32,
    _object_id: u32,
) -> CheckResult {
    let amount = ctx
        .env()
        .accounts()?
        .currency_amount(ctx.player.id(), AccountCurrency::CosmicReward);
    let value = u64::from(value);
    Ok(match comparison {
        Some(Comparison::Equal) => amount == value,
        Some(Comparison::LessThanOrEqual) if COSMIC_REWARDS_LTE_MEANS_AT_LEAST => amount >= value,
        Some(Comparison::LessThanOrEqual) => amount <= value,
        other => unhandled(PrerequisiteType::CosmicRewards, other, false),
    })
}
