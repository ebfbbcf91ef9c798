use std::fs;
use std::path::Path;

use behavior_content::{
    AbilityLoader, ConfigLoader, ContentFactory, CreatureLoader, InteractionLoader,
    PrerequisiteLoader,
};
use behavior_core::{
    AbilityId, BehaviorConfig, CreatureId, InteractionId, InteractionKind, PrerequisiteFlags,
    PrerequisiteId, PrerequisiteType,
};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn bundled_content_loads() {
    let bundle = ContentFactory::bundled().load_bundle().unwrap();

    assert_eq!(bundle.config, BehaviorConfig::default());
    assert!(bundle.abilities.iter().any(|a| a.id == AbilityId(28704)));

    let chest = bundle
        .creatures
        .iter()
        .find(|c| c.id == CreatureId(2001))
        .unwrap();
    assert_eq!(
        chest.activation_chain().as_slice(),
        &[AbilityId(41001), AbilityId(41002)]
    );

    let hold = bundle
        .interactions
        .iter()
        .find(|i| i.id == InteractionId(1))
        .unwrap();
    assert_eq!(hold.kind, InteractionKind::PressAndHold);
    assert_eq!(hold.ability_chain().len(), 3);

    let any_class = bundle
        .prerequisites
        .iter()
        .find(|p| p.id == PrerequisiteId(2))
        .unwrap();
    assert!(any_class.flags.contains(PrerequisiteFlags::EVALUATE_ANY));
    assert_eq!(any_class.checks.len(), 2);
}

#[test]
fn config_keeps_defaults_for_missing_keys() {
    let config = ConfigLoader::parse("special_ability_interval_ms = 4000\n").unwrap();
    assert_eq!(config.special_ability_interval_ms, 4_000);
    assert_eq!(
        config.auto_attack_abilities,
        BehaviorConfig::DEFAULT_AUTO_ATTACK_ABILITIES
    );
}

#[test]
fn config_rejects_non_positive_speed() {
    assert!(ConfigLoader::parse("pursuit_speed_factor = 0.0\n").is_err());
    assert!(ConfigLoader::parse("auto_attack_interval_ms = 0\n").is_err());
}

#[test]
fn duplicate_ids_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "abilities.ron",
        "(abilities: [(id: 5, max_range: 1.0), (id: 5, max_range: 2.0)])",
    );

    let err = AbilityLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("Duplicate ability id"), "{err}");
}

#[test]
fn reserved_ability_id_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "abilities.ron", "(abilities: [(id: 0, max_range: 1.0)])");
    assert!(AbilityLoader::load(&path).is_err());
}

#[test]
fn creature_defaults_fill_omitted_fields() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "creatures.ron", "(creatures: [(id: 10)])");

    let creatures = CreatureLoader::load(&path).unwrap();
    assert_eq!(creatures.len(), 1);
    assert!(creatures[0].activation_chain().is_empty());
    assert!(creatures[0].special_ability.is_none());
}

#[test]
fn interaction_kind_defaults_to_generic() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "interactions.ron", "(interactions: [(id: 4)])");

    let interactions = InteractionLoader::load(&path).unwrap();
    assert_eq!(interactions[0].kind, InteractionKind::Interaction);
}

#[test]
fn dangling_rule_reference_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "prerequisites.ron",
        "(prerequisites: [(id: 1, checks: [(kind: 11, object_id: 9)])])",
    );

    let err = PrerequisiteLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("unknown rule"), "{err}");
}

#[test]
fn too_many_checks_fail_to_parse() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "prerequisites.ron",
        "(prerequisites: [(id: 1, checks: [(kind: 2), (kind: 2), (kind: 2), (kind: 2)])])",
    );
    assert!(PrerequisiteLoader::load(&path).is_err());
}

#[test]
fn unknown_rule_types_load_as_raw_numbers() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "prerequisites.ron",
        "(prerequisites: [(id: 1, checks: [(kind: 999)])])",
    );

    let rules = PrerequisiteLoader::load(&path).unwrap();
    assert_eq!(rules[0].checks[0].kind, 999);
    assert!(PrerequisiteType::from_repr(999).is_none());
}

#[test]
fn partial_directory_fills_missing_catalogs() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "abilities.ron", "(abilities: [(id: 7, max_range: 4.0)])");

    let bundle = ContentFactory::new(dir.path()).load_bundle().unwrap();
    assert_eq!(bundle.abilities.len(), 1);
    assert!(bundle.creatures.is_empty());
    assert_eq!(bundle.config, BehaviorConfig::default());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "creatures.ron", "(creatures: [(id: \"x\")])");
    assert!(ContentFactory::new(dir.path()).load_bundle().is_err());
}
