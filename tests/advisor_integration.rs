//! Integration tests for the base and battle advisors

use paldex_advisor::advisor::{
    capacity_for_base_level, recommend_battle_team, recommend_work_team, resolve_structures,
    BattleRecommendation, Effectiveness, WorkRecommendation,
};
use paldex_advisor::catalog::{load_catalog, load_catalog_from_json, Catalog, Collection};
use paldex_advisor::combat::get_boss;
use paldex_advisor::core::{AdvisorConfig, AdvisorError};
use std::path::Path;

const CATALOG_JSON: &str = r#"[
    { "id": 2, "name": "Cattiva", "type": "Neutral", "work suitability": "Handiwork Lv.1, Transporting Lv.1, Gathering Lv.1, Mining Lv.1" },
    { "id": 1, "name": "Lamball", "type": "Neutral", "work suitability": "Handiwork Lv.1, Transporting Lv.1, Farming Lv.1" },
    { "id": 6, "name": "Fuack", "type": "Water", "work suitability": "Watering Lv.1, Handiwork Lv.1, Transporting Lv.1" },
    { "id": 10, "name": "Tanzee", "type": "Grass", "work suitability": "Planting Lv.1, Handiwork Lv.1, Lumbering Lv.1, Gathering Lv.1, Transporting Lv.1" },
    { "id": 13, "name": "Depresso", "type": "Dark", "work suitability": "Handiwork Lv.1, Transporting Lv.1, Mining Lv.1" },
    { "id": 57, "name": "Digtoise", "type": "Ground", "work suitability": "Mining Lv.3" },
    { "id": 61, "name": "Anubis", "type": "Ground", "work suitability": ["Handiwork Lv.4", "Mining Lv.3", "Transporting Lv.2"] },
    { "id": 88, "name": "Frostallion", "type": "Ice", "work suitability": "Cooling Lv.4" }
]"#;

fn catalog() -> Catalog {
    load_catalog_from_json(CATALOG_JSON).unwrap()
}

fn everything_but_frostallion() -> Collection {
    Collection::from_names(["Cattiva", "Lamball", "Fuack", "Tanzee", "Depresso", "Digtoise", "anubis"])
}

fn names<T>(team: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
    team.iter().map(|c| name(c).to_string()).collect()
}

#[test]
fn test_mining_and_crusher_team() {
    let config = AdvisorConfig::default();
    let structures = resolve_structures(&["Stone Pit", "crusher"]).unwrap();

    let result = recommend_work_team(&catalog(), &everything_but_frostallion(), &structures, 3, &config);
    let WorkRecommendation::Recommended(plan) = result else {
        panic!("expected a recommendation, got {result:?}");
    };

    // Anubis: (4 + 3 + 2) * 10 * 2 + 3 * 2 = 186
    // Cattiva: 3 * 20 + 4 * 2 = 68, Depresso: 3 * 20 + 3 * 2 = 66
    assert_eq!(names(&plan.team, |c| c.name.as_str()), vec!["Anubis", "Cattiva", "Depresso"]);
    assert_eq!(plan.team[0].score, 186);
    assert_eq!(plan.team[1].score, 68);
    assert_eq!(plan.team[2].score, 66);
    assert_eq!(
        plan.team[0].matched,
        vec!["Mining Lv.3", "Handiwork Lv.4", "Transporting Lv.2"]
    );

    let skills: Vec<&str> = plan.demands.iter().map(|d| d.skill.as_str()).collect();
    assert_eq!(skills, vec!["Mining", "Handiwork", "Transporting"]);
    assert!(plan.coverage.iter().all(|c| c.covered));
    let mining = &plan.coverage[0];
    assert_eq!(mining.level, 3);
    assert_eq!(mining.contributors, vec!["Anubis", "Cattiva", "Depresso"]);
    assert!(!plan.has_passive_structures);
}

#[test]
fn test_undiscovered_items_never_recommended() {
    let config = AdvisorConfig::default();
    let structures = resolve_structures(&["Cooler Box"]).unwrap();

    let result = recommend_work_team(&catalog(), &everything_but_frostallion(), &structures, 15, &config);
    let WorkRecommendation::Recommended(plan) = result else {
        panic!("expected a recommendation");
    };
    assert_eq!(plan.team.len(), 7);
    assert!(plan.team.iter().all(|c| c.name != "Frostallion"));
    assert!(!plan.coverage[0].covered);
    assert_eq!(plan.coverage[0].level, 0);
}

#[test]
fn test_outcome_precedence() {
    let config = AdvisorConfig::default();
    let catalog = catalog();
    let empty = Collection::new();

    assert_eq!(
        recommend_work_team(&catalog, &empty, &[], 5, &config),
        WorkRecommendation::NoGoalSelected
    );
    let pit = resolve_structures(&["Stone Pit"]).unwrap();
    assert_eq!(
        recommend_work_team(&catalog, &empty, &pit, 5, &config),
        WorkRecommendation::NoCollection
    );

    let passive = resolve_structures(&["Pal Bed", "Feed Box"]).unwrap();
    match recommend_work_team(&catalog, &everything_but_frostallion(), &passive, 2, &config) {
        WorkRecommendation::PassiveOnly { team } => {
            // Versatility only: Tanzee has five skills, Cattiva four
            assert_eq!(names(&team, |c| c.name.as_str()), vec!["Tanzee", "Cattiva"]);
        }
        other => panic!("expected passive outcome, got {other:?}"),
    }
}

#[test]
fn test_mixed_passive_selection_flags_plan() {
    let config = AdvisorConfig::default();
    let structures = resolve_structures(&["Pal Bed", "Stone Pit"]).unwrap();
    let result = recommend_work_team(&catalog(), &everything_but_frostallion(), &structures, 5, &config);
    let WorkRecommendation::Recommended(plan) = result else {
        panic!("expected a recommendation");
    };
    assert!(plan.has_passive_structures);
    assert_eq!(plan.demands.len(), 1);
}

#[test]
fn test_unknown_structure_is_an_error() {
    let err = resolve_structures(&["Stone Pit", "Moon Base"]).unwrap_err();
    assert!(matches!(err, AdvisorError::UnknownStructure(name) if name == "Moon Base"));
}

#[test]
fn test_capacity_drives_team_size() {
    let config = AdvisorConfig::default();
    let structures = resolve_structures(&["Crusher"]).unwrap();
    let collection = everything_but_frostallion();

    for (level, expected) in [(1, 5), (3, 6), (10, 7), (20, 7)] {
        let capacity = capacity_for_base_level(level, &config);
        let WorkRecommendation::Recommended(plan) =
            recommend_work_team(&catalog(), &collection, &structures, capacity, &config)
        else {
            panic!("expected a recommendation");
        };
        assert_eq!(plan.team.len(), expected, "base level {level}");
        assert_eq!(plan.capacity, capacity);
    }
}

#[test]
fn test_battle_against_fire_boss() {
    let config = AdvisorConfig::default();
    let bushi = get_boss("Bushi").unwrap();
    let collection = Collection::from_names(["Lamball", "Fuack", "Tanzee", "Digtoise"]);

    let result = recommend_battle_team(&catalog(), &collection, Some(bushi), 2, &config);
    let BattleRecommendation::Recommended(plan) = result else {
        panic!("expected a recommendation");
    };

    assert_eq!(names(&plan.team, |c| c.name.as_str()), vec!["Fuack", "Digtoise"]);
    assert_eq!(names(&plan.all_scores, |c| c.name.as_str()), vec!["Fuack", "Digtoise", "Lamball", "Tanzee"]);

    let fuack = &plan.team[0];
    assert_eq!(fuack.offensive, 2.0);
    assert_eq!(fuack.resistance, 1.5);
    assert!((fuack.score - 5.8).abs() < 1e-4);
    assert_eq!(fuack.effectiveness, Effectiveness::SuperEffective);
    assert_eq!(fuack.suggested_level, 18);

    let tanzee = &plan.all_scores[3];
    assert_eq!(tanzee.offensive, 0.5);
    assert_eq!(tanzee.resistance, 0.5);
    assert_eq!(tanzee.effectiveness, Effectiveness::NotEffective);
    assert_eq!(tanzee.suggested_level, 28);
}

#[test]
fn test_battle_outcomes_and_clamping() {
    let config = AdvisorConfig::default();
    let catalog = catalog();
    let boss = get_boss("Jetragon");

    assert!(matches!(
        recommend_battle_team(&catalog, &everything_but_frostallion(), None, 5, &config),
        BattleRecommendation::NoBossSelected
    ));
    assert!(matches!(
        recommend_battle_team(&catalog, &Collection::new(), boss, 5, &config),
        BattleRecommendation::NoCollection
    ));

    let BattleRecommendation::Recommended(plan) =
        recommend_battle_team(&catalog, &everything_but_frostallion(), boss, 0, &config)
    else {
        panic!("expected a recommendation");
    };
    assert_eq!(plan.team_size, 1);
    assert_eq!(plan.team.len(), 1);

    let BattleRecommendation::Recommended(plan) =
        recommend_battle_team(&catalog, &everything_but_frostallion(), boss, 40, &config)
    else {
        panic!("expected a recommendation");
    };
    assert_eq!(plan.team_size, 5);
    assert_eq!(plan.team.len(), 5);
    assert_eq!(plan.all_scores.len(), 7);
}

#[test]
fn test_outcomes_serialize_with_tag() {
    let config = AdvisorConfig::default();
    let value = serde_json::to_value(recommend_work_team(&catalog(), &Collection::new(), &[], 5, &config)).unwrap();
    assert_eq!(value["outcome"], "no_goal_selected");

    let structures = resolve_structures(&["Stone Pit"]).unwrap();
    let value = serde_json::to_value(recommend_work_team(
        &catalog(),
        &everything_but_frostallion(),
        &structures,
        5,
        &config,
    ))
    .unwrap();
    assert_eq!(value["outcome"], "recommended");
    assert_eq!(value["team"][0]["name"], "Anubis");
}

#[test]
fn test_bundled_catalog_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/pals.json");
    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 20);
    let penking = catalog.get("penking").unwrap();
    assert_eq!(penking.types.to_string(), "Water, Ice");
    assert_eq!(penking.skills().proficiency("Cooling"), Some(2));
}

#[test]
fn test_oversized_level_ranks_without_overflow() {
    let config = AdvisorConfig::default();
    let catalog = load_catalog_from_json(
        r#"[
            { "name": "Digtoise", "type": "Ground", "work suitability": "Mining Lv.3" },
            { "name": "Big", "type": "Ground", "work suitability": "Mining Lv.500000000" }
        ]"#,
    )
    .unwrap();
    let collection = Collection::from_names(["Digtoise", "Big"]);
    let structures = resolve_structures(&["Stone Pit"]).unwrap();

    let WorkRecommendation::Recommended(plan) =
        recommend_work_team(&catalog, &collection, &structures, 5, &config)
    else {
        panic!("expected a recommendation");
    };
    assert_eq!(names(&plan.team, |c| c.name.as_str()), vec!["Big", "Digtoise"]);
    assert_eq!(plan.team[0].score, u32::MAX);
    assert_eq!(plan.coverage[0].level, 500_000_000);
}
