use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paldex_advisor::advisor::{recommend_battle_team, recommend_work_team, resolve_structures};
use paldex_advisor::catalog::{Catalog, CatalogItem, Collection};
use paldex_advisor::combat::get_boss;
use paldex_advisor::core::{AdvisorConfig, Element, TypeSet};
use paldex_advisor::progress::{evaluate_achievements, ProgressFacts};
use paldex_advisor::skills::parse_skills;

const WORK: [&str; 4] = [
    "Handiwork Lv.2, Mining Lv.3, Transporting Lv.1",
    "Kindling Lv.3",
    "Watering Lv.2, Planting Lv.1, Gathering Lv.1",
    "Cooling Lv.2, Lumbering Lv.2, Electricity Lv.1, Farming Lv.1",
];

fn large_catalog(n: usize) -> Catalog {
    let items = (0..n)
        .map(|i| {
            let first = Element::ALL[i % Element::ALL.len()];
            let second = Element::ALL[(i * 7 + 3) % Element::ALL.len()];
            let types = TypeSet::new([first, second]).unwrap_or_else(|| TypeSet::single(first));
            CatalogItem::new(i.to_string(), format!("Pal{i}"), types, WORK[i % WORK.len()])
        })
        .collect();
    Catalog::new(items).unwrap()
}

fn full_collection(catalog: &Catalog) -> Collection {
    Collection::from_names(catalog.items().iter().map(|item| item.name.as_str()))
}

fn bench_work(c: &mut Criterion) {
    let config = AdvisorConfig::default();
    let catalog = large_catalog(200);
    let collection = full_collection(&catalog);
    let structures = resolve_structures(&["Stone Pit", "Crusher", "Furnace", "Mill", "Cooler Box"]).unwrap();

    c.bench_function("recommend_work_team_200", |b| {
        b.iter(|| recommend_work_team(black_box(&catalog), black_box(&collection), &structures, 15, &config))
    });
}

fn bench_battle(c: &mut Criterion) {
    let config = AdvisorConfig::default();
    let catalog = large_catalog(200);
    let collection = full_collection(&catalog);
    let boss = get_boss("Jormuntide");

    c.bench_function("recommend_battle_team_200", |b| {
        b.iter(|| recommend_battle_team(black_box(&catalog), black_box(&collection), boss, 5, &config))
    });
}

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("parse_skills", |b| {
        b.iter(|| parse_skills(black_box("Handiwork Lv.2, Mining Lv.3, Cooling, Transporting Lv.1")))
    });
}

fn bench_achievements(c: &mut Criterion) {
    let catalog = large_catalog(200);
    let mut facts = ProgressFacts::new();
    for item in catalog.items().iter().step_by(3) {
        facts.discover(&item.name);
    }
    for boss in ["Bushi", "Chillet", "Zoe and Grizzbolt", "Jetragon", "Bellanoir"] {
        facts.record_defeat(boss);
    }

    c.bench_function("evaluate_achievements", |b| {
        b.iter(|| evaluate_achievements(black_box(&facts), black_box(&catalog)))
    });
}

criterion_group!(benches, bench_work, bench_battle, bench_parsing, bench_achievements);
criterion_main!(benches);
