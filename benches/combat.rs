//! Combat throughput benchmarks.
//!
//! Run with: cargo bench --bench combat

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hunt_combat::cards::{CardCatalog, Weapon};
use hunt_combat::core::{CombatAction, CombatConfig, PlayerRoster};
use hunt_combat::monsters::{Bestiary, Monster};
use hunt_combat::rules::CombatEngine;

/// Play the first card action offered, otherwise end the turn.
fn greedy(engine: &CombatEngine) -> CombatAction {
    engine
        .legal_actions()
        .into_iter()
        .find(|a| matches!(a, CombatAction::PlayCard { .. }))
        .unwrap_or(CombatAction::EndTurn)
}

fn run_combat(seed: u64, roster: &PlayerRoster, monster: &Monster) -> u32 {
    let mut engine = CombatEngine::new(CombatConfig::default(), seed);
    engine.start_combat(roster, monster).unwrap();

    let mut steps = 0;
    while !engine.is_over() && steps < 500 {
        let action = greedy(&engine);
        engine.apply(&action).unwrap();
        steps += 1;
    }
    engine.state().map_or(0, |s| s.turn)
}

fn bench_full_combat(c: &mut Criterion) {
    let catalog = CardCatalog::standard();
    let bestiary = Bestiary::standard();
    let mut group = c.benchmark_group("full_combat");

    for weapon in [Weapon::SwordAndShield, Weapon::Greatsword, Weapon::Bow] {
        let roster = PlayerRoster::new(80, weapon, catalog.starter_deck(weapon));
        let monster = bestiary.get("kulu_ya_ku").unwrap().clone();

        group.bench_with_input(BenchmarkId::from_parameter(format!("{weapon:?}")), &roster, |b, roster| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                black_box(run_combat(seed, roster, &monster))
            });
        });
    }

    group.finish();
}

fn bench_legal_actions(c: &mut Criterion) {
    let catalog = CardCatalog::standard();
    let roster = PlayerRoster::new(80, Weapon::Bow, catalog.starter_deck(Weapon::Bow));
    let monster = Bestiary::standard().get("great_jagras").unwrap().clone();

    let mut engine = CombatEngine::new(CombatConfig::default(), 7);
    engine.start_combat(&roster, &monster).unwrap();

    c.bench_function("legal_actions", |b| b.iter(|| black_box(engine.legal_actions())));
}

fn bench_snapshot(c: &mut Criterion) {
    let catalog = CardCatalog::standard();
    let roster = PlayerRoster::new(80, Weapon::Greatsword, catalog.starter_deck(Weapon::Greatsword));
    let monster = Bestiary::standard().get("pukei_pukei").unwrap().clone();

    let mut engine = CombatEngine::new(CombatConfig::default(), 7);
    engine.start_combat(&roster, &monster).unwrap();
    for _ in 0..3 {
        engine.end_player_turn().unwrap();
    }

    c.bench_function("snapshot", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(benches, bench_full_combat, bench_legal_actions, bench_snapshot);
criterion_main!(benches);
