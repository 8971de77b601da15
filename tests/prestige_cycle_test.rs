//! Integration test: Complete prestige cycle
//!
//! Tests the full flow: new game → earn → prestige → verify reset

use galactic_explorer::achievements::AchievementId;
use galactic_explorer::catalog::{GeneratorId, SiteId};
use galactic_explorer::core::prestige::prestige_points_for;
use galactic_explorer::core::{EngineError, GameEvent, ProgressionEngine};
use galactic_explorer::modifiers::ModifierId;

const T0: i64 = 1_704_067_200_000;

/// Clicks and buys until the first prestige threshold is met.
fn play_to_first_prestige(engine: &mut ProgressionEngine) {
    for _ in 0..20 {
        engine.click();
    }
    engine.purchase_generator(GeneratorId::Solar, 1).unwrap();
    engine.tick(100);

    // Clicking alone reaches the threshold; no need to model a buying strategy.
    let mut guard = 0;
    while engine.state().stats.total_earned < 1_000_000.0 && guard < 10_000_000 {
        engine.click();
        guard += 1;
    }
}

#[test]
fn test_complete_prestige_cycle_first_prestige() {
    let mut engine = ProgressionEngine::new(T0);
    assert!(!engine.can_prestige());

    play_to_first_prestige(&mut engine);
    engine.purchase_modifier(ModifierId::EnhancedClickers).unwrap();
    engine.explore_site(SiteId::Moon).unwrap();
    engine.tick(100);
    assert!(engine.can_prestige());

    let achievements_before = engine.state().achievements.clone();
    assert!(achievements_before.contains(&AchievementId::FirstSpark));
    let clicks_before = engine.state().stats.total_clicks;
    let epoch_before = engine.state().stats.epoch_start;
    let challenge_before = engine.state().challenge.clone();
    let earned_before = engine.state().stats.total_earned;
    engine.drain_events();

    let gained = engine.prestige().unwrap();
    assert_eq!(gained, prestige_points_for(earned_before));
    assert!(gained >= 1);

    let state = engine.state();
    assert_eq!(state.currency, 0.0);
    assert!(state.generators.iter().all(|g| g.owned == 0));
    assert!(state.owned_modifiers.is_empty());
    assert!(state.explored_sites.is_empty());
    assert_eq!(state.prestige.level, 1);
    assert_eq!(state.prestige.points, gained);
    assert_eq!(state.stats.total_earned, 0.0);
    assert_eq!(state.stats.total_spent, 0.0);
    assert_eq!(state.stats.total_purchases, 0);
    assert_eq!(state.stats.session_clicks, 0);
    assert_eq!(state.stats.session_start, engine.now_ms());

    assert_eq!(state.achievements, achievements_before);
    assert_eq!(state.stats.total_clicks, clicks_before);
    assert_eq!(state.stats.epoch_start, epoch_before);
    assert_eq!(state.challenge, challenge_before);

    assert_eq!(
        engine.drain_events(),
        vec![GameEvent::PrestigeCompleted {
            points_gained: gained
        }]
    );
}

#[test]
fn test_prestige_bonus_applies_to_next_run() {
    let mut engine = ProgressionEngine::new(T0);
    play_to_first_prestige(&mut engine);
    engine.prestige().unwrap();

    assert!((engine.click() - 1.05).abs() < 1e-12);

    while engine.state().currency < 100.0 {
        engine.click();
    }
    engine.purchase_generator(GeneratorId::Satellite, 1).unwrap();
    assert!((engine.rate() - 1.1).abs() < 1e-12);
}

#[test]
fn test_second_prestige_needs_higher_threshold() {
    let mut engine = ProgressionEngine::new(T0);
    play_to_first_prestige(&mut engine);
    engine.prestige().unwrap();

    play_to_first_prestige(&mut engine);
    assert!(!engine.can_prestige());
    let before = engine.state().clone();
    assert!(matches!(
        engine.prestige(),
        Err(EngineError::PrestigeNotEligible { required, .. }) if required == 10_000_000.0
    ));
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_achievements_survive_multiple_prestiges() {
    let mut engine = ProgressionEngine::new(T0);
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..2 {
        play_to_first_prestige(&mut engine);
        engine.tick(100);
        for id in &seen {
            assert!(engine.state().achievements.contains(id));
        }
        seen = engine.state().achievements.clone();
        if engine.can_prestige() {
            engine.prestige().unwrap();
        }
        assert!(seen.is_subset(&engine.state().achievements));
    }
}
