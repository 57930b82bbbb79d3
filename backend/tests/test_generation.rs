//! Tests for profile generation (random and enumerated)

use probabilistic_serial_core_rs::generation::{
    all_rankings, generate_profile, generate_ranking, GenerationError, ProfileEnumerator,
    MAX_ENUMERABLE_HOUSES,
};
use probabilistic_serial_core_rs::RngManager;
use std::collections::HashSet;

#[test]
fn test_generate_profile_shape() {
    let mut rng = RngManager::new(42);
    let profile = generate_profile(5, 7, &mut rng).unwrap();

    assert_eq!(profile.agent_count(), 5);
    assert_eq!(profile.house_count(), 7);
}

#[test]
fn test_generate_profile_deterministic() {
    let mut rng1 = RngManager::new(8675309);
    let mut rng2 = RngManager::new(8675309);

    assert_eq!(
        generate_profile(4, 4, &mut rng1).unwrap(),
        generate_profile(4, 4, &mut rng2).unwrap()
    );
}

#[test]
fn test_generate_profile_varies_between_agents() {
    // With 8 houses, 10 agents all drawing the same ranking is astronomically unlikely
    let mut rng = RngManager::new(1);
    let profile = generate_profile(10, 8, &mut rng).unwrap();

    assert!(!profile.is_unanimous());
}

#[test]
fn test_generate_ranking_is_permutation() {
    let mut rng = RngManager::new(5);
    let mut ranking = generate_ranking(9, &mut rng);
    ranking.sort_unstable();

    assert_eq!(ranking, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_zero_agents_is_degenerate() {
    let mut rng = RngManager::new(1);

    assert_eq!(
        generate_profile(0, 3, &mut rng).unwrap_err(),
        GenerationError::DegenerateInput {
            agents: 0,
            houses: 3
        }
    );
}

#[test]
fn test_zero_houses_is_degenerate() {
    let mut rng = RngManager::new(1);

    assert!(matches!(
        generate_profile(3, 0, &mut rng),
        Err(GenerationError::DegenerateInput { houses: 0, .. })
    ));
}

#[test]
fn test_all_rankings_are_distinct_and_sorted() {
    let rankings = all_rankings(4).unwrap();

    assert_eq!(rankings.len(), 24);
    let unique: HashSet<_> = rankings.iter().cloned().collect();
    assert_eq!(unique.len(), 24);

    let mut sorted = rankings.clone();
    sorted.sort();
    assert_eq!(sorted, rankings, "rankings should be lexicographic");
}

#[test]
fn test_all_rankings_limit() {
    assert_eq!(
        all_rankings(MAX_ENUMERABLE_HOUSES + 1).unwrap_err(),
        GenerationError::TooManyRankings {
            houses: MAX_ENUMERABLE_HOUSES + 1,
            limit: MAX_ENUMERABLE_HOUSES
        }
    );
}

#[test]
fn test_all_rankings_zero_houses() {
    assert!(matches!(
        all_rankings(0),
        Err(GenerationError::DegenerateInput { houses: 0, .. })
    ));
}

#[test]
fn test_profile_enumerator_covers_everything_once() {
    let profiles: Vec<_> = ProfileEnumerator::new(3, 2).unwrap().collect();

    assert_eq!(profiles.len(), 8);
    let unique: HashSet<_> = profiles
        .iter()
        .map(|p| p.rankings().to_vec())
        .collect();
    assert_eq!(unique.len(), 8);
}

#[test]
fn test_profile_enumerator_degenerate() {
    assert!(ProfileEnumerator::new(0, 2).is_err());
}
