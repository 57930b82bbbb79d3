//! Tests for Profile validation
//!
//! Every malformed profile must be rejected at construction with the
//! matching ProfileError, so the simulator never sees one.

use probabilistic_serial_core_rs::{Profile, ProfileError};

#[test]
fn test_valid_profile() {
    let profile = Profile::new(vec![vec![0, 1, 2], vec![2, 1, 0]]).unwrap();

    assert_eq!(profile.agent_count(), 2);
    assert_eq!(profile.house_count(), 3);
    assert_eq!(profile.ranking(1), &[2, 1, 0]);
    assert_eq!(profile.top_choice(1), 2);
    assert_eq!(profile.rank_of(1, 0), 2);
}

#[test]
fn test_empty_profile_rejected() {
    assert_eq!(Profile::new(vec![]).unwrap_err(), ProfileError::Empty);
}

#[test]
fn test_zero_houses_rejected() {
    assert_eq!(
        Profile::new(vec![vec![], vec![]]).unwrap_err(),
        ProfileError::NoHouses
    );
}

#[test]
fn test_house_count_mismatch_rejected() {
    let err = Profile::new(vec![vec![0, 1], vec![0, 1, 2]]).unwrap_err();

    assert_eq!(
        err,
        ProfileError::HouseCountMismatch {
            agent: 1,
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn test_out_of_range_house_rejected() {
    let err = Profile::new(vec![vec![0, 1], vec![0, 2]]).unwrap_err();

    assert_eq!(
        err,
        ProfileError::HouseOutOfRange {
            agent: 1,
            house: 2,
            house_count: 2
        }
    );
}

#[test]
fn test_duplicate_house_rejected() {
    let err = Profile::new(vec![vec![1, 1, 0]]).unwrap_err();

    assert_eq!(err, ProfileError::DuplicateHouse { agent: 0, house: 1 });
}

#[test]
fn test_error_messages_name_the_agent() {
    let err = Profile::new(vec![vec![0, 1], vec![1, 1]]).unwrap_err();
    assert_eq!(err.to_string(), "Agent 1 ranks house 1 more than once");
}

#[test]
fn test_json_round_trip() {
    let profile = Profile::new(vec![vec![1, 0], vec![0, 1]]).unwrap();

    let json = serde_json::to_string(&profile).unwrap();
    assert_eq!(json, "[[1,0],[0,1]]");

    let back: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, profile);
}

#[test]
fn test_json_rejects_invalid_rankings() {
    let result: Result<Profile, _> = serde_json::from_str("[[0,0]]");
    assert!(result.is_err());
}
