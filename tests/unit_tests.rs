// Unit tests for Lume Users core functions

use chrono::Utc;
use lume_users::core::{
    filters::{filter_profiles, matches_interests, FilterCriteria},
    pagination::paginate,
    scoring::{common_interests, compatibility_score},
};
use lume_users::models::{MatchPreferences, Profile};

fn profile(id: usize, age: u32, location: &str, interests: &[&str], is_active: bool) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("User {}", id),
        email: format!("user{}@example.com", id),
        age,
        bio: String::new(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
        profile_image: None,
        is_active,
        last_seen: Utc::now(),
        match_preferences: MatchPreferences::derived_from_age(age),
    }
}

fn population() -> Vec<Profile> {
    let locations = ["San Francisco, CA", "Seattle, WA", "Portland, OR", "Austin, TX"];
    let interests = ["Travel", "Art", "Yoga", "Hiking", "Music"];

    (0..40)
        .map(|i| {
            profile(
                i,
                18 + (i as u32 * 7) % 30,
                locations[i % locations.len()],
                &[interests[i % interests.len()], interests[(i + 2) % interests.len()]],
                i % 4 != 0,
            )
        })
        .collect()
}

fn is_subsequence(sub: &[&Profile], full: &[Profile]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|p| it.any(|q| q.id == p.id))
}

#[test]
fn test_filter_preserves_store_order() {
    let profiles = population();
    let criteria_set = vec![
        FilterCriteria::default(),
        FilterCriteria { active: Some(true), ..Default::default() },
        FilterCriteria { min_age: Some(25), max_age: Some(40), ..Default::default() },
        FilterCriteria { location: Some("or".into()), ..Default::default() },
        FilterCriteria { interests: Some(vec!["yoga".into(), "MUS".into()]), ..Default::default() },
        FilterCriteria {
            active: Some(false),
            location: Some("a".into()),
            interests: Some(vec!["art".into()]),
            ..Default::default()
        },
    ];

    for criteria in &criteria_set {
        let filtered = filter_profiles(&profiles, criteria);
        assert!(is_subsequence(&filtered, &profiles), "order broken for {:?}", criteria);
    }
}

#[test]
fn test_filter_is_conjunction() {
    let profiles = population();
    let criteria = FilterCriteria {
        active: Some(true),
        min_age: Some(20),
        max_age: Some(35),
        location: Some("seattle".into()),
        ..Default::default()
    };

    for p in filter_profiles(&profiles, &criteria) {
        assert!(p.is_active);
        assert!(p.age >= 20 && p.age <= 35);
        assert!(p.location.to_lowercase().contains("seattle"));
    }
}

#[test]
fn test_interest_tokens_match_substrings() {
    let p = profile(1, 25, "", &["Rock Climbing"], true);
    assert!(matches_interests(&p, &["climb".to_string()]));
    assert!(!matches_interests(&p, &["swim".to_string()]));
}

#[test]
fn test_paginate_is_idempotent() {
    let items: Vec<usize> = (0..23).collect();
    for offset in [0, 5, 20, 23, 50] {
        for limit in [0, 1, 10, 100] {
            assert_eq!(paginate(&items, offset, limit), paginate(&items, offset, limit));
        }
    }
}

#[test]
fn test_offset_beyond_total_is_empty() {
    let items: Vec<usize> = (0..7).collect();
    for offset in 7..12 {
        for limit in [0, 1, 10] {
            let page = paginate(&items, offset, limit);
            assert!(page.items.is_empty());
            assert!(!page.has_more);
            assert_eq!(page.total, 7);
        }
    }
}

#[test]
fn test_pages_cover_sequence() {
    let items: Vec<usize> = (0..23).collect();
    let mut seen = Vec::new();
    let mut offset = 0;

    loop {
        let page = paginate(&items, offset, 5);
        seen.extend(page.items);
        if !page.has_more {
            break;
        }
        offset += 5;
    }

    assert_eq!(seen, items);
}

#[test]
fn test_score_is_in_range() {
    for larger in 1..12 {
        for shared in 0..=larger {
            let score = compatibility_score(shared, larger, 1);
            assert!(score <= 100);
        }
    }
}

#[test]
fn test_common_interests_exact() {
    let a = profile(1, 25, "", &["Travel", "Cooking", "Art"], true);
    let b = profile(2, 25, "", &["cooking", "Art", "Travel"], true);

    assert_eq!(common_interests(&a, &b), vec!["Travel", "Art"]);
}
