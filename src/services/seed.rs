use chrono::{Duration, Utc};

use crate::models::{MatchPreferences, Profile};

/// Demo population loaded at startup when seeding is enabled
pub fn demo_profiles() -> Vec<Profile> {
    let now = Utc::now();

    vec![
        Profile {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            age: 28,
            bio: "Love traveling and exploring new cuisines. Looking for someone to share adventures with!".to_string(),
            interests: tags(&["Travel", "Cooking", "Photography", "Hiking"]),
            location: "San Francisco, CA".to_string(),
            profile_image: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d".to_string()),
            is_active: true,
            last_seen: now,
            match_preferences: MatchPreferences { min_age: 25, max_age: 35, max_distance: 50 },
        },
        Profile {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Jordan Smith".to_string(),
            email: "jordan.smith@example.com".to_string(),
            age: 26,
            bio: "Software engineer by day, rock climber by weekend. Always up for a good conversation!".to_string(),
            interests: tags(&["Technology", "Rock Climbing", "Coffee", "Books"]),
            location: "Seattle, WA".to_string(),
            profile_image: Some("https://images.unsplash.com/photo-1494790108755-2616c6b4d26a".to_string()),
            is_active: true,
            last_seen: now - Duration::minutes(30),
            match_preferences: MatchPreferences { min_age: 22, max_age: 30, max_distance: 25 },
        },
        Profile {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Casey Williams".to_string(),
            email: "casey.williams@example.com".to_string(),
            age: 30,
            bio: "Artist and yoga instructor. Seeking meaningful connections and mindful living.".to_string(),
            interests: tags(&["Art", "Yoga", "Meditation", "Music", "Nature"]),
            location: "Portland, OR".to_string(),
            profile_image: Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80".to_string()),
            is_active: false,
            last_seen: now - Duration::hours(2),
            match_preferences: MatchPreferences { min_age: 26, max_age: 38, max_distance: 75 },
        },
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profiles_have_unique_ids() {
        let profiles = demo_profiles();
        assert_eq!(profiles.len(), 3);
        assert_ne!(profiles[0].id, profiles[1].id);
        assert_ne!(profiles[1].id, profiles[2].id);
    }

    #[test]
    fn test_one_demo_profile_is_inactive() {
        let inactive = demo_profiles().iter().filter(|p| !p.is_active).count();
        assert_eq!(inactive, 1);
    }
}
