use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Youngest age a derived preference window will ever admit
pub const MIN_PREFERRED_AGE: u32 = 18;

/// Years either side of a profile's own age in its derived preference window
pub const DEFAULT_AGE_SPAN: u32 = 10;

/// Distance stored on newly registered profiles (not enforced by matching)
pub const DEFAULT_MAX_DISTANCE: u32 = 50;

/// Directory record for a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "profileImage", default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "lastSeen")]
    pub last_seen: DateTime<Utc>,
    #[serde(rename = "matchPreferences")]
    pub match_preferences: MatchPreferences,
}

fn default_true() -> bool { true }

impl Profile {
    /// Register a new profile: assigns a fresh id, marks it active and
    /// derives its preference window from `age`.
    pub fn register(
        name: String,
        email: String,
        age: u32,
        bio: String,
        interests: Vec<String>,
        location: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            age,
            bio,
            interests,
            location,
            profile_image: None,
            is_active: true,
            last_seen: Utc::now(),
            match_preferences: MatchPreferences::derived_from_age(age),
        }
    }

    /// Whether `age` falls inside this profile's accepted band
    #[inline]
    pub fn accepts_age(&self, age: u32) -> bool {
        self.match_preferences.contains(age)
    }
}

/// Age band (and stored distance) a profile accepts in candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPreferences {
    #[serde(rename = "minAge")]
    pub min_age: u32,
    #[serde(rename = "maxAge")]
    pub max_age: u32,
    #[serde(rename = "maxDistance")]
    pub max_distance: u32,
}

impl MatchPreferences {
    /// `{max(18, age - 10), age + 10, 50}`
    pub fn derived_from_age(age: u32) -> Self {
        Self {
            min_age: age.saturating_sub(DEFAULT_AGE_SPAN).max(MIN_PREFERRED_AGE),
            max_age: age.saturating_add(DEFAULT_AGE_SPAN),
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Inclusive range check. An inverted band contains nothing.
    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min_age && age <= self.max_age
    }
}

/// A candidate that passed eligibility, with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "commonInterests")]
    pub common_interests: Vec<String>,
}
