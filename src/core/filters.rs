use crate::models::Profile;

/// Optional listing predicates. Supplied fields are ANDed together;
/// `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub active: Option<bool>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    /// Case-insensitive substring of the profile's location
    pub location: Option<String>,
    /// Tokens matched case-insensitively as substrings of any interest
    pub interests: Option<Vec<String>>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Filter a store snapshot, preserving its order
pub fn filter_profiles<'a>(profiles: &'a [Profile], criteria: &FilterCriteria) -> Vec<&'a Profile> {
    // Lowercase the needles once rather than per profile
    let location = normalized_location(criteria);
    let interests = normalized_interests(criteria);

    profiles
        .iter()
        .filter(|p| matches_normalized(p, criteria, location.as_deref(), interests.as_deref()))
        .collect()
}

/// Check a single profile against the whole criteria set
pub fn matches_criteria(profile: &Profile, criteria: &FilterCriteria) -> bool {
    let location = normalized_location(criteria);
    let interests = normalized_interests(criteria);
    matches_normalized(profile, criteria, location.as_deref(), interests.as_deref())
}

fn normalized_location(criteria: &FilterCriteria) -> Option<String> {
    criteria.location.as_deref().map(str::to_lowercase)
}

fn normalized_interests(criteria: &FilterCriteria) -> Option<Vec<String>> {
    criteria
        .interests
        .as_ref()
        .map(|tokens| tokens.iter().map(|t| t.trim().to_lowercase()).collect())
}

fn matches_normalized(
    profile: &Profile,
    criteria: &FilterCriteria,
    location: Option<&str>,
    interests: Option<&[String]>,
) -> bool {
    criteria.active.map_or(true, |active| profile.is_active == active)
        && matches_age_range(profile, criteria.min_age, criteria.max_age)
        && location.map_or(true, |needle| matches_location(profile, needle))
        && interests.map_or(true, |tokens| matches_interests(profile, tokens))
}

#[inline]
pub fn matches_age_range(profile: &Profile, min_age: Option<u32>, max_age: Option<u32>) -> bool {
    min_age.map_or(true, |min| profile.age >= min) && max_age.map_or(true, |max| profile.age <= max)
}

/// `needle` must already be lowercase
#[inline]
pub fn matches_location(profile: &Profile, needle: &str) -> bool {
    profile.location.to_lowercase().contains(needle)
}

/// True if any interest contains any token. Tokens must already be
/// trimmed and lowercase.
pub fn matches_interests(profile: &Profile, tokens: &[String]) -> bool {
    profile.interests.iter().any(|interest| {
        let interest = interest.to_lowercase();
        tokens.iter().any(|token| interest.contains(token.as_str()))
    })
}

/// Mutual age-window check used for match eligibility: each side's age
/// must fall inside the other side's preferred band.
#[inline]
pub fn matches_mutual_age(subject: &Profile, candidate: &Profile) -> bool {
    subject.accepts_age(candidate.age) && candidate.accepts_age(subject.age)
}
