use crate::error::DirectoryError;
use crate::models::{Profile, ScoredCandidate};
use crate::core::{
    filters::matches_mutual_age,
    scoring::score_candidate,
};

/// Result of the matching process
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    /// Active profiles other than the subject that were considered
    pub total_candidates: usize,
}

/// Match orchestrator - implements the eligibility and ranking pipeline
///
/// # Pipeline Stages
/// 1. Candidate selection (active, not the subject)
/// 2. Mutual age-window check
/// 3. Shared-interest check and scoring
/// 4. Ranking by descending score (stable)
///
/// The matcher is pure: it reads a snapshot and never mutates it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Find potential matches for `subject_id` within `pool`
    ///
    /// # Errors
    /// `DirectoryError::NotFound` if no profile in the pool has `subject_id`.
    pub fn find_matches(&self, subject_id: &str, pool: &[Profile]) -> Result<MatchResult, DirectoryError> {
        let subject = pool
            .iter()
            .find(|p| p.id == subject_id)
            .ok_or_else(|| DirectoryError::profile_not_found(subject_id))?;

        let mut total_candidates = 0;

        let mut matches: Vec<ScoredCandidate> = pool
            .iter()
            // Stage 1: candidate selection
            .filter(|candidate| candidate.id != subject.id && candidate.is_active)
            .inspect(|_| total_candidates += 1)
            // Stage 2: both sides accept each other's age
            .filter(|candidate| matches_mutual_age(subject, candidate))
            // Stage 3: at least one shared interest
            .filter_map(|candidate| {
                let (score, shared) = score_candidate(subject, candidate);
                if shared.is_empty() {
                    return None;
                }

                Some(ScoredCandidate {
                    profile: candidate.clone(),
                    compatibility_score: score,
                    common_interests: shared,
                })
            })
            .collect();

        // Stage 4: highest score first; sort_by is stable so ties keep pool order
        matches.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

        tracing::debug!(
            "Matched {} of {} candidates for {}",
            matches.len(),
            total_candidates,
            subject_id
        );

        Ok(MatchResult {
            matches,
            total_candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchPreferences;
    use chrono::Utc;

    fn create_candidate(
        id: &str,
        age: u32,
        min_age: u32,
        max_age: u32,
        interests: &[&str],
        is_active: bool,
    ) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("User {}", id),
            email: format!("{}@example.com", id),
            age,
            bio: String::new(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            location: String::new(),
            profile_image: None,
            is_active,
            last_seen: Utc::now(),
            match_preferences: MatchPreferences { min_age, max_age, max_distance: 50 },
        }
    }

    fn subject() -> Profile {
        create_candidate("subject", 28, 25, 35, &["Travel", "Cooking"], true)
    }

    #[test]
    fn test_find_matches_basic() {
        let pool = vec![
            subject(),
            create_candidate("1", 30, 20, 40, &["Travel", "Art"], true),
        ];

        let result = Matcher::new().find_matches("subject", &pool).unwrap();

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].profile.id, "1");
        assert_eq!(result.matches[0].compatibility_score, 50);
        assert_eq!(result.matches[0].common_interests, vec!["Travel"]);
    }

    #[test]
    fn test_age_outside_subject_window_excluded() {
        let pool = vec![
            subject(),
            create_candidate("old", 40, 20, 45, &["Travel", "Cooking"], true),
        ];

        let result = Matcher::new().find_matches("subject", &pool).unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 1);
    }

    #[test]
    fn test_requires_shared_interest() {
        let pool = vec![
            subject(),
            create_candidate("1", 30, 20, 40, &["Yoga"], true),
            create_candidate("2", 30, 20, 40, &[], true),
        ];

        let result = Matcher::new().find_matches("subject", &pool).unwrap();
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_excludes_self_and_inactive() {
        let pool = vec![
            subject(),
            create_candidate("inactive", 30, 20, 40, &["Travel", "Cooking"], false),
        ];

        let result = Matcher::new().find_matches("subject", &pool).unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_matches_sorted_by_score_with_stable_ties() {
        let pool = vec![
            create_candidate("a", 30, 20, 40, &["Travel", "Art", "Yoga"], true), // 33
            subject(),
            create_candidate("b", 30, 20, 40, &["Travel", "Cooking"], true),     // 100
            create_candidate("c", 30, 20, 40, &["Cooking", "Music", "Art"], true), // 33
        ];

        let result = Matcher::new().find_matches("subject", &pool).unwrap();
        let order: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();

        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(result.matches[0].compatibility_score, 100);
        assert_eq!(result.matches[1].compatibility_score, 33);
    }

    #[test]
    fn test_unknown_subject() {
        let pool = vec![subject()];
        let err = Matcher::new().find_matches("missing", &pool).unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound(_)));
    }

    #[test]
    fn test_inactive_subject_still_gets_matches() {
        let mut inactive_subject = subject();
        inactive_subject.is_active = false;
        let pool = vec![
            inactive_subject,
            create_candidate("1", 30, 20, 40, &["Travel"], true),
        ];

        let result = Matcher::new().find_matches("subject", &pool).unwrap();
        assert_eq!(result.matches.len(), 1);
    }
}
