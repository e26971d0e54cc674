use crate::models::Profile;

/// Interests present in both profiles, in the subject's order.
///
/// Comparison is exact and case-sensitive on the stored tags, unlike the
/// listing filter's substring matching.
pub fn common_interests(subject: &Profile, candidate: &Profile) -> Vec<String> {
    subject
        .interests
        .iter()
        .filter(|interest| candidate.interests.contains(interest))
        .cloned()
        .collect()
}

/// Calculate a compatibility score (0-100)
///
/// score = round(100 * shared / max(|subject.interests|, |candidate.interests|))
///
/// Halves round up. Returns 0 when both interest lists are empty.
#[inline]
pub fn compatibility_score(shared: usize, subject_interests: usize, candidate_interests: usize) -> u8 {
    let larger = subject_interests.max(candidate_interests);
    if larger == 0 {
        return 0;
    }

    // Integer form of round-half-up, exact for every ratio
    let shared = shared.min(larger) as u64;
    let larger = larger as u64;
    ((200 * shared + larger) / (2 * larger)) as u8
}

/// Score a candidate against a subject, returning the score and the shared tags
pub fn score_candidate(subject: &Profile, candidate: &Profile) -> (u8, Vec<String>) {
    let shared = common_interests(subject, candidate);
    let score = compatibility_score(shared.len(), subject.interests.len(), candidate.interests.len());
    (score, shared)
}
