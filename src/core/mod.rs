// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod pagination;
pub mod scoring;

pub use filters::{FilterCriteria, filter_profiles, matches_criteria, matches_mutual_age};
pub use matcher::{Matcher, MatchResult};
pub use pagination::{Page, paginate, DEFAULT_LIMIT};
pub use scoring::{common_interests, compatibility_score, score_candidate};
