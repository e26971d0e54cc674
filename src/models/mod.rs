// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, MatchPreferences, ScoredCandidate};
pub use requests::{ListProfilesQuery, CreateProfileRequest};
pub use responses::{ApiResponse, ErrorResponse, ProfileListData, PaginationInfo, ProfileData, MatchesData, HealthResponse};
