//! Lume Users - profile directory and potential-match service for the Lume dating app
//!
//! The core is a set of pure functions over a snapshot of the profile
//! store: multi-predicate filtering, offset/limit pagination, and
//! mutual-eligibility matching ranked by shared-interest compatibility.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{FilterCriteria, Matcher, MatchResult, Page, filter_profiles, paginate};
pub use crate::error::DirectoryError;
pub use crate::models::{Profile, MatchPreferences, ScoredCandidate, ListProfilesQuery, CreateProfileRequest};
pub use crate::services::{DirectoryService, InMemoryProfileStore, ProfileStore};
