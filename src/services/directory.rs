use std::sync::Arc;
use validator::Validate;

use crate::config::PaginationSettings;
use crate::core::{filter_profiles, paginate, FilterCriteria, MatchResult, Matcher, Page};
use crate::error::DirectoryError;
use crate::models::{CreateProfileRequest, Profile};
use crate::services::store::ProfileStore;

const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and age are required fields";

/// The directory's public operations: listing, lookup, registration and
/// matching, all over a snapshot of the profile store.
#[derive(Clone)]
pub struct DirectoryService {
    store: Arc<dyn ProfileStore>,
    matcher: Matcher,
    pagination: PaginationSettings,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn ProfileStore>, pagination: PaginationSettings) -> Self {
        Self {
            store,
            matcher: Matcher::new(),
            pagination,
        }
    }

    /// Filter the store and return one page of the result
    ///
    /// `limit` defaults to the configured page size. It is only clamped
    /// when a maximum is configured.
    pub fn list_profiles(
        &self,
        criteria: &FilterCriteria,
        offset: Option<usize>,
        limit: Option<usize>,
    ) -> Result<Page<Profile>, DirectoryError> {
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(self.pagination.default_limit);
        let limit = match self.pagination.max_limit {
            Some(max) => limit.min(max),
            None => limit,
        };

        let snapshot = self.store.list()?;
        let filtered = filter_profiles(&snapshot, criteria);

        tracing::debug!(
            "Filtered {} of {} profiles (criteria: {:?})",
            filtered.len(),
            snapshot.len(),
            criteria
        );

        Ok(paginate(&filtered, offset, limit).map(Profile::clone))
    }

    pub fn get_profile(&self, id: &str) -> Result<Profile, DirectoryError> {
        self.store
            .get(id)?
            .ok_or_else(|| DirectoryError::profile_not_found(id))
    }

    /// Validate the request, register the profile and append it to the store
    pub fn create_profile(&self, request: CreateProfileRequest) -> Result<Profile, DirectoryError> {
        if let Err(errors) = request.validate() {
            let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
            fields.sort();
            tracing::warn!("Rejected profile creation, invalid fields: {:?}", fields);
            return Err(DirectoryError::validation(REQUIRED_FIELDS_MESSAGE));
        }

        let (Some(name), Some(email), Some(age)) = (request.name, request.email, request.age) else {
            return Err(DirectoryError::validation(REQUIRED_FIELDS_MESSAGE));
        };

        let profile = Profile::register(
            name,
            email,
            age,
            request.bio.unwrap_or_default(),
            request.interests.unwrap_or_default(),
            request.location.unwrap_or_default(),
        );

        self.store.append(profile.clone())?;
        tracing::info!("Created profile {}", profile.id);

        Ok(profile)
    }

    /// Ranked potential matches for the profile `id`
    pub fn find_matches(&self, id: &str) -> Result<MatchResult, DirectoryError> {
        let snapshot = self.store.list()?;
        self.matcher.find_matches(id, &snapshot)
    }

    /// Number of stored profiles
    pub fn profile_count(&self) -> Result<usize, DirectoryError> {
        Ok(self.store.len()?)
    }
}
