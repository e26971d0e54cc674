use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::core::FilterCriteria;
use crate::error::DirectoryError;

/// Raw query string for the profile listing endpoint
///
/// Every field arrives as text and is parsed explicitly, so a malformed
/// number is rejected instead of silently turning into "no filter".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProfilesQuery {
    pub active: Option<String>,
    #[serde(rename = "minAge")]
    pub min_age: Option<String>,
    #[serde(rename = "maxAge")]
    pub max_age: Option<String>,
    pub location: Option<String>,
    pub interests: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListProfilesQuery {
    /// Build filter criteria from the query parameters
    pub fn criteria(&self) -> Result<FilterCriteria, DirectoryError> {
        let active = match present(&self.active) {
            None => None,
            Some(raw) if raw.eq_ignore_ascii_case("true") => Some(true),
            Some(raw) if raw.eq_ignore_ascii_case("false") => Some(false),
            Some(raw) => {
                return Err(DirectoryError::validation(format!(
                    "active must be true or false, got {:?}",
                    raw
                )))
            }
        };

        // Blank tokens are kept: an empty token matches any non-empty interest
        let interests = non_empty(&self.interests).map(|raw| {
            raw.split(',').map(|token| token.trim().to_string()).collect::<Vec<_>>()
        });

        Ok(FilterCriteria {
            active,
            min_age: parse_number("minAge", &self.min_age)?,
            max_age: parse_number("maxAge", &self.max_age)?,
            location: non_empty(&self.location).map(str::to_string),
            interests,
        })
    }

    pub fn offset(&self) -> Result<Option<usize>, DirectoryError> {
        parse_number("offset", &self.offset)
    }

    pub fn limit(&self) -> Result<Option<usize>, DirectoryError> {
        parse_number("limit", &self.limit)
    }
}

/// Text filters are used verbatim; only `?location=` counts as absent
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Empty parameters (`?minAge=`) count as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(
    field: &str,
    value: &Option<String>,
) -> Result<Option<T>, DirectoryError> {
    match present(value) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            DirectoryError::validation(format!(
                "{} must be a non-negative integer, got {:?}",
                field, raw
            ))
        }),
    }
}

/// Request body for registering a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, range(min = 1))]
    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: Option<u32>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Accepts `25` or `"25"`; anything else is a deserialization error
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AgeInput {
        Number(u32),
        Text(String),
    }

    match Option::<AgeInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(AgeInput::Number(age)) => Ok(Some(age)),
        Some(AgeInput::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<u32>().map(Some).map_err(|_| {
                de::Error::custom(format!("age must be a non-negative integer, got {:?}", raw))
            })
        }
    }
}
