use actix_web::{web, HttpResponse};

use crate::error::DirectoryError;
use crate::models::{
    ApiResponse, CreateProfileRequest, HealthResponse, ListProfilesQuery, MatchesData, PaginationInfo,
    ProfileData, ProfileListData,
};
use crate::services::DirectoryService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: DirectoryService,
}

/// Configure all profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_profiles))
            .route(web::post().to(create_profile)),
    )
    .route("/users/{id}", web::get().to(get_profile))
    .route("/users/{id}/matches", web::get().to(find_matches));
}

/// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "user-service".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List profiles
///
/// GET /api/users?active=true&minAge=25&maxAge=35&location=san&interests=travel,art&limit=10&offset=0
async fn list_profiles(
    state: web::Data<AppState>,
    query: web::Query<ListProfilesQuery>,
) -> Result<HttpResponse, DirectoryError> {
    let criteria = query.criteria()?;
    let page = state
        .directory
        .list_profiles(&criteria, query.offset()?, query.limit()?)?;

    let message = format!("Retrieved {} users", page.items.len());
    tracing::info!("{} (total {})", message, page.total);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        ProfileListData {
            pagination: PaginationInfo {
                total: page.total,
                limit: page.limit,
                offset: page.offset,
                has_more: page.has_more,
            },
            users: page.items,
        },
        message,
    )))
}

/// GET /api/users/{id}
async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, DirectoryError> {
    let user = state.directory.get_profile(&path)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        ProfileData { user },
        "User retrieved successfully",
    )))
}

/// Register a profile
///
/// POST /api/users
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "age": 28,
///   "bio": "string",
///   "interests": ["string"],
///   "location": "string"
/// }
/// ```
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> Result<HttpResponse, DirectoryError> {
    let user = state.directory.create_profile(req.into_inner())?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        ProfileData { user },
        "User created successfully",
    )))
}

/// GET /api/users/{id}/matches
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, DirectoryError> {
    let user_id = path.into_inner();
    let result = state.directory.find_matches(&user_id)?;

    let total_matches = result.matches.len();
    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        total_matches,
        user_id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        MatchesData {
            matches: result.matches,
            total_matches,
        },
        format!("Found {} potential matches", total_matches),
    )))
}
