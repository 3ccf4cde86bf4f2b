use axum::Router;

pub mod activities;
pub mod campers;
pub mod signups;
pub mod system;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/campers", campers::router())
        .nest("/activities", activities::router())
        .nest("/signups", signups::router())
}
