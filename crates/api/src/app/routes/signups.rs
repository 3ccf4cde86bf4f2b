use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use camp_core::{ActivityId, CamperId, DomainError, Entity};
use camp_infra::repository::signups;
use camp_roster::{NewSignup, SignupDetail};

use crate::app::dto::{self, JsonObject};
use crate::app::errors::{self, RequestError};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(create_signup))
}

/// Every failure, including an unknown camper or activity, collapses to the
/// generic validation payload.
pub async fn create_signup(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Response {
    let Some(obj) = dto::object_with(&body, &["camper_id", "activity_id", "time"]) else {
        return errors::validation_errors();
    };

    match insert_signup(&services, &obj).await {
        Ok(detail) => {
            tracing::info!(
                signup_id = %detail.id,
                camper_id = %detail.camper_id,
                activity_id = %detail.activity_id,
                "signup created"
            );
            (StatusCode::CREATED, Json(detail)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "signup rejected");
            errors::validation_errors()
        }
    }
}

async fn insert_signup(
    services: &AppServices,
    obj: &JsonObject,
) -> Result<SignupDetail, RequestError> {
    let time = dto::int_field(obj, "time")?;
    let camper_id = CamperId::new(dto::int_field(obj, "camper_id")?);
    let activity_id = ActivityId::new(dto::int_field(obj, "activity_id")?);
    let draft = NewSignup::new(camper_id, activity_id, time)?;

    let mut tx = services.begin().await?;
    let signup = signups::insert(&mut tx, draft).await?;
    let detail = signups::find_detail(&mut tx, signup.id())
        .await?
        .ok_or(DomainError::not_found())?;
    tx.commit().await?;

    Ok(detail)
}
