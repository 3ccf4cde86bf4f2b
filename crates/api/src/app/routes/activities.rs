use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};

use camp_core::ActivityId;
use camp_infra::StoreError;
use camp_infra::repository::activities;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_activities))
        .route("/:id", delete(delete_activity))
}

pub async fn list_activities(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let listed = async {
        let mut tx = services.begin().await?;
        activities::list_detailed(&mut tx).await
    }
    .await;

    match listed {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::store_error(e),
    }
}

/// 204 with an empty body; signups of the activity are removed with it.
pub async fn delete_activity(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<ActivityId>() else {
        return errors::not_found("Activity");
    };

    let deleted = async {
        let mut tx = services.begin().await?;
        let deleted = activities::delete(&mut tx, id).await?;
        tx.commit().await?;
        Ok::<_, StoreError>(deleted)
    }
    .await;

    match deleted {
        Ok(true) => {
            tracing::info!(activity_id = %id, "activity deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => errors::not_found("Activity"),
        Err(e) => errors::store_error(e),
    }
}
