use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use camp_core::{CamperId, Entity};
use camp_infra::repository::campers;
use camp_roster::{CamperDetail, CamperSummary, NewCamper};

use crate::app::dto::{self, JsonObject};
use crate::app::errors::{self, RequestError};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_campers).post(create_camper))
        .route("/:id", get(get_camper).patch(update_camper))
}

pub async fn list_campers(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let listed = async {
        let mut tx = services.begin().await?;
        campers::list(&mut tx).await
    }
    .await;

    match listed {
        Ok(all) => {
            let items = all.iter().map(CamperSummary::from).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error(e),
    }
}

/// Surfaces the failing rule's message, unlike the other write paths.
pub async fn create_camper(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Response {
    let Some(obj) = dto::object_with(&body, &["name", "age"]) else {
        return errors::json_errors(StatusCode::BAD_REQUEST, errors::MISSING_CAMPER_FIELDS);
    };

    match insert_camper(&services, &obj).await {
        Ok(detail) => {
            tracing::info!(camper_id = %detail.id, "camper created");
            (StatusCode::CREATED, Json(detail)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "camper rejected");
            errors::json_errors(StatusCode::BAD_REQUEST, e.to_string())
        }
    }
}

async fn insert_camper(
    services: &AppServices,
    obj: &JsonObject,
) -> Result<CamperDetail, RequestError> {
    let name = dto::text_field(obj, "name")?;
    let age = dto::int_field(obj, "age")?;
    let draft = NewCamper::new(name, age)?;

    let mut tx = services.begin().await?;
    let camper = campers::insert(&mut tx, draft).await?;
    tx.commit().await?;

    Ok(CamperDetail::new(&camper, Vec::new()))
}

pub async fn get_camper(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<CamperId>() else {
        return errors::not_found("Camper");
    };

    let found = async {
        let mut tx = services.begin().await?;
        campers::find_detail(&mut tx, id).await
    }
    .await;

    match found {
        Ok(Some(detail)) => (StatusCode::OK, Json(detail)).into_response(),
        Ok(None) => errors::not_found("Camper"),
        Err(e) => {
            tracing::warn!(camper_id = %id, error = %e, "camper lookup failed");
            errors::json_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
    }
}

/// Requires `name` and `age`; only those two fields are ever written.
pub async fn update_camper(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    // Only integer ids route to a camper, whatever the body holds.
    let Ok(id) = id.parse::<CamperId>() else {
        return errors::not_found("Camper");
    };
    let Some(obj) = dto::object_with(&body, &["name", "age"]) else {
        return errors::validation_errors();
    };
    if dto::is_blank(obj.get("name")) {
        return errors::validation_errors();
    }

    match apply_update(&services, id, &obj).await {
        Ok(Some(detail)) => {
            tracing::info!(camper_id = %id, "camper updated");
            (StatusCode::ACCEPTED, Json(detail)).into_response()
        }
        Ok(None) => errors::not_found("Camper"),
        Err(e) => {
            tracing::warn!(camper_id = %id, error = %e, "camper update rejected");
            errors::validation_errors()
        }
    }
}

async fn apply_update(
    services: &AppServices,
    id: CamperId,
    obj: &JsonObject,
) -> Result<Option<CamperDetail>, RequestError> {
    let mut tx = services.begin().await?;
    let Some(mut camper) = campers::find(&mut tx, id).await? else {
        return Ok(None);
    };

    camper.set_name(dto::text_field(obj, "name")?)?;
    camper.set_age(dto::int_field(obj, "age")?)?;

    campers::update(&mut tx, &camper).await?;
    let detail = campers::find_detail(&mut tx, camper.id()).await?;
    tx.commit().await?;

    Ok(detail)
}
