use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use validator::{Validate, ValidationErrors};

use crate::app::AppState;
use crate::database::{get_connection, store};
use crate::error::{AppError, AppResult};
use crate::models::{AreaQuery, AreaQueryRequest, FieldError, SpotCollection};
use crate::ranking::{duplicate_collection, ranked_collection};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/spots/duplicates", get(duplicate_spots))
        .route("/spots/inArea", get(spots_in_area).post(spots_in_area))
}

async fn duplicate_spots(State(state): State<AppState>) -> AppResult<Json<SpotCollection>> {
    let conn = get_connection(&state.pool)?;
    let representatives = store::domain_groups(&conn)?;

    Ok(Json(duplicate_collection(representatives)))
}

async fn spots_in_area(
    State(state): State<AppState>,
    payload: Result<Json<AreaQueryRequest>, JsonRejection>,
) -> AppResult<Json<SpotCollection>> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let query = validate_area_query(&request)?;

    let conn = get_connection(&state.pool)?;
    let candidates = store::spots_in_area(&conn, &query)?;

    Ok(Json(ranked_collection(candidates)))
}

fn validate_area_query(request: &AreaQueryRequest) -> AppResult<AreaQuery> {
    request
        .validate()
        .map_err(|errors| AppError::InvalidFields(field_errors(&errors)))?;

    match (request.latitude, request.longitude, request.radius) {
        (Some(latitude), Some(longitude), Some(radius)) => Ok(AreaQuery {
            latitude,
            longitude,
            radius,
        }),
        _ => Err(AppError::BadRequest("Incomplete area query".to_string())),
    }
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldError {
                field: field.to_string(),
                tag: err.code.to_string(),
                value: err.params.get("value").cloned(),
            })
        })
        .collect();

    fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.tag.cmp(&b.tag)));
    fields
}
