use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
    routing::{get, post},
};
use nestor_core::{
    domain::{
        repositories::places::PlaceRepository,
        value_objects::places::{InsertPlaceModel, UpdatePlaceModel},
    },
    infra::db::{repositories::places::PlaceSqlite, sqlite::sqlite_connection::SqlitePoolSquad},
};
use serde::Serialize;
use tracing::warn;

use crate::{axum_http::error_responses::AppError, usecases::places::PlacesUseCase};

#[derive(Debug, Serialize)]
pub struct SavedPlaceResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletedPlaceResponse {
    pub success: bool,
    pub deleted: i64,
}

pub fn routes(db_pool: Arc<SqlitePoolSquad>, query_timeout: Duration) -> Router {
    let place_repository = PlaceSqlite::new(Arc::clone(&db_pool), query_timeout);
    let places_usecase = PlacesUseCase::new(Arc::new(place_repository));

    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", get(get_by_id).put(update).delete(delete_by_id))
        .with_state(Arc::new(places_usecase))
}

pub async fn create<T>(
    State(places_usecase): State<Arc<PlacesUseCase<T>>>,
    payload: Result<Json<InsertPlaceModel>, JsonRejection>,
) -> impl IntoResponse
where
    T: PlaceRepository + Send + Sync + 'static,
{
    let Json(insert_place_model) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_body(rejection).into_response(),
    };

    match places_usecase.create(insert_place_model).await {
        Ok(id) => Json(SavedPlaceResponse { success: true, id }).into_response(),
        Err(err) => AppError::from_places(err, "Failed to save place").into_response(),
    }
}

pub async fn list<T>(State(places_usecase): State<Arc<PlacesUseCase<T>>>) -> impl IntoResponse
where
    T: PlaceRepository + Send + Sync + 'static,
{
    match places_usecase.list().await {
        Ok(places) => Json(places).into_response(),
        Err(err) => AppError::from_places(err, "Database error").into_response(),
    }
}

pub async fn get_by_id<T>(
    State(places_usecase): State<Arc<PlacesUseCase<T>>>,
    id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse
where
    T: PlaceRepository + Send + Sync + 'static,
{
    // A non-numeric id cannot name a stored place.
    let Ok(Path(id)) = id else {
        return AppError::NotFound.into_response();
    };

    match places_usecase.get_by_id(id).await {
        Ok(place) => Json(place).into_response(),
        Err(err) => AppError::from_places(err, "Database error").into_response(),
    }
}

pub async fn update<T>(
    State(places_usecase): State<Arc<PlacesUseCase<T>>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdatePlaceModel>, JsonRejection>,
) -> impl IntoResponse
where
    T: PlaceRepository + Send + Sync + 'static,
{
    let Ok(Path(id)) = id else {
        return AppError::NotFound.into_response();
    };
    let Json(update_place_model) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_body(rejection).into_response(),
    };

    match places_usecase.update(id, update_place_model).await {
        Ok(id) => Json(SavedPlaceResponse { success: true, id }).into_response(),
        Err(err) => AppError::from_places(err, "Failed to update place").into_response(),
    }
}

pub async fn delete_by_id<T>(
    State(places_usecase): State<Arc<PlacesUseCase<T>>>,
    id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse
where
    T: PlaceRepository + Send + Sync + 'static,
{
    let Ok(Path(id)) = id else {
        return AppError::NotFound.into_response();
    };

    match places_usecase.delete_by_id(id).await {
        Ok(deleted) => Json(DeletedPlaceResponse {
            success: true,
            deleted,
        })
        .into_response(),
        Err(err) => AppError::from_places(err, "Failed to delete place").into_response(),
    }
}

fn bad_body(rejection: JsonRejection) -> AppError {
    warn!(error = %rejection.body_text(), "places: rejected request body");
    AppError::BadRequest(rejection.body_text())
}
