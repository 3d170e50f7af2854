use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use catalog::{Favorite, FavoriteItem};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AppJson;
use crate::AppState;
use crate::error::AppError;

pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/{id}", patch(set_quantity).delete(delete_favorite))
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddFavoriteRequest {
    #[validate(required)]
    food_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetQuantityRequest {
    #[validate(required, range(min = 1))]
    qty: Option<i64>,
}

impl AddFavoriteRequest {
    fn validated(&self) -> Result<i64, AppError> {
        self.validate()?;
        self.food_id
            .ok_or_else(|| AppError::MalformedPayload("missing `food_id`".to_string()))
    }
}

impl SetQuantityRequest {
    fn validated(&self) -> Result<i64, AppError> {
        self.validate()?;
        self.qty
            .ok_or_else(|| AppError::MalformedPayload("missing `qty`".to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    success: bool,
}

#[tracing::instrument(skip_all)]
async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteItem>>, AppError> {
    let mut conn = state.db.acquire().await?;
    let items = Favorite::list_items(&mut conn).await?;

    Ok(Json(items))
}

#[tracing::instrument(skip(state))]
async fn add_favorite(
    State(state): State<AppState>,
    AppJson(request): AppJson<AddFavoriteRequest>,
) -> Result<Json<Favorite>, AppError> {
    let food_id = request.validated()?;

    let mut conn = state.db.acquire().await?;
    let favorite = Favorite::add_or_increment(&mut conn, food_id).await?;

    Ok(Json(favorite))
}

#[tracing::instrument(skip(state))]
async fn set_quantity(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<SetQuantityRequest>,
) -> Result<Json<Favorite>, AppError> {
    let qty = request.validated()?;

    let mut conn = state.db.acquire().await?;
    let favorite = Favorite::set_qty(&mut conn, id, qty)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Favorite {id}")))?;

    Ok(Json(favorite))
}

/// Succeeds whether or not the favorite existed.
#[tracing::instrument(skip(state))]
async fn delete_favorite(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut conn = state.db.acquire().await?;

    if !Favorite::delete(&mut conn, id).await? {
        tracing::debug!(id, "no favorite to delete");
    }

    Ok(Json(DeleteResponse { success: true }))
}
