use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use catalog::{CreateFoodPayload, Food};
use serde::Deserialize;
use validator::Validate;

use super::AppJson;
use crate::AppState;
use crate::error::AppError;

pub fn food_routes() -> Router<AppState> {
    Router::new().route("/foods", get(list_foods).post(create_food))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFoodRequest {
    #[validate(required, length(min = 1))]
    name: Option<String>,
    #[validate(required, length(min = 1))]
    image: Option<String>,
    #[validate(required, range(min = 1))]
    price: Option<i64>,
}

impl CreateFoodRequest {
    fn validated(&self) -> Result<CreateFoodPayload<'_>, AppError> {
        self.validate()?;

        let (Some(name), Some(image), Some(price)) =
            (self.name.as_deref(), self.image.as_deref(), self.price)
        else {
            return Err(AppError::MalformedPayload("missing food fields".to_string()));
        };

        Ok(CreateFoodPayload::new(name, image, price))
    }
}

#[tracing::instrument(skip_all)]
async fn list_foods(State(state): State<AppState>) -> Result<Json<Vec<Food>>, AppError> {
    let mut conn = state.db.acquire().await?;
    let foods = Food::all(&mut conn).await?;

    Ok(Json(foods))
}

#[tracing::instrument(skip(state))]
async fn create_food(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateFoodRequest>,
) -> Result<Json<Food>, AppError> {
    let payload = request.validated()?;

    let mut conn = state.db.acquire().await?;
    let food = Food::create(&mut conn, payload).await?;
    tracing::info!(id = food.id, "food created");

    Ok(Json(food))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, image: Option<&str>, price: Option<i64>) -> CreateFoodRequest {
        CreateFoodRequest {
            name: name.map(ToOwned::to_owned),
            image: image.map(ToOwned::to_owned),
            price,
        }
    }

    #[test]
    fn complete_request_becomes_payload() {
        let request = request(Some("Soup"), Some("img/soup.png"), Some(5000));
        let payload = request.validated().unwrap();

        assert_eq!(payload.name, "Soup");
        assert_eq!(payload.image, "img/soup.png");
        assert_eq!(payload.price, 5000);
    }

    #[test]
    fn missing_fields_are_validation_errors() {
        let request = request(Some("Soup"), None, None);

        let err = request.validated().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Missing or invalid fields: image, price");
    }

    #[test]
    fn prices_must_be_positive() {
        for price in [0, -1, -5000] {
            let err = request(Some("Soup"), Some("img/soup.png"), Some(price))
                .validated()
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }

        assert!(request(Some("Soup"), Some("img/soup.png"), Some(1)).validated().is_ok());
    }
}
