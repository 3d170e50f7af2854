use serde::Serialize;
use sqlx::SqliteConnection;
use sqlx::prelude::FromRow;

/// A food marked as favorite, with how many of it the user wants.
///
/// There is at most one row per `food_id`; adding the same food again bumps `qty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub food_id: i64,
    pub qty: i64,
}

/// A favorite joined with the display fields of its food.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct FavoriteItem {
    pub id: i64,
    pub qty: i64,
    pub name: String,
    pub image: String,
    pub price: i64,
}

impl Favorite {
    /// Favorites whose food no longer resolves are left out.
    #[tracing::instrument(skip_all)]
    pub async fn list_items(executor: &mut SqliteConnection) -> sqlx::Result<Vec<FavoriteItem>> {
        let items = sqlx::query_as::<_, FavoriteItem>(
            r#"
            SELECT f.id, f.qty, foods.name, foods.image, foods.price
            FROM favorites f
            JOIN foods ON f.food_id = foods.id
            ORDER BY f.id;
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(items)
    }

    /// Creates the favorite for `food_id` with a quantity of one, or increments the quantity of
    /// the existing one.
    ///
    /// `food_id` is not checked against `foods`.
    #[tracing::instrument(skip(executor))]
    pub async fn add_or_increment(
        executor: &mut SqliteConnection,
        food_id: i64,
    ) -> sqlx::Result<Favorite> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (food_id, qty)
            VALUES (?, 1)
            ON CONFLICT (food_id) DO UPDATE SET qty = qty + 1
            RETURNING id, food_id, qty;
            "#,
        )
        .bind(food_id)
        .fetch_one(executor)
        .await?;

        Ok(favorite)
    }

    /// Returns `None` when no favorite has this `id`.
    #[tracing::instrument(skip(executor))]
    pub async fn set_qty(
        executor: &mut SqliteConnection,
        id: i64,
        qty: i64,
    ) -> sqlx::Result<Option<Favorite>> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            UPDATE favorites SET qty = ?
            WHERE id = ?
            RETURNING id, food_id, qty;
            "#,
        )
        .bind(qty)
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(favorite)
    }

    /// Returns whether a row was actually removed.
    #[tracing::instrument(skip(executor))]
    pub async fn delete(executor: &mut SqliteConnection, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
