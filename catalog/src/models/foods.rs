use serde::Serialize;
use sqlx::prelude::FromRow;
use sqlx::{QueryBuilder, SqliteConnection};

pub(crate) const DEFAULT_FOODS: &[CreateFoodPayload<'static>] = &[
    CreateFoodPayload::new("Pizza", "img/pizza.png", 16000),
    CreateFoodPayload::new("Burger", "img/burger.png", 3500),
    CreateFoodPayload::new("Quzi", "img/quzi.png", 25000),
    CreateFoodPayload::new("Pasta", "img/pasta.png", 18000),
    CreateFoodPayload::new("Salad", "img/salad.png", 7000),
    CreateFoodPayload::new("Dolma", "img/dolma.png", 25000),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct CreateFoodPayload<'data> {
    pub name: &'data str,
    pub image: &'data str,
    pub price: i64,
}

impl<'data> CreateFoodPayload<'data> {
    pub const fn new(name: &'data str, image: &'data str, price: i64) -> Self {
        Self { name, image, price }
    }
}

impl Food {
    #[tracing::instrument(skip_all)]
    pub async fn all(executor: &mut SqliteConnection) -> sqlx::Result<Vec<Food>> {
        let foods = sqlx::query_as::<_, Food>("SELECT id, name, image, price FROM foods ORDER BY id")
            .fetch_all(executor)
            .await?;

        Ok(foods)
    }

    #[tracing::instrument(skip(executor))]
    pub async fn create(
        executor: &mut SqliteConnection,
        create_food_payload: CreateFoodPayload<'_>,
    ) -> sqlx::Result<Food> {
        let food = sqlx::query_as::<_, Food>(
            r#"
            INSERT INTO foods (name, image, price)
            VALUES (?, ?, ?)
            RETURNING id, name, image, price;
            "#,
        )
        .bind(create_food_payload.name)
        .bind(create_food_payload.image)
        .bind(create_food_payload.price)
        .fetch_one(executor)
        .await?;

        Ok(food)
    }

    /// Inserts every payload in a single statement, returning the number of rows written.
    pub async fn create_bulk(
        executor: &mut SqliteConnection,
        bulk_payload: &[CreateFoodPayload<'_>],
    ) -> sqlx::Result<u64> {
        if bulk_payload.is_empty() {
            return Ok(0);
        }

        let mut query_builder = QueryBuilder::new("INSERT INTO foods (name, image, price) ");

        query_builder.push_values(bulk_payload, |mut b, food| {
            b.push_bind(food.name)
                .push_bind(food.image)
                .push_bind(food.price);
        });

        let result = query_builder.build().execute(executor).await?;

        Ok(result.rows_affected())
    }

    pub async fn count(executor: &mut SqliteConnection) -> sqlx::Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM foods")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn pool() -> sqlx::SqlitePool {
        crate::connect("sqlite::memory:", 1).await.unwrap()
    }

    #[tokio::test]
    async fn create_returns_assigned_id() {
        let db = pool().await;
        let mut conn = db.acquire().await.unwrap();

        let soup = Food::create(&mut conn, CreateFoodPayload::new("Soup", "img/soup.png", 5000))
            .await
            .unwrap();

        assert!(soup.id > 0);
        assert_eq!(soup.name, "Soup");
        assert_eq!(soup.image, "img/soup.png");
        assert_eq!(soup.price, 5000);
        assert_eq!(Food::all(&mut conn).await.unwrap(), vec![soup]);
    }

    #[tokio::test]
    async fn bulk_insert_keeps_order() {
        let db = pool().await;
        let mut conn = db.acquire().await.unwrap();

        let inserted = Food::create_bulk(&mut conn, DEFAULT_FOODS).await.unwrap();
        assert_eq!(inserted, 6);
        assert_eq!(Food::count(&mut conn).await.unwrap(), 6);

        let foods = Food::all(&mut conn).await.unwrap();
        let burger = &foods[1];
        assert_eq!(burger.name, "Burger");
        assert_eq!(burger.image, "img/burger.png");
        assert_eq!(burger.price, 3500);
        assert!(foods.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn bulk_insert_of_nothing_is_a_noop() {
        let db = pool().await;
        let mut conn = db.acquire().await.unwrap();

        assert_eq!(Food::create_bulk(&mut conn, &[]).await.unwrap(), 0);
        assert_eq!(Food::count(&mut conn).await.unwrap(), 0);
    }
}
