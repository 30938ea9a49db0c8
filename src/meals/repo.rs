use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    /// Ordered free-text components, zero to five per meal.
    pub components: Vec<String>,
    pub calories: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeal {
    pub name: String,
    pub components: Vec<String>,
    pub calories: Option<i32>,
}

impl Meal {
    pub async fn create(db: &PgPool, new: &NewMeal) -> sqlx::Result<Meal> {
        sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (name, components, calories)
            VALUES ($1, $2, $3)
            RETURNING id, name, components, calories, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.components)
        .bind(new.calories)
        .fetch_one(db)
        .await
    }

    /// Full history, newest first.
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Meal>> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, name, components, calories, created_at
            FROM meals
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn get(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Meal>> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, name, components, calories, created_at
            FROM meals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn update(db: &PgPool, id: Uuid, new: &NewMeal) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE meals
            SET name = $2, components = $3, calories = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&new.name)
        .bind(&new.components)
        .bind(new.calories)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
