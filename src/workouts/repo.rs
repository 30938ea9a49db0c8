use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
    pub created_at: DateTime<Utc>,
}

/// Validated insert/update payload; id and created_at stay server-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
}

impl Workout {
    pub async fn create(db: &PgPool, new: &NewWorkout) -> sqlx::Result<Workout> {
        sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (exercise_name, sets, reps)
            VALUES ($1, $2, $3)
            RETURNING id, exercise_name, sets, reps, created_at
            "#,
        )
        .bind(&new.exercise_name)
        .bind(new.sets)
        .bind(new.reps)
        .fetch_one(db)
        .await
    }

    /// Full history, newest first.
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Workout>> {
        sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, exercise_name, sets, reps, created_at
            FROM workouts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn get(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Workout>> {
        sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, exercise_name, sets, reps, created_at
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Returns false when no row matched the id.
    pub async fn update(db: &PgPool, id: Uuid, new: &NewWorkout) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE workouts
            SET exercise_name = $2, sets = $3, reps = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&new.exercise_name)
        .bind(new.sets)
        .bind(new.reps)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
