use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
    Form, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;
use crate::workouts::dto::WorkoutForm;
use crate::workouts::repo::Workout;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add_workout", post(add_workout))
        .route("/update_workout/:id", post(update_workout))
        .route("/delete_workout/:id", get(delete_workout))
}

#[instrument(skip(state, form))]
pub async fn add_workout(
    State(state): State<AppState>,
    Form(form): Form<WorkoutForm>,
) -> Result<Redirect, AppError> {
    let new = form.validate().map_err(AppError::Validation)?;
    let workout = Workout::create(&state.db, &new).await?;
    tracing::debug!(id = %workout.id, exercise = %workout.exercise_name, "workout added");
    Ok(Redirect::to("/"))
}

#[instrument(skip(state, form))]
pub async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<WorkoutForm>,
) -> Result<Redirect, AppError> {
    let new = form.validate().map_err(AppError::Validation)?;
    // Unknown id is a no-op, not a 404.
    if !Workout::update(&state.db, id, &new).await? {
        tracing::debug!(%id, "update for unknown workout ignored");
    }
    Ok(Redirect::to("/"))
}

#[instrument(skip(state))]
pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    if !Workout::delete(&state.db, id).await? {
        tracing::debug!(%id, "delete for unknown workout ignored");
    }
    Ok(Redirect::to("/"))
}
