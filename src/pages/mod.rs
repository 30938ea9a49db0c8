mod render;

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::meals::repo::Meal;
use crate::state::AppState;
use crate::stats::{daily::DailySummary, fasting};
use crate::workouts::repo::Workout;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/edit_workout/:id", get(edit_workout))
        .route("/edit_meal/:id", get(edit_meal))
}

#[instrument(skip(state))]
async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let workouts = Workout::list_all(&state.db).await?;
    let meals = Meal::list_all(&state.db).await?;

    let tz = state.config.display_timezone;
    let summary = DailySummary::for_today(&workouts, tz, Utc::now());
    let meals = fasting::annotate(meals);

    Ok(Html(render::index_page(&summary, &workouts, &meals, tz)))
}

#[instrument(skip(state))]
async fn edit_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match Workout::get(&state.db, id).await? {
        Some(workout) => Ok(Html(render::workout_edit_page(&workout)).into_response()),
        None => Ok(Redirect::to("/").into_response()),
    }
}

#[instrument(skip(state))]
async fn edit_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match Meal::get(&state.db, id).await? {
        Some(meal) => Ok(Html(render::meal_edit_page(&meal)).into_response()),
        None => Ok(Redirect::to("/").into_response()),
    }
}
