use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
    Form, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::meals::dto::MealForm;
use crate::meals::repo::Meal;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add_meal", post(add_meal))
        .route("/update_meal/:id", post(update_meal))
        .route("/delete_meal/:id", get(delete_meal))
}

#[instrument(skip(state, form))]
pub async fn add_meal(
    State(state): State<AppState>,
    Form(form): Form<MealForm>,
) -> Result<Redirect, AppError> {
    let new = form.validate().map_err(AppError::Validation)?;
    let meal = Meal::create(&state.db, &new).await?;
    tracing::debug!(id = %meal.id, name = %meal.name, "meal added");
    Ok(Redirect::to("/"))
}

#[instrument(skip(state, form))]
pub async fn update_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<MealForm>,
) -> Result<Redirect, AppError> {
    let new = form.validate().map_err(AppError::Validation)?;
    if !Meal::update(&state.db, id, &new).await? {
        tracing::debug!(%id, "update for unknown meal ignored");
    }
    Ok(Redirect::to("/"))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    if !Meal::delete(&state.db, id).await? {
        tracing::debug!(%id, "delete for unknown meal ignored");
    }
    Ok(Redirect::to("/"))
}
