pub mod daily;
pub mod fasting;
pub mod matrix;

use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::workouts::repo::Workout;

pub fn router() -> Router<AppState> {
    Router::new().route("/stats/grouped_by_date", get(grouped_by_date))
}

#[instrument(skip(state))]
async fn grouped_by_date(
    State(state): State<AppState>,
) -> Result<Json<matrix::ChartData>, AppError> {
    let workouts = Workout::list_all(&state.db).await?;
    let bucket_tz = state
        .config
        .chart_dates_in_local
        .then_some(state.config.display_timezone);
    Ok(Json(matrix::grouped_by_date(&workouts, bucket_tz)))
}
