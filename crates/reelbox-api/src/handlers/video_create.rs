use crate::auth::models::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use reelbox_core::models::{NewVideo, Video};
use reelbox_core::AppError;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/videos",
    tag = "videos",
    request_body = NewVideo,
    responses(
        (status = 201, description = "Video record created", body = Video),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, params),
    fields(user_id = %ctx.user_id, operation = "create_video")
)]
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    ctx: UserContext,
    Json(params): Json<NewVideo>,
) -> Result<(StatusCode, Json<Video>), HttpAppError> {
    if params.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".to_string()).into());
    }

    let video = state.videos.create_video(ctx.user_id, params).await?;

    Ok((StatusCode::CREATED, Json(video)))
}
