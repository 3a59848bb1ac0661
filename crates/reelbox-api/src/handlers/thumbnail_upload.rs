use crate::auth::models::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use reelbox_core::models::Video;
use reelbox_core::AppError;
use reelbox_storage::paths::thumbnail_filename;
use std::sync::Arc;
use uuid::Uuid;

/// Fallback extension when the declared content type has no MIME-table entry.
const FALLBACK_EXTENSION: &str = "bin";

#[utoipa::path(
    post,
    path = "/api/videos/{video_id}/thumbnail",
    tag = "videos",
    params(
        ("video_id" = String, Path, description = "Video ID")
    ),
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Thumbnail stored and video updated", body = Video),
        (status = 400, description = "Invalid ID, malformed form, missing file field, or disallowed file type", body = ErrorResponse),
        (status = 401, description = "Missing/invalid token or requester does not own the video", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(user_id = %ctx.user_id, operation = "upload_thumbnail")
)]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    ctx: UserContext,
    Path(video_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<Video>, HttpAppError> {
    let video_id = Uuid::parse_str(&video_id)
        .map_err(|_| AppError::BadRequest("Invalid video ID".to_string()))?;

    let mut file_data: Option<Bytes> = None;
    let mut content_type: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return Err(AppError::BadRequest(format!(
                    "Unable to parse multipart form: {}",
                    e
                ))
                .into());
            }
        };
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == "thumbnail" {
            content_type = field.content_type().map(|s: &str| s.to_string());

            let data = field.bytes().await.map_err(|e| {
                AppError::BadRequest(format!("Unable to read form file: {}", e))
            })?;

            file_data = Some(data);
        }
    }

    let file_data = file_data
        .ok_or_else(|| AppError::BadRequest("Missing 'thumbnail' form file".to_string()))?;

    // No sniffing fallback: an absent declared content type is a hard failure.
    let content_type = content_type
        .filter(|ct| !ct.is_empty())
        .ok_or_else(|| AppError::Internal("Uploaded file has no readable content type".to_string()))?;

    let extension = mime_guess::get_mime_extensions_str(&content_type)
        .and_then(|exts| exts.first().copied())
        .unwrap_or(FALLBACK_EXTENSION);

    if extension == "pdf" {
        return Err(AppError::BadRequest(".pdf not supported in thumbnails".to_string()).into());
    }

    // Lookup failure and not-found deliberately collapse to the same 500;
    // callers of this endpoint cannot distinguish them.
    let mut video = state
        .videos
        .get_video(video_id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Couldn't find video {}", video_id)))?;

    if video.user_id != ctx.user_id {
        return Err(
            AppError::Unauthorized("Not authorized to update this video".to_string()).into(),
        );
    }

    let filename = thumbnail_filename(video.user_id, extension);
    let thumbnail_url = state
        .assets
        .save(&filename, file_data)
        .await
        .map_err(HttpAppError::from)?;

    video.thumbnail_url = Some(thumbnail_url);
    let updated = state.videos.update_video(&video).await?;

    Ok(Json(updated))
}
