//! OpenAPI document definition.

use crate::error::ErrorResponse;
use reelbox_core::models::{NewVideo, Video};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::thumbnail_upload::upload_thumbnail,
        crate::handlers::video_create::create_video,
        crate::handlers::video_get::get_video,
        crate::handlers::video_get::list_videos,
    ),
    components(schemas(Video, NewVideo, ErrorResponse)),
    tags(
        (name = "videos", description = "Video metadata and thumbnail operations")
    )
)]
pub struct ApiDoc;
