pub mod thumbnail_upload;
pub mod video_create;
pub mod video_get;
