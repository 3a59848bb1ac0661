use async_trait::async_trait;
use chrono::Utc;
use reelbox_core::models::{NewVideo, Video};
use reelbox_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Video metadata store.
///
/// Handlers depend on this trait rather than a concrete backend so tests can
/// swap in an in-memory implementation.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Create a new video record owned by `user_id`.
    async fn create_video(&self, user_id: Uuid, params: NewVideo) -> Result<Video, AppError>;

    /// Fetch a video by id. `Ok(None)` when no row matches.
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    /// Persist the given record, bumping `updated_at`. Returns the stored row.
    async fn update_video(&self, video: &Video) -> Result<Video, AppError>;

    /// List all videos owned by `user_id`, newest first.
    async fn list_videos(&self, user_id: Uuid) -> Result<Vec<Video>, AppError>;

    /// Cheap connectivity check used by health endpoints.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Postgres-backed video store.
#[derive(Clone)]
pub struct PgVideoStore {
    pool: PgPool,
}

impl PgVideoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    #[tracing::instrument(skip(self, params), fields(db.table = "videos", db.operation = "insert"))]
    async fn create_video(&self, user_id: Uuid, params: NewVideo) -> Result<Video, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let video: Video = sqlx::query_as::<Postgres, Video>(
            r#"
            INSERT INTO videos (
                id, created_at, updated_at, title, description,
                user_id, thumbnail_url, video_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, NULL, NULL)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(now)
        .bind(now)
        .bind(&params.title)
        .bind(&params.description)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(video)
    }

    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<Postgres, Video>("SELECT * FROM videos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(video)
    }

    #[tracing::instrument(
        skip(self, video),
        fields(db.table = "videos", db.operation = "update", video_id = %video.id)
    )]
    async fn update_video(&self, video: &Video) -> Result<Video, AppError> {
        let now = Utc::now();

        let updated: Video = sqlx::query_as::<Postgres, Video>(
            r#"
            UPDATE videos
            SET updated_at = $2,
                title = $3,
                description = $4,
                thumbnail_url = $5,
                video_url = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(video.id)
        .bind(now)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn list_videos(&self, user_id: Uuid) -> Result<Vec<Video>, AppError> {
        let videos = sqlx::query_as::<Postgres, Video>(
            "SELECT * FROM videos WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
