//! Auth helpers for integration tests.

use chrono::Duration;
use reelbox_api::auth::JwtService;
use uuid::Uuid;

/// Test JWT secret (must match the config from setup_test_app).
pub const TEST_JWT_SECRET: &str = "test-secret-key-min-32-characters-long-for-testing";

pub fn jwt_service() -> JwtService {
    JwtService::new(TEST_JWT_SECRET, 24)
}

/// Authorization header value for the given user.
pub fn bearer(user_id: Uuid) -> String {
    let token = jwt_service()
        .issue_token(user_id)
        .expect("Failed to issue test token");
    format!("Bearer {}", token)
}

/// Authorization header value carrying an already-expired token.
pub fn expired_bearer(user_id: Uuid) -> String {
    let token = jwt_service()
        .issue_token_with_lifetime(user_id, Duration::hours(-2))
        .expect("Failed to issue expired test token");
    format!("Bearer {}", token)
}
