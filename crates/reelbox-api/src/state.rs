//! Application state.
//!
//! AppState aggregates the store handles and configuration handlers need;
//! it is built once at startup and shared behind an `Arc`.

use reelbox_core::Config;
use reelbox_db::VideoStore;
use reelbox_storage::AssetStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub videos: Arc<dyn VideoStore>,
    pub assets: AssetStore,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
