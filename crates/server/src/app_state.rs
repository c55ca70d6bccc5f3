use std::sync::Arc;

use server_api::PlateUpdater;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) updater: Arc<dyn PlateUpdater>,
}
