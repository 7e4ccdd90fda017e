use std::sync::Arc;

use crate::config::Config;
use crate::store::SubmissionStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SubmissionStore>,
}
