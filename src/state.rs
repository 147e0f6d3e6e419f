use crate::stats::Thresholds;
use crate::store::Store;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub thresholds: Thresholds,
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, thresholds: Thresholds, store: Store) -> Self {
        Self {
            data_path,
            thresholds,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
