pub mod app;
pub mod config;
pub mod editor;
pub mod errors;
pub mod handlers;
pub mod layout;
pub mod models;
pub mod mood;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use errors::{AppError, TrackerError};
pub use state::AppState;
pub use storage::{load_store, persist_store};
pub use store::Store;
