pub mod api;
pub mod auth;
pub mod calls;
pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
