pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

pub use api::router;
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
