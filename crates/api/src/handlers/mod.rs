pub mod auth;
pub mod health;
pub mod media;
pub mod users;

pub use auth::{AppState, admin_login, login, logout};
pub use health::{healthz_handler, livez_handler};
