pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use error::GameError;
pub use models::session::{SessionState, Stage};
pub use services::session_service::SessionController;
