//! HTTP front end for the Burrow URL shortener.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod validation;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
