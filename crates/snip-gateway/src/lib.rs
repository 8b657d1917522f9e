//! HTTP gateway of the snip URL shortener.
//!
//! `POST /` creates a short link, `GET /{code}` redirects to its destination.
//! The store and the code generator are injected through [`AppState`].

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod shutdown;
pub mod state;

pub use app::App;
pub use error::{AppError, Result};
pub use state::AppState;
