//! Core types and traits for the snip URL shortener.
//!
//! This crate holds the link record, the validated short code, the
//! [`LinkStore`] contract implemented by the storage backends, and the
//! redirect target normalization shared by the HTTP layer.

pub mod error;
pub mod link;
pub mod redirect;
pub mod shortcode;
pub mod store;

pub use error::{CoreError, StorageError};
pub use link::Link;
pub use redirect::redirect_target;
pub use shortcode::ShortCode;
pub use store::LinkStore;
