//! Core types and traits for the Burrow URL shortener.
//!
//! This crate owns the short-code registry and the contract the HTTP
//! gateway talks to. Code allocation lives in `burrow_shortener`.

pub mod error;
pub mod record;
pub mod registry;
pub mod shortcode;
pub mod shortener;

pub use error::{CoreError, ShortenerError};
pub use record::{MappingRecord, UrlStats};
pub use registry::{memory::InMemoryRegistry, Registry};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
