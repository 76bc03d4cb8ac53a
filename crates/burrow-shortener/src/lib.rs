//! Short code allocation.
//!
//! [`ShortenerService`] draws candidates from a [`Generator`] and registers
//! the first free one. Core types are re-exported from `burrow_core`.
//!
//! [`Generator`]: burrow_generator::Generator

pub mod service;

pub use burrow_core::{Shortener, ShortenerError};
pub use service::{ShortenerService, MAX_ATTEMPTS};
