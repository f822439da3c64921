//! # Domain Layer
//!
//! Request and record models plus the prompt template.
//! This layer is independent of HTTP, the inference provider and the runtime.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
