//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Inference (Hugging Face chat completions, plus an offline mock)
//! - In-process storage (LRU completion cache, latest-result slot)
//! - Surfaces (CLI controllers, axum HTTP server)

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
