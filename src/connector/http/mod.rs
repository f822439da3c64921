//! HTTP surface: JSON/form API endpoints and the server-rendered form page.

pub mod form;
pub mod handlers;
pub mod server;

pub use server::{routes, serve};
