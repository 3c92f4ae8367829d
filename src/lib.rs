//! Portfolio site backend library.
//!
//! Serves the contact form API, the contact listing and the resume
//! download, optionally alongside the static front-end.

pub mod config;
pub mod contacts;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resume;

pub use config::PortfolioConfig;
pub use contacts::{ContactStore, InMemoryContactStore};
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
