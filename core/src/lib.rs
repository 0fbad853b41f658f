//! Synchronous API client for the Pacemaker fitness-tracking service.
//!
//! # Overview
//! Wraps the service's REST endpoints (users, activities, locations, friends
//! and messages) behind typed method calls. Each call is a single blocking
//! request-response round trip with no retries.
//!
//! # Design
//! - `PacemakerClient` is stateless: it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - `Transport` is the only I/O seam; `UreqTransport` is the default.
//! - `PacemakerApi` glues the two together and returns `Result<_, ApiError>`.
//! - `LenientApi` logs failures and returns `None` instead, for callers that
//!   only want a best-effort answer.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod lenient;
pub mod sort;
pub mod transport;
pub mod types;

pub use api::PacemakerApi;
pub use client::PacemakerClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use lenient::LenientApi;
pub use sort::{sort_activities, ActivitySortKey};
pub use transport::{Transport, UreqTransport};
pub use types::{Activity, Location, User};
