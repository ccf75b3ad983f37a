//! Client-side todo store backed by a REST collection resource.
//!
//! # Overview
//! `TodoStore` keeps an ordered, in-memory list of todo items and keeps it in
//! step with the backend: read it through getters, change it only through
//! actions that confirm with the backend before touching local state.
//!
//! # Design
//! - `TodoClient` is stateless. It builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - `Transport` executes requests. `ReqwestTransport` is the networked
//!   implementation; tests plug in scripted ones.
//! - Backend failures are never swallowed. Every action returns the
//!   `ApiError` it hit and leaves the collection unchanged.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::TodoStore;
pub use transport::{ReqwestTransport, Transport};
pub use types::{NewTodo, TodoItem};
