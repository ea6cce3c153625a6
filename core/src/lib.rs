//! Read-only client core for the blog posts API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The hooks in [`hooks`] drive those requests through
//! an injected [`Transport`] and expose the outcome as immutable
//! [`FetchState`] snapshots; [`components`] and [`pages`] turn snapshots
//! into HTML.
//!
//! # Design
//! - `BlogClient` is stateless; it holds only `base_url`.
//! - Each read is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `Resource` is the sans-IO keyed state machine; `Hook` wraps it with a
//!   transport and a `watch` channel for observers.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod components;
pub mod date;
pub mod error;
pub mod hooks;
pub mod http;
pub mod markdown;
pub mod pages;
pub mod routes;
pub mod state;
pub mod transport;
pub mod types;

pub use client::BlogClient;
pub use error::{FetchError, TransportError};
pub use hooks::{Endpoint, Hook, PostHook, PostItem, PostList, PostsHook};
pub use http::{HttpRequest, HttpResponse};
pub use routes::Route;
pub use state::{FetchState, Phase, Resource, Ticket};
pub use transport::Transport;
pub use types::Post;
