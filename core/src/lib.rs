//! Async client for the heroes REST API.
//!
//! # Overview
//! `HeroService` exposes five operations (list, get, add, update, delete)
//! against a heroes collection URL. Each is a single HTTP round-trip whose
//! outcome is reported to a `MessageLog`; failures are never returned to the
//! caller but replaced by a fallback (`Vec::new()` or `None`).
//!
//! # Design
//! - `HeroClient` is the sans-I/O half: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`.
//! - `Transport` performs the round-trip; `ReqwestTransport` is the default.
//! - `with_fallback` applies the shared "log and substitute" failure policy.
//! - Collaborators are injected at construction; there is no global instance.
//!
//! ```no_run
//! use std::sync::Arc;
//! use hero_core::{HeroService, HeroServiceConfig, MessageService, ReqwestTransport};
//!
//! # async fn example() {
//! let messages = Arc::new(MessageService::new());
//! let service = HeroService::new(
//!     &HeroServiceConfig::from_env(),
//!     Arc::new(ReqwestTransport::new()),
//!     messages.clone(),
//! );
//! let heroes = service.get_heroes().await;
//! println!("{} heroes, log: {:?}", heroes.len(), messages.messages());
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod http;
pub mod messages;
pub mod service;
pub mod types;

pub use client::HeroClient;
pub use config::{HeroServiceConfig, DEFAULT_HEROES_URL};
pub use error::TransportFailure;
pub use fallback::with_fallback;
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use messages::{MessageLog, MessageService, TracingLog};
pub use service::HeroService;
pub use types::{Hero, HeroId};
