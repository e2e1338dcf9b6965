//! Text API client.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`:
//! the core request pipeline, the builder, and one file per group of endpoints.

mod analysis;
pub mod builder;
mod classify;
mod combined;
pub mod core;
pub mod rate_limits;
mod validation;
mod web;

pub use builder::TextApiClientBuilder;
pub use self::core::{TextApiClient, DEFAULT_HOST_AND_PATH};
pub use rate_limits::RateLimits;
