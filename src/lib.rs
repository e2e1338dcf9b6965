//! # textapi
//!
//! Client library for the Aylien Text API, a hosted text-analysis service.
//!
//! ## Overview
//!
//! Each remote capability (classification, concept and entity extraction,
//! sentiment, summarization, language detection, ...) is exposed as one async
//! method on [`TextApiClient`]. A call validates its parameters locally, sends a
//! single signed form POST, and decodes the JSON reply into a typed response.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use textapi::{Credentials, TextApiClient};
//! use textapi::types::SentimentParams;
//!
//! # async fn run() -> textapi::Result<()> {
//! let client = TextApiClient::new(Credentials::new("app-id", "app-key"), true)?;
//!
//! let sentiment = client
//!     .sentiment(&SentimentParams::text("John is a very good football player!"))
//!     .await?;
//! println!("{} ({})", sentiment.polarity, sentiment.polarity_confidence);
//!
//! let limits = client.rate_limits();
//! println!("{}/{} calls left", limits.remaining, limits.limit);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, rate-limit snapshot and endpoint methods |
//! | [`types`] | Request parameters and response shapes per endpoint |
//! | [`transport`] | Form encoding and the signed HTTP transport |
//! | [`credentials`] | Application id / key pair |
//! | [`error`] | Error type |

pub mod client;
pub mod credentials;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{RateLimits, TextApiClient, TextApiClientBuilder};
pub use credentials::Credentials;
pub use error::{Error, ErrorContext};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
