//! # opensea-client
//!
//! Resilient, cache-first client for the OpenSea marketplace REST API.
//!
//! ## Overview
//!
//! Every request is fingerprinted and looked up in a pluggable response
//! cache before it touches the network. Live requests back off linearly on
//! HTTP 429, remember 404s for a day and cache everything else for an hour.
//! Calls honor a [`tokio_util::sync::CancellationToken`] at every suspension
//! point.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use opensea_client::types::ChainId;
//! use opensea_client::OpenSeaClientBuilder;
//!
//! #[tokio::main]
//! async fn main() -> opensea_client::Result<()> {
//!     let client = OpenSeaClientBuilder::new()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let stats = client
//!         .retrieve_collection_stats(ChainId::MAINNET, "doodles-official")
//!         .await?;
//!     println!("{:?}", stats.stats.and_then(|s| s.floor_price));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, request executor and resource accessors |
//! | [`cache`] | Response cache, backends and request fingerprinting |
//! | [`transport`] | HTTP transport abstraction |
//! | [`types`] | Marketplace resource types |
//! | [`error`] / [`error_code`] | Error type and classification |

pub mod cache;
pub mod client;
pub mod error_code;
pub mod transport;
pub mod types;

pub use client::{
    ApiRequest, ApiResponse, OpenSeaClient, OpenSeaClientBuilder, RateLimitPolicy, ResponseSource,
};
pub use error_code::ErrorKind;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
