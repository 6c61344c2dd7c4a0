//! Marketplace client.
//!
//! Keep the public surface small: a builder, the client, the request
//! descriptor and the retry policy. Implementation details are split into
//! submodules under `src/client/`.

mod accessors;
pub mod builder;
pub mod core;
mod execution;
mod inflight;
pub mod policy;
pub mod request;

pub use builder::OpenSeaClientBuilder;
pub use self::core::{OpenSeaClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use policy::{RateLimitPolicy, DEFAULT_BACKOFF_STEP, DEFAULT_MAX_RETRIES};
pub use request::{ApiRequest, ApiResponse, ResponseSource};
