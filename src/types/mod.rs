//! Marketplace payload types.
//!
//! Strongly-typed views of the JSON documents returned by the upstream API.
//! Upstream routinely sends `null` or omits fields, so almost everything is
//! an `Option`. Fields whose shape upstream does not guarantee (asset
//! traits, collection display data) are kept as raw [`serde_json::Value`]
//! for the caller to re-parse.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`account`] | Users and accounts |
//! | [`asset`] | Assets, asset contracts, last sale, payment tokens, token ids |
//! | [`collection`] | Collections and collection statistics |
//! | [`listing`] | Seaport listings |

pub mod account;
pub mod asset;
pub mod collection;
pub mod listing;

pub use account::{Account, Address, User};
pub use asset::{Asset, AssetContract, ChainId, LastSale, PaymentToken, TokenId};
pub use collection::{Collection, CollectionStats, CollectionStatsResponse};
pub use listing::{Listing, ListingsResponse, PaymentTokenContract};
