use super::account::Account;
use super::collection::Collection;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// EVM chain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const MAINNET: ChainId = ChainId(1);
    pub const POLYGON: ChainId = ChainId(137);
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        ChainId(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative token id of arbitrary width (ERC-721/1155 ids are uint256).
///
/// Held in canonical decimal form: digits only, no sign, no leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::validation_with_context(
                "token id must be a non-negative decimal integer",
                ErrorContext::new()
                    .with_field_path("token_id")
                    .with_details(format!("got {:?}", s)),
            ));
        }
        let canonical = s.trim_start_matches('0');
        let canonical = if canonical.is_empty() { "0" } else { canonical };
        Ok(TokenId(canonical.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TokenId {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        TokenId::parse(s)
    }
}

impl From<u64> for TokenId {
    fn from(v: u64) -> Self {
        TokenId(v.to_string())
    }
}

impl From<u128> for TokenId {
    fn from(v: u128) -> Self {
        TokenId(v.to_string())
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        TokenId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: Option<i64>,
    pub token_id: Option<String>,
    pub num_sales: Option<i64>,
    pub background_color: Option<String>,
    pub image_url: Option<String>,
    pub image_preview_url: Option<String>,
    pub image_thumbnail_url: Option<String>,
    pub image_original_url: Option<String>,
    pub animation_url: Option<String>,
    pub animation_original_url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub asset_contract: Option<AssetContract>,
    pub owner: Option<Account>,
    pub permalink: Option<String>,
    pub collection: Option<Collection>,
    pub decimals: Option<i64>,
    pub token_metadata: Option<String>,
    /// Opaque; shape varies per collection.
    #[serde(default)]
    pub traits: serde_json::Value,
    pub last_sale: Option<LastSale>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetContract {
    pub address: Option<String>,
    pub asset_contract_type: Option<String>,
    pub created_date: Option<String>,
    pub name: Option<String>,
    pub nft_version: Option<String>,
    pub opensea_version: Option<String>,
    pub owner: Option<i64>,
    pub schema_name: Option<String>,
    pub symbol: Option<String>,
    pub total_supply: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub default_to_fiat: bool,
    pub dev_buyer_fee_basis_points: Option<i64>,
    pub dev_seller_fee_basis_points: Option<i64>,
    #[serde(default)]
    pub only_proxied_transfers: bool,
    pub opensea_buyer_fee_basis_points: Option<i64>,
    pub opensea_seller_fee_basis_points: Option<i64>,
    pub buyer_fee_basis_points: Option<i64>,
    pub seller_fee_basis_points: Option<i64>,
    pub payout_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastSale {
    pub total_price: Option<String>,
    pub payment_token: Option<PaymentToken>,
    pub quantity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentToken {
    pub id: Option<i64>,
    pub symbol: Option<String>,
    pub address: Option<String>,
    pub name: Option<String>,
    pub decimals: Option<i64>,
    pub eth_price: Option<String>,
    pub usd_price: Option<String>,
}
