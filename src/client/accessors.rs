//! Typed resource accessors.
//!
//! Each accessor validates its identifiers, builds a `GET` path and hands it
//! to the executor. Invalid input fails before any cache or network access.

use crate::client::core::OpenSeaClient;
use crate::client::request::ApiRequest;
use crate::types::{Asset, AssetContract, ChainId, CollectionStatsResponse, ListingsResponse, TokenId};
use crate::{Error, ErrorContext, Result};
use tracing::warn;

impl OpenSeaClient {
    /// Fetch a single asset by contract address and token id.
    ///
    /// ```rust,no_run
    /// # async fn run() -> opensea_client::Result<()> {
    /// use opensea_client::types::{ChainId, TokenId};
    /// use opensea_client::OpenSeaClient;
    ///
    /// let client = OpenSeaClient::new("my-key")?;
    /// let asset = client
    ///     .retrieve_asset(
    ///         ChainId::MAINNET,
    ///         "0x282bdd42f4eb70e7a9d9f40c8fea0825b7f68c5d",
    ///         &TokenId::from(9257u64),
    ///     )
    ///     .await?;
    /// println!("{:?}", asset.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn retrieve_asset(
        &self,
        chain: ChainId,
        asset_contract_address: &str,
        token_id: &TokenId,
    ) -> Result<Asset> {
        let contract = require_identifier(
            asset_contract_address,
            "asset_contract_address",
            "retrieve_asset",
        )?;
        let request = ApiRequest::get(format!("/asset/{}/{}", contract, token_id))
            .with_scope(chain_scope(chain));
        Ok(self.execute::<Asset>(&request).await?.into_data())
    }

    /// Fetch the current listings of an asset.
    pub async fn retrieve_asset_listings(
        &self,
        chain: ChainId,
        asset_contract_address: &str,
        token_id: i64,
    ) -> Result<ListingsResponse> {
        let contract = require_identifier(
            asset_contract_address,
            "asset_contract_address",
            "retrieve_asset_listings",
        )?;
        if token_id < 0 {
            return Err(Error::validation_with_context(
                "token id must be non-negative",
                ErrorContext::new()
                    .with_field_path("token_id")
                    .with_details(format!("got {}", token_id))
                    .with_source("retrieve_asset_listings"),
            ));
        }
        let request = ApiRequest::get(format!("/asset/{}/{}/listings", contract, token_id))
            .with_scope(chain_scope(chain));
        match self.execute::<ListingsResponse>(&request).await {
            Ok(resp) => Ok(resp.into_data()),
            Err(e) => {
                warn!(
                    error = %e,
                    contract,
                    token_id,
                    "failed to retrieve asset listings"
                );
                Err(e)
            }
        }
    }

    /// Fetch trading statistics of a collection.
    pub async fn retrieve_collection_stats(
        &self,
        chain: ChainId,
        collection_slug: &str,
    ) -> Result<CollectionStatsResponse> {
        let slug =
            require_identifier(collection_slug, "collection_slug", "retrieve_collection_stats")?;
        let request =
            ApiRequest::get(format!("/collection/{}/stats", slug)).with_scope(chain_scope(chain));
        Ok(self
            .execute::<CollectionStatsResponse>(&request)
            .await?
            .into_data())
    }

    /// Fetch contract-level metadata.
    pub async fn retrieve_asset_contract(
        &self,
        chain: ChainId,
        asset_contract_address: &str,
    ) -> Result<AssetContract> {
        let address = require_identifier(
            asset_contract_address,
            "asset_contract_address",
            "retrieve_asset_contract",
        )?;
        let request = ApiRequest::get(format!("/asset_contract/{}", address))
            .with_scope(chain_scope(chain));
        Ok(self.execute::<AssetContract>(&request).await?.into_data())
    }
}

/// The chain is not part of the upstream path; it only separates cache entries.
fn chain_scope(chain: ChainId) -> String {
    format!("chain:{}", chain)
}

/// Reject empty identifiers and anything that would escape its path segment.
fn require_identifier<'a>(value: &'a str, field: &str, source: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation_with_context(
            format!("{} is required", field.replace('_', " ")),
            ErrorContext::new()
                .with_field_path(field)
                .with_source(source),
        ));
    }
    if trimmed.contains(['/', '?', '#']) {
        return Err(Error::validation_with_context(
            format!("{} contains reserved characters", field.replace('_', " ")),
            ErrorContext::new()
                .with_field_path(field)
                .with_details(format!("got {:?}", value))
                .with_source(source),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_code::ErrorKind;

    #[test]
    fn test_require_identifier() {
        assert_eq!(
            require_identifier(" 0xabc ", "asset_contract_address", "t").unwrap(),
            "0xabc"
        );

        let err = require_identifier("", "asset_contract_address", "retrieve_asset").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidation);
        let ctx = err.context().unwrap();
        assert_eq!(ctx.field_path.as_deref(), Some("asset_contract_address"));
        assert_eq!(ctx.source.as_deref(), Some("retrieve_asset"));
        assert!(err.to_string().contains("asset contract address is required"));

        for bad in ["a/b", "slug?x=1", "x#y"] {
            assert!(require_identifier(bad, "collection_slug", "t").is_err());
        }
    }

    #[test]
    fn test_chain_scope() {
        assert_eq!(chain_scope(ChainId::MAINNET), "chain:1");
        assert_eq!(chain_scope(ChainId(137)), "chain:137");
    }
}
