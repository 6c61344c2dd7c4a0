use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub banner_image_url: Option<String>,
    pub chat_url: Option<String>,
    pub created_date: Option<String>,
    #[serde(default)]
    pub default_to_fiat: bool,
    pub description: Option<String>,
    pub dev_buyer_fee_basis_points: Option<String>,
    pub dev_seller_fee_basis_points: Option<String>,
    pub discord_url: Option<String>,
    /// Opaque; upstream does not fix its shape.
    #[serde(default)]
    pub display_data: serde_json::Value,
    pub external_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub featured_image_url: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(rename = "safelist_request_status")]
    pub safe_list_request_status: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_subject_to_whitelist: bool,
    pub large_image_url: Option<String>,
    pub medium_username: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub only_proxied_transfers: bool,
    pub opensea_buyer_fee_basis_points: Option<String>,
    pub opensea_seller_fee_basis_points: Option<String>,
    pub payout_address: Option<String>,
    #[serde(default)]
    pub require_email: bool,
    pub short_description: Option<String>,
    pub slug: Option<String>,
    pub telegram_url: Option<String>,
    pub twitter_username: Option<String>,
    pub instagram_username: Option<String>,
    pub wiki_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub one_day_volume: Option<f64>,
    pub one_day_change: Option<f64>,
    pub one_day_sales: Option<f64>,
    pub one_day_average_price: Option<f64>,
    pub seven_day_volume: Option<f64>,
    pub seven_day_change: Option<f64>,
    pub seven_day_sales: Option<f64>,
    pub seven_day_average_price: Option<f64>,
    pub thirty_day_volume: Option<f64>,
    pub thirty_day_change: Option<f64>,
    pub thirty_day_sales: Option<f64>,
    pub thirty_day_average_price: Option<f64>,
    pub total_volume: Option<f64>,
    pub total_sales: Option<f64>,
    pub total_supply: Option<f64>,
    pub count: Option<f64>,
    pub num_owners: Option<f64>,
    pub average_price: Option<f64>,
    pub num_reports: Option<f64>,
    pub market_cap: Option<f64>,
    pub floor_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionStatsResponse {
    pub stats: Option<CollectionStats>,
}
