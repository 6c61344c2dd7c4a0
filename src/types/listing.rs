use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub current_price: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub seaport_listings: Option<Vec<Listing>>,
}

impl ListingsResponse {
    pub fn listings(&self) -> &[Listing] {
        self.seaport_listings.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTokenContract {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub decimals: Option<i64>,
    pub eth_price: Option<String>,
    pub usd_price: Option<String>,
}
