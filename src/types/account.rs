use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: Option<String>,
}

/// Hex account address as sent by upstream (checksum casing is preserved).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub user: Option<User>,
    pub profile_img_url: Option<String>,
    pub address: Option<Address>,
    pub config: Option<String>,
    pub discord_id: Option<String>,
}
