use serde::{Deserialize, Serialize};
use simple_dapp::{DetailsSnapshot, PageView};

#[derive(Debug, Deserialize)]
pub struct ChangeOwnerForm {
    #[serde(default)]
    pub new_owner: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub view: PageView,
    pub has_wallet: bool,
    pub has_contract: bool,
}

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    #[serde(flatten)]
    pub details: DetailsSnapshot,
}
