use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub appointments: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientStatusRequest {
    pub active: bool,
}
