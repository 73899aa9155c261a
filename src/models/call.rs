use serde::{Deserialize, Serialize};

/// Body of `POST /create-call`
#[derive(Debug, Default, Deserialize)]
pub struct CreateCallRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// Body of `POST /join-call`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinCallRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub call_id: Option<String>,
}

/// Everything a client needs to attach to a hosted call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallCredentials {
    pub call_id: String,
    pub token: String,
    pub api_key: String,
    pub user_id: String,
}
