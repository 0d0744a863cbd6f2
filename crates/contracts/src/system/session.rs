use serde::{Deserialize, Serialize};

/// Bootstrap configuration shipped by the host page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub current_user: CurrentUser,
}

/// Identity and active namespace of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub userid: String,
    pub namespace: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetNamespaceRequest {
    pub namespace: String,
}
