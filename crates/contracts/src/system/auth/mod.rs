use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// Read-only snapshot of the auth and cart collaborators as the page shell
/// sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProjection {
    pub is_authenticated: bool,
    pub display_identity: Option<String>,
    pub cart_item_count: usize,
}
