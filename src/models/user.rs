use serde::{Deserialize, Serialize};

/// Profile blob the backend returns at login and the client persists next
/// to the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: String,
}

/// Response shape of `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}
