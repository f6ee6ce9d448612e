use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ClientError;
use crate::models::user::AuthResponse;
use crate::session::Session;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: String,
}

impl ApiClient {
    /// Exchange credentials for a bearer token and profile. Persisting the
    /// returned session is up to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let url = self.endpoint("/api/auth/login")?;
        let response = self
            .http
            .post(url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let body: AuthResponse = Self::parse(response).await?;

        Ok(Session {
            token: body.token,
            user: body.user,
        })
    }

    /// Start registration; the backend emails a verification link. The email
    /// shape is checked locally before anything goes over the wire.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ClientError> {
        if !is_valid_email(email) {
            return Err(ClientError::InvalidEmail);
        }

        let url = self.endpoint("/api/auth/register")?;
        let response = self
            .http
            .post(url)
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .await?;
        let body: MessageResponse = Self::parse(response).await?;

        Ok(or_default(
            body.message,
            "Registration email sent! Check your inbox for the verification link.",
        ))
    }

    /// Complete registration with the token from the verification email.
    pub async fn verify_email(&self, token: &str) -> Result<String, ClientError> {
        let mut url = self.endpoint("/api/auth/verify-email")?;
        url.query_pairs_mut().append_pair("token", token);

        let response = self.http.get(url).send().await?;
        let body: MessageResponse = Self::parse(response).await?;

        Ok(or_default(body.message, "Email verified successfully!"))
    }
}

fn or_default(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

fn is_valid_email(email: &str) -> bool {
    let re = regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    );
    re.map(|re| re.is_match(email)).unwrap_or(false)
}
