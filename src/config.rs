use std::env;
use std::path::PathBuf;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Runtime configuration for the client, read from the environment once at
/// startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the booking backend, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Where the signed-in session blob lives between runs.
    pub session_file: PathBuf,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url =
            env::var("HORIZON_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let session_file = env::var("HORIZON_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_file());

        Self {
            base_url,
            session_file,
        }
    }
}

fn default_session_file() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".horizon")
        .join("session.json")
}
