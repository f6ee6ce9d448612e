use serde::{Deserialize, Serialize};

/// Catalog card shape returned by `GET /api/experiences`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_images: Vec<String>,
    pub location: String,
    pub price: f64,
}

/// Full package shape returned by `GET /api/experiences/{id}`.
///
/// `itinerary`, `inclusions` and `exclusions` are free-form text blocks the
/// backend sometimes leaves empty or omits entirely.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePackage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_images: Vec<String>,
    pub location: String,
    /// Per-person price in the platform currency.
    pub price: f64,
    /// Journey length in days.
    pub duration: u32,
    /// Remaining booking capacity.
    pub available_slots: u32,
    #[serde(default)]
    pub itinerary: String,
    #[serde(default)]
    pub inclusions: String,
    #[serde(default)]
    pub exclusions: String,
}
