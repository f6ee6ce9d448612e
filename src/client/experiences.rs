use futures::future::try_join;
use log::debug;
use serde::Deserialize;

use super::ApiClient;
use crate::error::ClientError;
use crate::models::coupon::Coupon;
use crate::models::experience::{ExperiencePackage, ExperienceSummary};
use crate::session::Session;

#[derive(Debug, Deserialize)]
struct ExperiencesResponse {
    #[serde(default)]
    experiences: Vec<ExperienceSummary>,
}

#[derive(Debug, Deserialize)]
struct PackageResponse {
    package: ExperiencePackage,
}

impl ApiClient {
    /// Experience catalog for the landing grid.
    pub async fn list_experiences(&self) -> Result<Vec<ExperienceSummary>, ClientError> {
        let url = self.endpoint("/api/experiences")?;
        let response = self.http.get(url).send().await?;
        let body: ExperiencesResponse = Self::parse(response).await?;

        debug!("fetched {} experiences", body.experiences.len());
        Ok(body.experiences)
    }

    /// Full package for the detail view.
    pub async fn experience_detail(&self, id: &str) -> Result<ExperiencePackage, ClientError> {
        let url = self.endpoint(&format!("/api/experiences/{}", id))?;
        let response = self.http.get(url).send().await?;
        let body: PackageResponse = Self::parse(response).await?;
        Ok(body.package)
    }

    /// Everything the detail view needs: the package and its coupons,
    /// fetched concurrently. The two requests are independent; the first
    /// failure surfaces.
    pub async fn experience_with_coupons(
        &self,
        id: &str,
    ) -> Result<(ExperiencePackage, Vec<Coupon>), ClientError> {
        try_join(self.experience_detail(id), self.coupons_for(id)).await
    }

    pub async fn add_favourite(&self, session: &Session, id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("/api/experiences/{}/favourite", id))?;
        let response = self.authorized(self.http.post(url), session).send().await?;
        Self::expect_success(response).await
    }

    pub async fn remove_favourite(&self, session: &Session, id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("/api/experiences/{}/favourite", id))?;
        let response = self
            .authorized(self.http.delete(url), session)
            .send()
            .await?;
        Self::expect_success(response).await
    }
}
