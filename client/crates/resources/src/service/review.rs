//! Reviews: `/Review`

use platform::client::ApiClient;
use reqwest::Method;

use crate::error::ResourceResult;
use crate::model::review::{Review, ReviewDraft};
use crate::service::send_ignoring_body;

#[derive(Debug, Clone)]
pub struct ReviewService {
    client: ApiClient,
}

impl ReviewService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ResourceResult<Vec<Review>> {
        Ok(self.client.get_json("/Review", "Failed to fetch reviews").await?)
    }

    pub async fn by_hotel(&self, hotel_id: i64) -> ResourceResult<Vec<Review>> {
        Ok(self
            .client
            .get_json(
                &format!("/Review/Hotel/{hotel_id}"),
                "Failed to fetch hotel reviews",
            )
            .await?)
    }

    pub async fn get(&self, id: i64) -> ResourceResult<Review> {
        Ok(self
            .client
            .get_json(&format!("/Review/{id}"), "Failed to fetch review")
            .await?)
    }

    pub async fn create(&self, draft: &ReviewDraft) -> ResourceResult<Review> {
        draft.validate()?;
        Ok(self
            .client
            .post_json("/Review", draft, "Failed to create review")
            .await?)
    }

    pub async fn update(&self, id: i64, draft: &ReviewDraft) -> ResourceResult<()> {
        draft.validate()?;
        send_ignoring_body(
            &self.client,
            Method::PUT,
            &format!("/Review/{id}"),
            draft,
            "Failed to update review",
        )
        .await
    }

    pub async fn delete(&self, id: i64) -> ResourceResult<()> {
        Ok(self
            .client
            .delete(&format!("/Review/{id}"), "Failed to delete review")
            .await?)
    }
}
