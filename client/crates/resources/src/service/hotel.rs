//! Hotels: `/Hotels`

use platform::client::ApiClient;
use reqwest::Method;

use crate::error::ResourceResult;
use crate::model::hotel::{Hotel, HotelDraft, HotelSearch};
use crate::service::send_ignoring_body;

#[derive(Debug, Clone)]
pub struct HotelService {
    client: ApiClient,
}

impl HotelService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ResourceResult<Vec<Hotel>> {
        Ok(self.client.get_json("/Hotels", "Failed to fetch hotels").await?)
    }

    pub async fn get(&self, id: i64) -> ResourceResult<Hotel> {
        Ok(self
            .client
            .get_json(&format!("/Hotels/{id}"), "Failed to fetch hotel")
            .await?)
    }

    pub async fn by_name(&self, name: &str) -> ResourceResult<Hotel> {
        Ok(self
            .client
            .get_json(
                &format!("/Hotels/ByName/{}", urlencoding::encode(name)),
                "Failed to fetch hotel",
            )
            .await?)
    }

    pub async fn create(&self, draft: &HotelDraft) -> ResourceResult<Hotel> {
        let hotel: Hotel = self
            .client
            .post_json("/Hotels", draft, "Failed to create hotel")
            .await?;
        tracing::info!(hotel_id = hotel.hotel_id, name = %hotel.name, "Hotel created");
        Ok(hotel)
    }

    pub async fn update(&self, id: i64, draft: &HotelDraft) -> ResourceResult<()> {
        send_ignoring_body(
            &self.client,
            Method::PUT,
            &format!("/Hotels/{id}"),
            draft,
            "Failed to update hotel",
        )
        .await
    }

    pub async fn delete(&self, id: i64) -> ResourceResult<()> {
        self.client
            .delete(&format!("/Hotels/{id}"), "Failed to delete hotel")
            .await?;
        tracing::info!(hotel_id = id, "Hotel deleted");
        Ok(())
    }

    pub async fn search(&self, search: &HotelSearch) -> ResourceResult<Vec<Hotel>> {
        Ok(self
            .client
            .get_json_query("/Hotels/Search", search, "Failed to search hotels")
            .await?)
    }

    /// Hotels with at least one available room
    pub async fn with_available_rooms(&self) -> ResourceResult<Vec<Hotel>> {
        Ok(self
            .client
            .get_json(
                "/Hotels/AvailableHotels",
                "Failed to fetch hotels with available rooms",
            )
            .await?)
    }
}
