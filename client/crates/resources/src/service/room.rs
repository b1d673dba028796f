//! Rooms: `/Rooms`

use platform::client::ApiClient;
use reqwest::Method;

use crate::error::{ResourceError, ResourceResult};
use crate::model::booking::StayDates;
use crate::model::datetime;
use crate::model::room::{Room, RoomDraft, RoomSearch};
use crate::service::send_ignoring_body;

#[derive(Debug, Clone)]
pub struct RoomService {
    client: ApiClient,
}

impl RoomService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ResourceResult<Vec<Room>> {
        Ok(self.client.get_json("/Rooms", "Failed to fetch rooms").await?)
    }

    /// The API answers 400 for ids it cannot resolve
    pub async fn get(&self, id: i64) -> ResourceResult<Room> {
        match self
            .client
            .get_json(&format!("/Rooms/{id}"), "Failed to fetch room")
            .await
        {
            Ok(room) => Ok(room),
            Err(platform::client::ApiClientError::Status { status: 400, .. }) => {
                Err(ResourceError::Api {
                    status: 400,
                    message: "Invalid room ID or room not found".to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn create(&self, hotel_id: i64, draft: &RoomDraft) -> ResourceResult<Room> {
        let room: Room = self
            .client
            .post_json(&format!("/Rooms/{hotel_id}"), draft, "Failed to create room")
            .await?;
        tracing::info!(room_id = room.room_id, hotel_id, "Room created");
        Ok(room)
    }

    /// Price is checked locally before the request is sent
    pub async fn update(&self, id: i64, draft: RoomDraft) -> ResourceResult<()> {
        draft.validate_price()?;
        let room = draft.into_room(id);
        tracing::debug!(room_id = id, price = room.price, "Sending room update");

        send_ignoring_body(
            &self.client,
            Method::PUT,
            &format!("/Rooms/{id}"),
            &room,
            "Failed to update room",
        )
        .await
    }

    pub async fn delete(&self, id: i64) -> ResourceResult<()> {
        Ok(self
            .client
            .delete(&format!("/Rooms/{id}"), "Failed to delete room")
            .await?)
    }

    pub async fn search(&self, search: &RoomSearch) -> ResourceResult<Vec<Room>> {
        Ok(self
            .client
            .get_json_query("/Rooms/Search", search, "Failed to search rooms")
            .await?)
    }

    /// Rooms of a hotel free for the whole stay
    pub async fn available(&self, hotel_id: i64, stay: StayDates) -> ResourceResult<Vec<Room>> {
        let query = [
            ("checkInDate", datetime::format(&stay.check_in)),
            ("checkOutDate", datetime::format(&stay.check_out)),
        ];
        Ok(self
            .client
            .get_json_query(
                &format!("/Rooms/AvailableRooms/{hotel_id}"),
                &query,
                "Failed to fetch available rooms",
            )
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> RoomService {
        RoomService::new(ApiClient::new(&server.uri(), None).unwrap())
    }

    fn draft(price: f64) -> RoomDraft {
        RoomDraft {
            hotel_id: 3,
            room_type: "Deluxe".into(),
            price,
            availability: true,
            features: Some("Sea view".into()),
        }
    }

    #[tokio::test]
    async fn test_update_sends_full_record() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/Rooms/8"))
            .and(body_json(json!({
                "roomID": 8,
                "hotelID": 3,
                "type": "Deluxe",
                "price": 4500.0,
                "availability": true,
                "features": "Sea view"
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        service(&server).update(8, draft(4500.0)).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_rejects_price_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let err = service(&server).update(8, draft(500.0)).await.unwrap_err();
        assert!(matches!(err, ResourceError::Validation(_)));
        assert_eq!(err.to_string(), "Price must be between 1000 and 1000000000");
    }

    #[tokio::test]
    async fn test_get_bad_request_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Rooms/99"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad id"))
            .mount(&server)
            .await;

        let err = service(&server).get(99).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid room ID or room not found");
    }

    #[tokio::test]
    async fn test_available_rooms_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Rooms/AvailableRooms/3"))
            .and(query_param("checkInDate", "2025-06-01T14:00:00.000Z"))
            .and(query_param("checkOutDate", "2025-06-03T11:00:00.000Z"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"roomID": 5, "hotelID": 3, "type": "Suite", "price": 9000, "availability": true}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let stay = StayDates::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 3, 11, 0, 0).unwrap(),
        )
        .unwrap();
        let rooms = service(&server).available(3, stay).await.unwrap();
        assert_eq!(rooms[0].room_type, "Suite");
    }
}
