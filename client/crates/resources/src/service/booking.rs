//! Bookings: `/Bookings`

use platform::client::ApiClient;
use reqwest::Method;

use crate::error::ResourceResult;
use crate::model::booking::{Booking, StayDates};
use crate::service::send_ignoring_body;

#[derive(Debug, Clone)]
pub struct BookingService {
    client: ApiClient,
}

impl BookingService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ResourceResult<Vec<Booking>> {
        Ok(self
            .client
            .get_json("/Bookings", "Failed to fetch bookings")
            .await?)
    }

    pub async fn by_hotel(&self, hotel_id: i64) -> ResourceResult<Vec<Booking>> {
        Ok(self
            .client
            .get_json(
                &format!("/Bookings/Hotel/{hotel_id}"),
                "Failed to fetch bookings for hotel",
            )
            .await?)
    }

    pub async fn by_user(&self, user_id: &str) -> ResourceResult<Vec<Booking>> {
        Ok(self
            .client
            .get_json(
                &format!("/Bookings/User/{}", urlencoding::encode(user_id)),
                "Failed to fetch user bookings",
            )
            .await?)
    }

    pub async fn get(&self, id: i64) -> ResourceResult<Booking> {
        Ok(self
            .client
            .get_json(&format!("/Bookings/{id}"), "Failed to fetch booking")
            .await?)
    }

    pub async fn create(&self, room_id: i64, stay: StayDates) -> ResourceResult<Booking> {
        let booking: Booking = self
            .client
            .post_json(&format!("/Bookings/{room_id}"), &stay, "Failed to create booking")
            .await?;
        tracing::info!(booking_id = booking.booking_id, room_id, "Booking created");
        Ok(booking)
    }

    pub async fn update(&self, id: i64, stay: StayDates) -> ResourceResult<()> {
        send_ignoring_body(
            &self.client,
            Method::PUT,
            &format!("/Bookings/{id}"),
            &stay,
            "Failed to update booking",
        )
        .await
    }

    pub async fn cancel(&self, id: i64) -> ResourceResult<()> {
        self.client
            .delete(&format!("/Bookings/{id}"), "Failed to cancel booking")
            .await?;
        tracing::info!(booking_id = id, "Booking cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Token;

    impl platform::client::TokenSource for Token {
        fn bearer_token(&self) -> Option<String> {
            Some("h.p.s".to_string())
        }
    }

    fn service(server: &MockServer) -> BookingService {
        let client = ApiClient::new(&server.uri(), None)
            .unwrap()
            .with_token_source(std::sync::Arc::new(Token));
        BookingService::new(client)
    }

    #[tokio::test]
    async fn test_create_booking_with_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/Bookings/5"))
            .and(header("authorization", "Bearer h.p.s"))
            .and(body_json(json!({
                "checkInDate": "2025-06-01T14:00:00.000Z",
                "checkOutDate": "2025-06-02T11:00:00.000Z"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "bookingID": 40,
                "roomID": 5,
                "checkInDate": "2025-06-01T14:00:00",
                "checkOutDate": "2025-06-02T11:00:00",
                "status": "Confirmed"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let stay = StayDates::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 2, 11, 0, 0).unwrap(),
        )
        .unwrap();
        let booking = service(&server).create(5, stay).await.unwrap();
        assert_eq!(booking.booking_id, 40);
        assert_eq!(booking.status, "Confirmed");
    }

    #[tokio::test]
    async fn test_cancel_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/Bookings/40"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({"message": "Booking already started"})),
            )
            .mount(&server)
            .await;

        let err = service(&server).cancel(40).await.unwrap_err();
        assert_eq!(err.to_string(), "Booking already started");
        assert_eq!(err.status(), Some(409));
    }

    #[tokio::test]
    async fn test_by_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Bookings/User/17"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        assert!(service(&server).by_user("17").await.unwrap().is_empty());
    }
}
