//! Room model

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{ResourceError, ResourceResult};

/// Nightly price range the API accepts
pub const PRICE_RANGE: RangeInclusive<f64> = 1000.0..=1_000_000_000.0;

/// Room type sent when none is given
pub const DEFAULT_ROOM_TYPE: &str = "Standard";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "roomID")]
    pub room_id: i64,
    #[serde(rename = "hotelID")]
    pub hotel_id: i64,
    #[serde(rename = "type", default)]
    pub room_type: String,
    pub price: f64,
    #[serde(default)]
    pub availability: bool,
    #[serde(default)]
    pub features: Option<String>,
}

/// Room fields a client may set; body of `POST /Rooms/{hotelId}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomDraft {
    #[serde(rename = "hotelID")]
    pub hotel_id: i64,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: f64,
    pub availability: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
}

impl RoomDraft {
    pub fn validate_price(&self) -> ResourceResult<()> {
        if self.price.is_finite() && PRICE_RANGE.contains(&self.price) {
            Ok(())
        } else {
            Err(ResourceError::validation(format!(
                "Price must be between {} and {}",
                PRICE_RANGE.start(),
                PRICE_RANGE.end()
            )))
        }
    }

    /// Full room record as `PUT /Rooms/{id}` expects it: blank type
    /// becomes [`DEFAULT_ROOM_TYPE`], missing features become `""`
    pub fn into_room(self, room_id: i64) -> Room {
        let room_type = if self.room_type.trim().is_empty() {
            DEFAULT_ROOM_TYPE.to_string()
        } else {
            self.room_type
        };
        Room {
            room_id,
            hotel_id: self.hotel_id,
            room_type,
            price: self.price,
            availability: self.availability,
            features: Some(self.features.unwrap_or_default()),
        }
    }
}

/// Query of `GET /Rooms/Search`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
}
