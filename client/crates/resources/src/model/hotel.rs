//! Hotel model

use serde::{Deserialize, Serialize};

use crate::model::review::Review;
use crate::model::room::Room;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(rename = "hotelID")]
    pub hotel_id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Comma-separated list as stored by the API
    #[serde(default)]
    pub amenities: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "managerID", default)]
    pub manager_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub rooms: Vec<Room>,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub reviews: Vec<Review>,
}

impl Hotel {
    pub fn amenity_list(&self) -> Vec<&str> {
        split_amenities(self.amenities.as_deref().unwrap_or_default())
    }
}

pub(crate) fn split_amenities(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Body of `POST /Hotels` and `PUT /Hotels/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HotelDraft {
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
    #[serde(rename = "managerID", skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<i64>,
}

/// Query of `GET /Hotels/Search`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HotelSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
}
