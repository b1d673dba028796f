//! Booking model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ResourceError, ResourceResult};
use crate::model::datetime;
use crate::model::room::Room;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "bookingID")]
    pub booking_id: i64,
    #[serde(rename = "userID", default)]
    pub user_id: Option<i64>,
    #[serde(rename = "roomID", default)]
    pub room_id: Option<i64>,
    #[serde(rename = "checkInDate", with = "datetime")]
    pub check_in: DateTime<Utc>,
    #[serde(rename = "checkOutDate", with = "datetime")]
    pub check_out: DateTime<Utc>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub room: Option<Room>,
}

impl Booking {
    /// Stay already over at `now`
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.check_out < now
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.eq_ignore_ascii_case("cancelled")
    }

    pub fn hotel_id(&self) -> Option<i64> {
        self.room.as_ref().map(|room| room.hotel_id)
    }
}

/// Stay dates; body of `POST /Bookings/{roomId}` and `PUT /Bookings/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StayDates {
    #[serde(rename = "checkInDate", serialize_with = "datetime::serialize")]
    pub check_in: DateTime<Utc>,
    #[serde(rename = "checkOutDate", serialize_with = "datetime::serialize")]
    pub check_out: DateTime<Utc>,
}

impl StayDates {
    /// Check-out must fall strictly after check-in
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> ResourceResult<Self> {
        if check_in >= check_out {
            return Err(ResourceError::validation(
                "Check-out date must be after check-in date",
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Split bookings into upcoming and past at `now`
pub fn partition_by_stay(bookings: Vec<Booking>, now: DateTime<Utc>) -> (Vec<Booking>, Vec<Booking>) {
    bookings.into_iter().partition(|b| !b.is_past(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_booking_from_api_json() {
        let booking: Booking = serde_json::from_str(
            r#"{"bookingID":11,"userID":4,"roomID":2,"checkInDate":"2025-06-01T12:00:00",
                "checkOutDate":"2025-06-03T12:00:00Z","status":"Confirmed",
                "room":{"roomID":2,"hotelID":5,"type":"Deluxe","price":4000,"availability":false}}"#,
        )
        .unwrap();
        assert_eq!(booking.check_in, day(1));
        assert_eq!(booking.check_out, day(3));
        assert_eq!(booking.hotel_id(), Some(5));
        assert!(!booking.is_cancelled());
        assert!(booking.is_past(day(4)));
        assert!(!booking.is_past(day(2)));
    }

    #[test]
    fn test_stay_dates_order() {
        assert!(StayDates::new(day(1), day(1)).is_err());
        assert!(StayDates::new(day(3), day(1)).is_err());
        let stay = StayDates::new(day(1), day(4)).unwrap();
        assert_eq!(stay.nights(), 3);
        assert_eq!(
            serde_json::to_value(stay).unwrap(),
            serde_json::json!({
                "checkInDate": "2025-06-01T12:00:00.000Z",
                "checkOutDate": "2025-06-04T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_partition_by_stay() {
        let make = |id, out| Booking {
            booking_id: id,
            user_id: None,
            room_id: None,
            check_in: day(1),
            check_out: day(out),
            status: "Confirmed".into(),
            room: None,
        };
        let (upcoming, past) = partition_by_stay(vec![make(1, 2), make(2, 9)], day(5));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].booking_id, 2);
        assert_eq!(past[0].booking_id, 1);
    }
}
