//! Resource models
//!
//! Field names follow the API's JSON (`hotelID`, `checkInDate`, ...).

pub mod booking;
pub mod datetime;
pub mod hotel;
pub mod review;
pub mod room;
pub mod user;

use serde::{Deserialize, Deserializer};

pub use booking::{Booking, StayDates};
pub use hotel::{Hotel, HotelDraft, HotelSearch};
pub use review::{Review, ReviewDraft};
pub use room::{Room, RoomDraft, RoomSearch};
pub use user::{ManagerAssignment, User, UserUpdate};

/// `null` collections read as empty
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
