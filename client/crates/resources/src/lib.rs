//! Booking API resource services
//!
//! Typed wrappers over the hotel, room, booking, review and user
//! endpoints. Availability, pricing and conflict rules live in the API;
//! the client only validates what it can check locally.

pub mod error;
pub mod model;
pub mod service;

pub use error::{ResourceError, ResourceResult};
pub use service::{
    BookingService, HotelService, Resources, ReviewService, RoomService, UserService,
};
