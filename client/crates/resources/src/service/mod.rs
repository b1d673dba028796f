//! Resource services
//!
//! One service per API resource. Every call carries the bearer credential
//! when the shared [`ApiClient`] has a token source attached.

pub mod booking;
pub mod hotel;
pub mod review;
pub mod room;
pub mod user;

use platform::client::ApiClient;
use reqwest::Method;
use serde::Serialize;

use crate::error::ResourceResult;

pub use booking::BookingService;
pub use hotel::HotelService;
pub use review::ReviewService;
pub use room::RoomService;
pub use user::UserService;

/// Send a body and discard the response; update endpoints answer 204
pub(crate) async fn send_ignoring_body<B>(
    client: &ApiClient,
    method: Method,
    path: &str,
    body: &B,
    fallback: &str,
) -> ResourceResult<()>
where
    B: Serialize + ?Sized,
{
    client
        .send(client.request(method, path).json(body))
        .await?
        .error_for_status(fallback)?;
    Ok(())
}

/// All resource services over one client
#[derive(Debug, Clone)]
pub struct Resources {
    pub hotels: HotelService,
    pub rooms: RoomService,
    pub bookings: BookingService,
    pub reviews: ReviewService,
    pub users: UserService,
}

impl Resources {
    pub fn new(client: ApiClient) -> Self {
        Self {
            hotels: HotelService::new(client.clone()),
            rooms: RoomService::new(client.clone()),
            bookings: BookingService::new(client.clone()),
            reviews: ReviewService::new(client.clone()),
            users: UserService::new(client),
        }
    }
}
