//! Client for the upstream VendorWize events API.
//!
//! The listing page only needs one endpoint, `GET /api/events/near`, wrapped
//! by [`api::EventsApi`].

pub mod api;

pub use api::{EventsApi, EventsApiError, NearbyQuery};
