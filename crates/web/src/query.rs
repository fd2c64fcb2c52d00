//! Query parameters for the listing page.
//!
//! Values arrive as raw strings so that malformed input can be normalised to
//! defaults instead of rejecting the request.

use serde::Deserialize;
use vendorwize_core::event::LocationContext;

pub const DEFAULT_LATITUDE: f64 = 35.7796;
pub const DEFAULT_LONGITUDE: f64 = -78.6382;
pub const DEFAULT_RADIUS_MILES: f64 = 50.0;

/// `?lat=&lng=&radius=` on `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
}

impl ListingParams {
    /// Resolve the search location, substituting defaults for missing,
    /// unparseable, or non-finite values.
    ///
    /// When neither coordinate was usable, `default_label` names the default
    /// location in the page header.
    pub fn resolve(&self, default_label: &str) -> LocationContext {
        let lat = parse_number(self.lat.as_deref());
        let lng = parse_number(self.lng.as_deref());
        let radius = parse_number(self.radius.as_deref());

        let label = match (lat, lng) {
            (None, None) => Some(default_label.to_string()),
            _ => None,
        };

        LocationContext {
            latitude: lat.unwrap_or(DEFAULT_LATITUDE),
            longitude: lng.unwrap_or(DEFAULT_LONGITUDE),
            radius: radius.unwrap_or(DEFAULT_RADIUS_MILES),
            label,
        }
    }
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
