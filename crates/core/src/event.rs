//! Event records as supplied by the upstream events API.
//!
//! Records are deserialized from camelCase JSON and never mutated afterwards.
//! The upstream payload is loosely typed in a few places (numeric ids,
//! coordinates sent as strings, `null` booleans), so the field deserializers
//! here normalise those shapes instead of failing the whole list.

use serde::{Deserialize, Deserializer};

/// A single vendor-event listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub tags: Vec<String>,

    // --- Location ---
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub longitude: Option<f64>,

    // --- Timing (raw ISO-8601 strings, parsed at format time) ---
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub application_deadline: Option<String>,

    // --- Commercial (fees in cents) ---
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub booth_fee_min: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub booth_fee_max: Option<i64>,
    /// Single-value fee still sent by older API deployments.
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub booth_fee: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub vendor_spots: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub expected_attendance: Option<i64>,

    // --- Organizer ---
    #[serde(default)]
    pub organizer_name: Option<String>,
    #[serde(default)]
    pub organizer_email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub application_url: Option<String>,
    #[serde(default)]
    pub application_method: Option<String>,

    // --- Requirement flags ---
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub handmade_only: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub requires_insurance: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub requires_tent: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub is_indoor: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub has_shelter: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub is_juried: bool,
}

impl Event {
    /// Fee bounds to display, falling back to the legacy single `boothFee`
    /// when neither bound is set.
    pub fn fee_bounds(&self) -> (Option<i64>, Option<i64>) {
        match (self.booth_fee_min, self.booth_fee_max) {
            (None, None) => (self.booth_fee, self.booth_fee),
            bounds => bounds,
        }
    }

    /// Category key, treating an empty string the same as a missing one.
    pub fn category_key(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Search coordinates the listing was requested for.
///
/// Only used for display text; not validated beyond being finite numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationContext {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in miles.
    pub radius: f64,
    /// Human-readable place name shown instead of raw coordinates.
    pub label: Option<String>,
}

mod de {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        })
    }

    /// Accepts a JSON number, a numeric string, or `null`. Anything that does
    /// not yield a finite number becomes `None`.
    pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        let parsed = match value {
            Some(serde_json::Value::Number(n)) => n.as_f64(),
            Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(parsed.filter(|v| v.is_finite()))
    }

    /// Accepts a JSON integer, a float (rounded to the nearest integer), a
    /// numeric string, or `null`. Anything else becomes `None`.
    pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::Number(n)) => {
                n.as_i64().or_else(|| n.as_f64().and_then(round_i64))
            }
            Some(serde_json::Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(round_i64))
            }
            _ => None,
        })
    }

    fn round_i64(v: f64) -> Option<i64> {
        let rounded = v.round();
        (rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64)
            .then_some(rounded as i64)
    }

    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
