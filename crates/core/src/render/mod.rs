//! HTML rendering for the events listing and the error page.
//!
//! Pages are built as [`std::fmt::Display`] implementations that write
//! straight into the output string; [`render_events_page`] and
//! [`render_error_page`] are the entry points used by the web layer.

pub mod assets;
pub mod card;
pub mod error_page;
pub mod html;
pub mod page;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::event::{Event, LocationContext};

pub use error_page::ErrorPage;
pub use page::EventsPage;

/// Per-request values that affect formatting but are not part of the data.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Reference instant for deadline countdowns.
    pub now: DateTime<Utc>,
    /// Zone dates are displayed in.
    pub timezone: Tz,
}

impl RenderContext {
    /// Context for the current instant.
    pub fn now(timezone: Tz) -> Self {
        Self {
            now: Utc::now(),
            timezone,
        }
    }
}

/// Render the full events listing document.
pub fn render_events_page(
    events: &[Event],
    location: &LocationContext,
    ctx: &RenderContext,
) -> String {
    EventsPage {
        events,
        location,
        ctx,
    }
    .to_string()
}

/// Render the error page around `message`.
pub fn render_error_page(message: &str) -> String {
    ErrorPage { message }.to_string()
}
