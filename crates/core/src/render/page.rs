//! The events listing document.

use std::fmt;

use super::assets::{EVENTS_PAGE_CSS, FILTER_SCRIPT};
use super::card::EventCard;
use super::html::Escaped;
use super::RenderContext;
use crate::category::KNOWN_CATEGORIES;
use crate::event::{Event, LocationContext};

/// Placeholder shown instead of the card grid when there are no events.
pub const EMPTY_STATE: &str = "No events found in your area. Check back soon!";

/// Full HTML document listing `events` in the order given.
pub struct EventsPage<'a> {
    pub events: &'a [Event],
    pub location: &'a LocationContext,
    pub ctx: &'a RenderContext,
}

impl fmt::Display for EventsPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="UTF-8">"#)?;
        writeln!(
            f,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#
        )?;
        writeln!(f, "<title>VendorWize - Events Near You</title>")?;
        writeln!(f, "<style>{EVENTS_PAGE_CSS}</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, r#"<div class="container">"#)?;

        self.write_header(f)?;
        write_filters(f)?;

        writeln!(f, r#"<div class="events">"#)?;
        if self.events.is_empty() {
            writeln!(f, r#"<div class="empty">{EMPTY_STATE}</div>"#)?;
        } else {
            for event in self.events {
                write!(f, "{}", EventCard { event, ctx: self.ctx })?;
            }
        }
        writeln!(f, "</div>")?;

        writeln!(f, "</div>")?;
        writeln!(f, "<script>{FILTER_SCRIPT}</script>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

impl EventsPage<'_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.location;
        writeln!(f, "<header>")?;
        writeln!(f, "<h1>VendorWize</h1>")?;
        write!(f, r#"<p class="subtitle">Find vendor events near "#)?;
        match location.label.as_deref() {
            Some(label) => write!(f, "{}", Escaped(label))?,
            None => write!(f, "{:.4}, {:.4}", location.latitude, location.longitude)?,
        }
        writeln!(f, " ({} mile radius)</p>", location.radius)?;
        if !self.events.is_empty() {
            let noun = if self.events.len() == 1 { "event" } else { "events" };
            writeln!(
                f,
                r#"<p class="result-count">{} {noun} found</p>"#,
                self.events.len()
            )?;
        }
        writeln!(f, "</header>")
    }
}

fn write_filters(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, r#"<div class="filters">"#)?;
    writeln!(
        f,
        r#"<button class="filter-btn active" data-filter="all">All Events</button>"#
    )?;
    for category in KNOWN_CATEGORIES {
        writeln!(
            f,
            r#"<button class="filter-btn" data-filter="{}">{}</button>"#,
            category.key, category.filter_label
        )?;
    }
    writeln!(f, "</div>")
}
