//! A single event card.

use std::fmt;

use super::html::{is_linkable_url, Escaped};
use super::RenderContext;
use crate::category;
use crate::event::Event;
use crate::formatting::{self, Deadline, DeadlineSeverity};
use crate::requirements;

/// Tags beyond this many are not shown.
pub const MAX_VISIBLE_TAGS: usize = 5;

/// Shown in place of a missing description.
pub const DESCRIPTION_FALLBACK: &str = "No description provided.";

/// Renders one event as a `.event-card` element.
pub struct EventCard<'a> {
    pub event: &'a Event,
    pub ctx: &'a RenderContext,
}

impl fmt::Display for EventCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = self.event;
        let category = event.category_key();

        writeln!(
            f,
            r#"<div class="event-card" data-category="{}">"#,
            Escaped(category.unwrap_or(""))
        )?;

        // Header: name, deadline, category.
        writeln!(f, r#"<div class="event-header">"#)?;
        writeln!(f, r#"<div class="event-name">{}</div>"#, Escaped(&event.name))?;
        writeln!(f, r#"<div class="event-badges">"#)?;
        let deadline = formatting::format_deadline(
            event.application_deadline.as_deref(),
            self.ctx.now,
            self.ctx.timezone,
        );
        if let Some(deadline) = deadline {
            write_deadline_badge(f, &deadline)?;
        }
        writeln!(
            f,
            r#"<span class="event-badge category-badge" style="background: {}">{}</span>"#,
            category::badge_color(category),
            Escaped(&category::badge_label(category)),
        )?;
        writeln!(f, "</div>\n</div>")?;

        // Meta line.
        writeln!(f, r#"<div class="event-meta">"#)?;
        write!(f, "<span>📍 ")?;
        if let Some(venue) = event.venue_name.as_deref().filter(|v| !v.is_empty()) {
            write!(f, "{}, ", Escaped(venue))?;
        }
        writeln!(f, "{}, {}</span>", Escaped(&event.city), Escaped(&event.state))?;
        writeln!(
            f,
            "<span>📅 {}</span>",
            Escaped(&formatting::format_date(&event.start_date, self.ctx.timezone))
        )?;
        if let Some(attendance) = event.expected_attendance {
            writeln!(
                f,
                "<span>👥 {} expected</span>",
                formatting::format_count(attendance)
            )?;
        }
        writeln!(f, "</div>")?;

        let mut badges = requirements::badges_for(event).peekable();
        if badges.peek().is_some() {
            writeln!(f, r#"<div class="event-requirements">"#)?;
            for badge in badges {
                writeln!(
                    f,
                    r#"<span class="req-badge req-{}" style="background: {}; color: {}">{} {}</span>"#,
                    badge.key, badge.background, badge.color, badge.icon, badge.label
                )?;
            }
            writeln!(f, "</div>")?;
        }

        if !event.tags.is_empty() {
            writeln!(f, r#"<div class="event-tags">"#)?;
            for tag in event.tags.iter().take(MAX_VISIBLE_TAGS) {
                writeln!(f, r##"<span class="event-tag">#{}</span>"##, Escaped(tag))?;
            }
            writeln!(f, "</div>")?;
        }

        writeln!(
            f,
            r#"<p class="event-desc">{}</p>"#,
            Escaped(
                event
                    .description
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or(DESCRIPTION_FALLBACK)
            )
        )?;

        // Footer: fee, spots, actions.
        let (fee_min, fee_max) = event.fee_bounds();
        writeln!(f, r#"<div class="event-footer">"#)?;
        writeln!(f, "<div>")?;
        writeln!(
            f,
            r#"<div class="event-fee">{}</div>"#,
            Escaped(&formatting::format_fee_range(fee_min, fee_max))
        )?;
        write!(f, r#"<div class="event-spots">"#)?;
        match event.vendor_spots {
            Some(spots) => write!(f, "{} vendor spots", formatting::format_count(spots))?,
            None => write!(f, "? vendor spots")?,
        }
        if let Some(organizer) = event.organizer_name.as_deref().filter(|o| !o.is_empty()) {
            write!(f, " · by {}", Escaped(organizer))?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")?;
        write_actions(f, event)?;
        writeln!(f, "</div>")?;

        writeln!(f, "</div>")
    }
}

fn write_deadline_badge(f: &mut fmt::Formatter<'_>, deadline: &Deadline) -> fmt::Result {
    let (background, color) = severity_colors(deadline.severity);
    writeln!(
        f,
        r#"<span class="event-badge deadline-badge deadline-{}" style="background: {background}; color: {color}">⏰ {}</span>"#,
        deadline.severity.as_str(),
        Escaped(&deadline.label),
    )
}

fn severity_colors(severity: DeadlineSeverity) -> (&'static str, &'static str) {
    match severity {
        DeadlineSeverity::Closed => ("#7f1d1d", "#fecaca"),
        DeadlineSeverity::Urgent => ("#78350f", "#fde68a"),
        DeadlineSeverity::Open => ("#14532d", "#bbf7d0"),
    }
}

fn write_actions(f: &mut fmt::Formatter<'_>, event: &Event) -> fmt::Result {
    let apply = event.application_url.as_deref().filter(|u| is_linkable_url(u));
    let info = event.website.as_deref().filter(|u| is_linkable_url(u));
    if apply.is_none() && info.is_none() {
        return Ok(());
    }

    writeln!(f, r#"<div class="event-actions">"#)?;
    if let Some(url) = apply {
        writeln!(
            f,
            r#"<a href="{}" class="event-link primary" target="_blank" rel="noopener noreferrer">Apply Now</a>"#,
            Escaped(url.trim())
        )?;
    }
    if let Some(url) = info {
        writeln!(
            f,
            r#"<a href="{}" class="event-link" target="_blank" rel="noopener noreferrer">Info</a>"#,
            Escaped(url.trim())
        )?;
    }
    writeln!(f, "</div>")
}
