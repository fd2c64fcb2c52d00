//! Event categories: badge colours and filter-bar labels.

/// Badge colour for missing or unrecognised categories.
pub const FALLBACK_COLOR: &str = "#64748b";

/// Badge text for events without a category.
pub const FALLBACK_LABEL: &str = "event";

/// A category the listing page knows how to style and filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Key as sent by the upstream API (`farmers_market`).
    pub key: &'static str,
    /// Badge background colour.
    pub color: &'static str,
    /// Plural label used on the filter button.
    pub filter_label: &'static str,
}

/// All known categories, in filter-bar order.
pub const KNOWN_CATEGORIES: &[Category] = &[
    Category {
        key: "farmers_market",
        color: "#22c55e",
        filter_label: "Farmers Markets",
    },
    Category {
        key: "craft_fair",
        color: "#8b5cf6",
        filter_label: "Craft Fairs",
    },
    Category {
        key: "festival",
        color: "#f59e0b",
        filter_label: "Festivals",
    },
    Category {
        key: "flea_market",
        color: "#6366f1",
        filter_label: "Flea Markets",
    },
];

/// Look up a known category by key.
pub fn lookup(key: &str) -> Option<&'static Category> {
    KNOWN_CATEGORIES.iter().find(|c| c.key == key)
}

/// Badge colour for a category, falling back to [`FALLBACK_COLOR`].
pub fn badge_color(key: Option<&str>) -> &'static str {
    key.and_then(lookup).map_or(FALLBACK_COLOR, |c| c.color)
}

/// Badge text for a category: underscores become spaces.
pub fn badge_label(key: Option<&str>) -> String {
    key.unwrap_or(FALLBACK_LABEL).replace('_', " ")
}
