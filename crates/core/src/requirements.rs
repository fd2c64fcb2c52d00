//! Vendor requirement badges derived from an event's boolean flags.

use crate::event::Event;

/// Fixed presentation for one requirement flag.
#[derive(Clone, Copy)]
pub struct RequirementBadge {
    /// Stable identifier, also used as a CSS modifier class.
    pub key: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub background: &'static str,
    pub color: &'static str,
    is_set: fn(&Event) -> bool,
}

impl RequirementBadge {
    pub fn applies_to(&self, event: &Event) -> bool {
        (self.is_set)(event)
    }
}

impl std::fmt::Debug for RequirementBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequirementBadge")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish()
    }
}

/// Badges in display order.
pub const REQUIREMENT_BADGES: &[RequirementBadge] = &[
    RequirementBadge {
        key: "handmade",
        icon: "✋",
        label: "Handmade Only",
        background: "#4c1d95",
        color: "#ddd6fe",
        is_set: |e: &Event| e.handmade_only,
    },
    RequirementBadge {
        key: "insurance",
        icon: "🛡️",
        label: "Insurance Required",
        background: "#7c2d12",
        color: "#fed7aa",
        is_set: |e: &Event| e.requires_insurance,
    },
    RequirementBadge {
        key: "tent",
        icon: "⛺",
        label: "Tent Required",
        background: "#713f12",
        color: "#fef08a",
        is_set: |e: &Event| e.requires_tent,
    },
    RequirementBadge {
        key: "indoor",
        icon: "🏠",
        label: "Indoor",
        background: "#164e63",
        color: "#a5f3fc",
        is_set: |e: &Event| e.is_indoor,
    },
    RequirementBadge {
        key: "shelter",
        icon: "⛱️",
        label: "Covered",
        background: "#134e4a",
        color: "#99f6e4",
        is_set: |e: &Event| e.has_shelter,
    },
    RequirementBadge {
        key: "juried",
        icon: "⚖️",
        label: "Juried",
        background: "#831843",
        color: "#fbcfe8",
        is_set: |e: &Event| e.is_juried,
    },
];

/// Badges whose flag is set on `event`, in display order.
pub fn badges_for(event: &Event) -> impl Iterator<Item = &'static RequirementBadge> + '_ {
    REQUIREMENT_BADGES.iter().filter(move |b| b.applies_to(event))
}
