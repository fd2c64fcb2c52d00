//! Domain core for the VendorWize listing page.
//!
//! Holds the event model, the display formatters, the category and
//! requirement lookup tables, and the HTML renderer. Nothing here performs
//! I/O, so the web crate and tests can drive it directly.

pub mod category;
pub mod error;
pub mod event;
pub mod formatting;
pub mod render;
pub mod requirements;
