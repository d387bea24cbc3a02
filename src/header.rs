//! Header scroll state and the footer year stamp.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::consts::CLASS_SCROLLED;
use crate::page::{Effect, Target};

/// Whether the page has scrolled past `threshold_px`.
#[must_use]
pub fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

#[must_use]
pub fn scrolled_effect(scroll_y: f64, threshold_px: f64) -> Effect {
    Effect::SetClass { target: Target::Header, class: CLASS_SCROLLED, on: is_scrolled(scroll_y, threshold_px) }
}

/// Text for the copyright year placeholder.
#[must_use]
pub fn year_text(year: i32) -> String {
    format!("{year:04}")
}
