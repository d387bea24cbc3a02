//! What the controller needs to know about its runtime.
//!
//! [`HostEnv`] answers live questions (clock, color-scheme signal, scroll
//! offset). [`Capabilities`] records which optional browser APIs exist so
//! both the supported and degraded paths are reachable from tests.

/// Live environment queries.
pub trait HostEnv {
    /// Local hour of day, `0..=23`.
    fn local_hour(&self) -> u32;

    /// Current calendar year in local time.
    fn current_year(&self) -> i32;

    /// Current OS dark-scheme preference, or `None` if the host cannot read it.
    fn prefers_dark(&self) -> Option<bool>;

    /// Current vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;
}

/// Optional runtime features, detected once by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Viewport intersection observation is available.
    pub intersection_observer: bool,
    /// The color-scheme query can notify about changes.
    pub color_scheme_events: bool,
}

impl Capabilities {
    /// Everything a current browser offers.
    #[must_use]
    pub fn full() -> Self {
        Self { intersection_observer: true, color_scheme_events: true }
    }
}
