//! Inbound UI events and the listener registrations that produce them.
//!
//! At startup the controller returns the [`Subscription`]s it needs. The
//! host wires each one to its own event machinery and feeds the resulting
//! [`UiEvent`]s back through `UiController::handle`.

use crate::page::Target;

/// Which viewport watcher an intersection belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Watcher {
    /// Fire-once entrance animation for section content.
    Reveal,
    /// Repeating activation of the travel section.
    Travel,
}

/// A listener the host must register.
#[derive(Clone, Debug, PartialEq)]
pub enum Subscription {
    /// Clicks on the menu trigger.
    MenuToggleClick,
    /// Clicks on any link inside the menu panel.
    MenuLinkClick,
    /// Clicks anywhere in the document.
    DocumentClick,
    /// Key presses anywhere in the document.
    DocumentKeyDown,
    ThemeToggleClick,
    /// Window scrolling. `passive` listeners must not block scrolling.
    Scroll { passive: bool },
    /// OS color-scheme preference changes.
    ColorSchemeChange,
    /// A recurring timer with no cancellation.
    Interval { period_ms: u32 },
    /// Viewport intersection for `targets`.
    Observe {
        watcher: Watcher,
        targets: Vec<Target>,
        threshold: f64,
        root_margin: String,
    },
}

/// An event delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    MenuToggleClick,
    MenuLinkClick,
    /// A document click; `inside_menu` is true when the click landed in the
    /// menu panel or on its trigger.
    DocumentClick { inside_menu: bool },
    KeyDown { key: String },
    ThemeToggleClick,
    Scroll { y: f64 },
    ColorSchemeChange,
    IntervalTick,
    /// A viewport intersection change; `ratio` is the visible fraction.
    Intersection { watcher: Watcher, target: Target, intersecting: bool, ratio: f64 },
}
