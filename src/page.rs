//! Page elements and the mutations the controller asks the host to apply.
//!
//! The controller never touches the DOM. It names elements with [`Target`]
//! and returns [`Effect`]s; the host resolves targets to real nodes.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::events::Watcher;

/// A page element the controller can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The document root (`<html>`).
    Root,
    MenuButton,
    Menu,
    Year,
    ThemeToggle,
    ThemeMeta,
    Header,
    Travel,
    /// A reveal candidate, numbered in document order across all sections.
    RevealItem(usize),
}

/// A single DOM mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Add (`on`) or remove a class.
    SetClass { target: Target, class: &'static str, on: bool },
    SetAttribute { target: Target, name: &'static str, value: String },
    SetText { target: Target, text: String },
    /// Set an inline style property (including custom properties).
    SetStyleProperty { target: Target, name: &'static str, value: String },
    /// Stop watching `target` with the given watcher.
    Unobserve { watcher: Watcher, target: Target },
}

impl Effect {
    /// The element this effect applies to.
    #[must_use]
    pub fn target(&self) -> Target {
        match self {
            Self::SetClass { target, .. }
            | Self::SetAttribute { target, .. }
            | Self::SetText { target, .. }
            | Self::SetStyleProperty { target, .. }
            | Self::Unobserve { target, .. } => *target,
        }
    }
}

/// Which optional elements the host found on the page.
///
/// Every feature checks its own elements; a missing element disables only
/// the feature that needs it.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub menu_button: bool,
    pub menu: bool,
    pub year: bool,
    pub theme_toggle: bool,
    pub theme_meta: bool,
    pub header: bool,
    pub travel: bool,
    /// Number of reveal candidates in each section, in document order.
    pub reveal_sections: Vec<usize>,
}

impl PageLayout {
    /// A page with every optional element and the given reveal sections.
    #[must_use]
    pub fn full(reveal_sections: Vec<usize>) -> Self {
        Self {
            menu_button: true,
            menu: true,
            year: true,
            theme_toggle: true,
            theme_meta: true,
            header: true,
            travel: true,
            reveal_sections,
        }
    }

    /// Whether `target` exists on this page.
    #[must_use]
    pub fn has(&self, target: Target) -> bool {
        match target {
            Target::Root => true,
            Target::MenuButton => self.menu_button,
            Target::Menu => self.menu,
            Target::Year => self.year,
            Target::ThemeToggle => self.theme_toggle,
            Target::ThemeMeta => self.theme_meta,
            Target::Header => self.header,
            Target::Travel => self.travel,
            Target::RevealItem(index) => index < self.reveal_count(),
        }
    }

    /// The menu only works with both its trigger and its panel.
    #[must_use]
    pub fn has_menu(&self) -> bool {
        self.menu_button && self.menu
    }

    #[must_use]
    pub fn reveal_count(&self) -> usize {
        self.reveal_sections.iter().sum()
    }
}
