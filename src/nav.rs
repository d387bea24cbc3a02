//! Mobile navigation menu state.
//!
//! The panel's `open` class and the trigger's ARIA attributes always move
//! together. State is not persisted; every page load starts closed.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ATTR_EXPANDED, ATTR_LABEL, CLASS_OPEN, MENU_CLOSE_LABEL, MENU_OPEN_LABEL};
use crate::page::{Effect, Target};

/// Open/closed menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.set(!self.open)
    }

    /// Close the menu. Already closed means nothing to do.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        self.set(false)
    }

    fn set(&mut self, open: bool) -> Vec<Effect> {
        self.open = open;
        vec![
            Effect::SetClass { target: Target::Menu, class: CLASS_OPEN, on: open },
            Effect::SetAttribute { target: Target::MenuButton, name: ATTR_EXPANDED, value: open.to_string() },
            Effect::SetAttribute {
                target: Target::MenuButton,
                name: ATTR_LABEL,
                value: if open { MENU_CLOSE_LABEL } else { MENU_OPEN_LABEL }.to_owned(),
            },
        ]
    }
}

/// Whether a key press should dismiss the menu.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}
