//! Entrance reveal and section activation.
//!
//! DESIGN
//! ======
//! Reveal candidates are numbered in document order across sections. Each
//! one gets a stagger delay from its position inside its own section, so
//! every section animates from zero. Visibility is monotonic: once an
//! element is revealed it stays revealed and is no longer watched.
//!
//! The travel section is different on purpose. Its watcher stays attached
//! and every intersection re-adds `is-active`, which is harmless.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{CLASS_ACTIVE, CLASS_REVEAL, CLASS_VISIBLE, REVEAL_DELAY_PROPERTY};
use crate::events::Watcher;
use crate::page::{Effect, Target};

/// Stagger delay for the element at `index` within its section.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: u32, max_delay_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(step_ms).min(max_delay_ms)
}

/// Tracks which reveal candidates have been shown.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    visible: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { visible: vec![false; count] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Tag every candidate and assign its stagger delay.
    ///
    /// `sections` holds the candidate count of each section in order.
    #[must_use]
    pub fn tag(sections: &[usize], step_ms: u32, max_delay_ms: u32) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut global = 0;
        for &count in sections {
            for local in 0..count {
                let target = Target::RevealItem(global);
                let delay = stagger_delay_ms(local, step_ms, max_delay_ms);
                effects.push(Effect::SetClass { target, class: CLASS_REVEAL, on: true });
                effects.push(Effect::SetStyleProperty {
                    target,
                    name: REVEAL_DELAY_PROPERTY,
                    value: format!("{delay}ms"),
                });
                global += 1;
            }
        }
        effects
    }

    /// Mark one element visible and stop watching it.
    ///
    /// Returns nothing for elements already shown or out of range.
    pub fn reveal(&mut self, index: usize) -> Vec<Effect> {
        let Some(slot) = self.visible.get_mut(index) else {
            return Vec::new();
        };
        if *slot {
            return Vec::new();
        }
        *slot = true;
        let target = Target::RevealItem(index);
        vec![
            Effect::SetClass { target, class: CLASS_VISIBLE, on: true },
            Effect::Unobserve { watcher: Watcher::Reveal, target },
        ]
    }

    /// Show everything at once, for runtimes without intersection support.
    pub fn reveal_all(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        for (index, slot) in self.visible.iter_mut().enumerate() {
            if !*slot {
                *slot = true;
                effects.push(Effect::SetClass { target: Target::RevealItem(index), class: CLASS_VISIBLE, on: true });
            }
        }
        effects
    }

    /// Every candidate target, for the observer subscription.
    #[must_use]
    pub fn targets(&self) -> Vec<Target> {
        (0..self.visible.len()).map(Target::RevealItem).collect()
    }
}

#[must_use]
pub fn travel_active_effect() -> Effect {
    Effect::SetClass { target: Target::Travel, class: CLASS_ACTIVE, on: true }
}
