//! The page controller: startup behavior and event dispatch.
//!
//! `UiController` is the testable core. It owns all mutable UI state (theme
//! mode, menu, reveal progress) and turns [`UiEvent`]s into [`Effect`]s
//! without touching the DOM. The browser host is a thin adapter around it.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::UiConfig;
use crate::consts::{ATTR_CONTENT, ATTR_LABEL, ATTR_THEME, ATTR_TITLE, RATIO_TOLERANCE};
use crate::events::{Subscription, UiEvent, Watcher};
use crate::header;
use crate::host::{Capabilities, HostEnv};
use crate::nav::{self, MenuState};
use crate::page::{Effect, PageLayout, Target};
use crate::reveal::{self, RevealTracker};
use crate::storage::ModeStore;
use crate::theme::{DayWindow, ResolvedTheme, ThemeEngine, ThemeMode};

/// Everything the host must do once the page is loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Startup {
    pub effects: Vec<Effect>,
    pub subscriptions: Vec<Subscription>,
}

pub struct UiController<S, H> {
    config: UiConfig,
    layout: PageLayout,
    capabilities: Capabilities,
    store: S,
    env: H,
    theme: ThemeEngine,
    menu: MenuState,
    reveal: RevealTracker,
    travel_active: bool,
}

impl<S: ModeStore, H: HostEnv> UiController<S, H> {
    /// Build a controller. Reads the persisted theme mode immediately.
    pub fn new(config: UiConfig, layout: PageLayout, capabilities: Capabilities, store: S, env: H) -> Self {
        let theme = ThemeEngine::load(&store, &config.storage_key);
        let reveal = RevealTracker::new(layout.reveal_count());
        Self {
            config,
            layout,
            capabilities,
            store,
            env,
            theme,
            menu: MenuState::default(),
            reveal,
            travel_active: false,
        }
    }

    /// Run every load-time behavior and list the listeners to register.
    pub fn start(&mut self) -> Startup {
        let mut effects = Vec::new();
        let mut subscriptions = Vec::new();

        if self.layout.has_menu() {
            subscriptions.extend([
                Subscription::MenuToggleClick,
                Subscription::MenuLinkClick,
                Subscription::DocumentClick,
                Subscription::DocumentKeyDown,
            ]);
        }

        effects.extend(self.apply_theme());
        if self.layout.has(Target::ThemeToggle) {
            subscriptions.push(Subscription::ThemeToggleClick);
        }
        if self.capabilities.color_scheme_events {
            subscriptions.push(Subscription::ColorSchemeChange);
        } else {
            subscriptions.push(Subscription::Interval { period_ms: self.config.theme.poll_interval_ms });
        }

        if self.layout.has(Target::Year) {
            effects.push(Effect::SetText { target: Target::Year, text: header::year_text(self.env.current_year()) });
        }

        if self.layout.has(Target::Header) {
            effects.push(header::scrolled_effect(self.env.scroll_y(), self.config.header.scroll_threshold_px));
            subscriptions.push(Subscription::Scroll { passive: true });
        }

        let reveal_config = &self.config.reveal;
        effects.extend(RevealTracker::tag(
            &self.layout.reveal_sections,
            reveal_config.step_ms,
            reveal_config.max_delay_ms,
        ));
        if self.capabilities.intersection_observer {
            if !self.reveal.is_empty() {
                subscriptions.push(Subscription::Observe {
                    watcher: Watcher::Reveal,
                    targets: self.reveal.targets(),
                    threshold: reveal_config.threshold,
                    root_margin: reveal_config.root_margin.clone(),
                });
            }
            if self.layout.has(Target::Travel) {
                subscriptions.push(Subscription::Observe {
                    watcher: Watcher::Travel,
                    targets: vec![Target::Travel],
                    threshold: reveal_config.travel_threshold,
                    root_margin: "0px".to_owned(),
                });
            }
        } else {
            log::debug!("reveal: no intersection support, showing {} items", self.reveal.len());
            effects.extend(self.reveal.reveal_all());
            if self.layout.has(Target::Travel) {
                self.travel_active = true;
                effects.push(reveal::travel_active_effect());
            }
        }

        Startup { effects, subscriptions }
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::MenuToggleClick if self.layout.has_menu() => self.menu.toggle(),
            UiEvent::MenuLinkClick if self.layout.has_menu() => self.menu.close(),
            UiEvent::DocumentClick { inside_menu: false } if self.layout.has_menu() => self.menu.close(),
            UiEvent::KeyDown { key } if self.layout.has_menu() && nav::is_dismiss_key(&key) => self.menu.close(),
            UiEvent::ThemeToggleClick if self.layout.has(Target::ThemeToggle) => {
                self.theme.cycle(&mut self.store);
                self.apply_theme()
            }
            UiEvent::ColorSchemeChange | UiEvent::IntervalTick if self.theme.mode() == ThemeMode::Auto => {
                self.apply_theme()
            }
            UiEvent::Scroll { y } if self.layout.has(Target::Header) => {
                vec![header::scrolled_effect(y, self.config.header.scroll_threshold_px)]
            }
            UiEvent::Intersection { watcher, target, intersecting: true, ratio }
                if self.layout.has(target) && self.crosses_threshold(watcher, ratio) =>
            {
                match (watcher, target) {
                    (Watcher::Reveal, Target::RevealItem(index)) => self.reveal.reveal(index),
                    (Watcher::Travel, Target::Travel) => {
                        self.travel_active = true;
                        vec![reveal::travel_active_effect()]
                    }
                    _ => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// The theme that would be applied right now.
    #[must_use]
    pub fn resolved_theme(&self) -> ResolvedTheme {
        let theme = &self.config.theme;
        let window = DayWindow { start_hour: theme.day_start_hour, end_hour: theme.day_end_hour };
        ResolvedTheme::resolve(self.theme.mode(), self.env.prefers_dark(), self.env.local_hour(), window)
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveal.is_visible(index)
    }

    #[must_use]
    pub fn travel_active(&self) -> bool {
        self.travel_active
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn env_mut(&mut self) -> &mut H {
        &mut self.env
    }

    /// Whether the visible fraction reached the watcher's threshold.
    ///
    /// The first notification after `observe` reports `isIntersecting` for
    /// any overlap, so the ratio is checked as well.
    fn crosses_threshold(&self, watcher: Watcher, ratio: f64) -> bool {
        let threshold = match watcher {
            Watcher::Reveal => self.config.reveal.threshold,
            Watcher::Travel => self.config.reveal.travel_threshold,
        };
        ratio + RATIO_TOLERANCE >= threshold
    }

    fn apply_theme(&self) -> Vec<Effect> {
        let resolved = self.resolved_theme();
        let mut effects =
            vec![Effect::SetAttribute { target: Target::Root, name: ATTR_THEME, value: resolved.as_str().to_owned() }];
        if self.layout.has(Target::ThemeMeta) {
            let color = match resolved {
                ResolvedTheme::Light => &self.config.theme.light_color,
                ResolvedTheme::Dark => &self.config.theme.dark_color,
            };
            effects.push(Effect::SetAttribute { target: Target::ThemeMeta, name: ATTR_CONTENT, value: color.clone() });
        }
        if self.layout.has(Target::ThemeToggle) {
            let mode = self.theme.mode();
            let label = format!("Theme: {} (switch to {})", mode.label(), mode.next().label());
            effects.push(Effect::SetAttribute { target: Target::ThemeToggle, name: ATTR_TITLE, value: label.clone() });
            effects.push(Effect::SetAttribute { target: Target::ThemeToggle, name: ATTR_LABEL, value: label });
        }
        log::debug!("theme: applied {resolved} (mode {})", self.theme.mode());
        effects
    }
}
