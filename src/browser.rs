//! Browser host: binds [`UiController`] to the live DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web-sys`. It discovers optional
//! elements, detects capabilities, registers the listeners the controller
//! asks for, and applies returned effects. Listener closures are leaked with
//! `forget()` because they live as long as the page.
//!
//! ERROR HANDLING
//! ==============
//! DOM calls that fail are logged at debug level and skipped. Nothing is
//! surfaced to the visitor.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MediaQueryList, Node, Storage, Window,
};

use crate::config::{Selectors, UiConfig};
use crate::consts::CONFIG_ELEMENT_ID;
use crate::controller::UiController;
use crate::events::{Subscription, UiEvent, Watcher};
use crate::host::{Capabilities, HostEnv};
use crate::page::{Effect, PageLayout, Target};
use crate::storage::{ModeStore, StorageError};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// HOST ADAPTERS
// =============================================================================

/// `localStorage`, when the context allows it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        // Reading the property itself throws in sandboxed frames.
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("storage: localStorage refused: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl ModeStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|err| StorageError::Access(format!("{err:?}")))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| StorageError::Access(format!("{err:?}")))
    }
}

/// Clock, color-scheme signal, and scroll offset from `window`.
pub struct BrowserEnv {
    window: Window,
    dark_query: Option<MediaQueryList>,
}

impl BrowserEnv {
    #[must_use]
    pub fn new(window: Window) -> Self {
        let dark_query = window.match_media(DARK_SCHEME_QUERY).unwrap_or(None);
        Self { window, dark_query }
    }

    /// Detect optional APIs once.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        let intersection_observer = has_property(self.window.as_ref(), "IntersectionObserver");
        let color_scheme_events =
            self.dark_query.as_ref().is_some_and(|query| has_property(query.as_ref(), "addEventListener"));
        Capabilities { intersection_observer, color_scheme_events }
    }
}

impl HostEnv for BrowserEnv {
    fn local_hour(&self) -> u32 {
        js_sys::Date::new_0().get_hours()
    }

    fn current_year(&self) -> i32 {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.dark_query.as_ref().map(MediaQueryList::matches)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

// =============================================================================
// DOM LOOKUP
// =============================================================================

/// Elements discovered at mount, addressed by [`Target`].
pub struct DomPage {
    root: Option<Element>,
    menu_button: Option<Element>,
    menu: Option<Element>,
    menu_links: Vec<Element>,
    year: Option<Element>,
    theme_toggle: Option<Element>,
    theme_meta: Option<Element>,
    header: Option<Element>,
    travel: Option<Element>,
    reveal_items: Vec<Element>,
    reveal_sections: Vec<usize>,
}

impl DomPage {
    #[must_use]
    pub fn discover(document: &Document, selectors: &Selectors) -> Self {
        let menu = document.get_element_by_id(&selectors.menu_id);
        let menu_links = menu.as_ref().map_or_else(Vec::new, |menu| query_all(menu, "a"));

        let mut reveal_items = Vec::new();
        let mut reveal_sections = Vec::new();
        for section in query_all(document, &selectors.sections) {
            let items = query_all(&section, &selectors.reveal_items);
            reveal_sections.push(items.len());
            reveal_items.extend(items);
        }

        Self {
            root: document.document_element(),
            menu_button: document.get_element_by_id(&selectors.menu_button_id),
            menu,
            menu_links,
            year: document.get_element_by_id(&selectors.year_id),
            theme_toggle: document.get_element_by_id(&selectors.theme_toggle_id),
            theme_meta: document.query_selector(&selectors.theme_meta).unwrap_or(None),
            header: document.query_selector(&selectors.header).unwrap_or(None),
            travel: document.get_element_by_id(&selectors.travel_section_id),
            reveal_items,
            reveal_sections,
        }
    }

    #[must_use]
    pub fn layout(&self) -> PageLayout {
        PageLayout {
            menu_button: self.menu_button.is_some(),
            menu: self.menu.is_some(),
            year: self.year.is_some(),
            theme_toggle: self.theme_toggle.is_some(),
            theme_meta: self.theme_meta.is_some(),
            header: self.header.is_some(),
            travel: self.travel.is_some(),
            reveal_sections: self.reveal_sections.clone(),
        }
    }

    fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Root => self.root.as_ref(),
            Target::MenuButton => self.menu_button.as_ref(),
            Target::Menu => self.menu.as_ref(),
            Target::Year => self.year.as_ref(),
            Target::ThemeToggle => self.theme_toggle.as_ref(),
            Target::ThemeMeta => self.theme_meta.as_ref(),
            Target::Header => self.header.as_ref(),
            Target::Travel => self.travel.as_ref(),
            Target::RevealItem(index) => self.reveal_items.get(index),
        }
    }

    /// Map an observed element back to its target.
    fn target_of(&self, watcher: Watcher, element: &Element) -> Option<Target> {
        match watcher {
            Watcher::Reveal => self.reveal_items.iter().position(|el| el == element).map(Target::RevealItem),
            Watcher::Travel => (self.travel.as_ref() == Some(element)).then_some(Target::Travel),
        }
    }

    /// Whether `node` sits inside the menu panel or its trigger.
    fn inside_menu(&self, node: &Node) -> bool {
        [&self.menu, &self.menu_button]
            .into_iter()
            .flatten()
            .any(|el| el.contains(Some(node)))
    }
}

fn query_all<P>(parent: &P, selector: &str) -> Vec<Element>
where
    P: AsRef<JsValue>,
{
    let parent: &JsValue = parent.as_ref();
    let list = if let Some(el) = parent.dyn_ref::<Element>() {
        el.query_selector_all(selector)
    } else if let Some(doc) = parent.dyn_ref::<Document>() {
        doc.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let list = match list {
        Ok(list) => list,
        Err(err) => {
            log::debug!("dom: bad selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    let mut elements = Vec::new();
    for i in 0..list.length() {
        if let Some(Ok(element)) = list.item(i).map(|node| node.dyn_into::<Element>()) {
            elements.push(element);
        }
    }
    elements
}

// =============================================================================
// APP
// =============================================================================

type Controller = UiController<LocalStore, BrowserEnv>;

struct App {
    window: Window,
    document: Document,
    dom: DomPage,
    dark_query: Option<MediaQueryList>,
    controller: RefCell<Controller>,
    observers: RefCell<Vec<(Watcher, IntersectionObserver)>>,
}

impl App {
    fn dispatch(&self, event: UiEvent) {
        let effects = self.controller.borrow_mut().handle(event);
        self.apply(&effects);
    }

    fn apply(&self, effects: &[Effect]) {
        for effect in effects {
            if let Err(err) = self.apply_one(effect) {
                log::debug!("dom: {effect:?} failed: {err:?}");
            }
        }
    }

    fn apply_one(&self, effect: &Effect) -> Result<(), JsValue> {
        let Some(element) = self.dom.element(effect.target()) else {
            return Ok(());
        };
        match effect {
            Effect::SetClass { class, on, .. } => {
                element.class_list().toggle_with_force(class, *on)?;
            }
            Effect::SetAttribute { name, value, .. } => element.set_attribute(name, value)?,
            Effect::SetText { text, .. } => element.set_text_content(Some(text.as_str())),
            Effect::SetStyleProperty { name, value, .. } => {
                if let Some(html) = element.dyn_ref::<HtmlElement>() {
                    html.style().set_property(name, value)?;
                }
            }
            Effect::Unobserve { watcher, .. } => {
                for (w, observer) in self.observers.borrow().iter() {
                    if w == watcher {
                        observer.unobserve(element);
                    }
                }
            }
        }
        Ok(())
    }

    fn subscribe(self: &Rc<Self>, subscription: Subscription) -> Result<(), JsValue> {
        match subscription {
            Subscription::MenuToggleClick => {
                if let Some(button) = &self.dom.menu_button {
                    self.listen(button, "click", |_| Some(UiEvent::MenuToggleClick))?;
                }
            }
            Subscription::MenuLinkClick => {
                for link in &self.dom.menu_links {
                    self.listen(link, "click", |_| Some(UiEvent::MenuLinkClick))?;
                }
            }
            Subscription::DocumentClick => {
                let app = Rc::clone(self);
                self.listen(&self.document, "click", move |event| {
                    let inside_menu = event
                        .target()
                        .is_some_and(|target| target.dyn_ref::<Node>().is_some_and(|node| app.dom.inside_menu(node)));
                    Some(UiEvent::DocumentClick { inside_menu })
                })?;
            }
            Subscription::DocumentKeyDown => {
                self.listen(&self.document, "keydown", |event| {
                    event.dyn_ref::<KeyboardEvent>().map(|key| UiEvent::KeyDown { key: key.key() })
                })?;
            }
            Subscription::ThemeToggleClick => {
                if let Some(toggle) = &self.dom.theme_toggle {
                    self.listen(toggle, "click", |_| Some(UiEvent::ThemeToggleClick))?;
                }
            }
            Subscription::Scroll { passive } => {
                let app = Rc::clone(self);
                let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                    let y = app.window.scroll_y().unwrap_or(0.0);
                    app.dispatch(UiEvent::Scroll { y });
                });
                let options = AddEventListenerOptions::new();
                options.set_passive(passive);
                self.window.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    closure.as_ref().unchecked_ref(),
                    &options,
                )?;
                closure.forget();
            }
            Subscription::ColorSchemeChange => {
                if let Some(query) = &self.dark_query {
                    self.listen(query, "change", |_| Some(UiEvent::ColorSchemeChange))?;
                }
            }
            Subscription::Interval { period_ms } => {
                let app = Rc::clone(self);
                Interval::new(period_ms, move || app.dispatch(UiEvent::IntervalTick)).forget();
            }
            Subscription::Observe { watcher, targets, threshold, root_margin } => {
                self.observe(watcher, &targets, threshold, &root_margin)?;
            }
        }
        Ok(())
    }

    /// Register a DOM listener that maps events to a [`UiEvent`].
    fn listen<F>(self: &Rc<Self>, target: &web_sys::EventTarget, kind: &str, map: F) -> Result<(), JsValue>
    where
        F: Fn(&Event) -> Option<UiEvent> + 'static,
    {
        let app = Rc::clone(self);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(ui_event) = map(&event) {
                app.dispatch(ui_event);
            }
        });
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn observe(
        self: &Rc<Self>,
        watcher: Watcher,
        targets: &[Target],
        threshold: f64,
        root_margin: &str,
    ) -> Result<(), JsValue> {
        let app = Rc::clone(self);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(target) = app.dom.target_of(watcher, &entry.target()) else {
                        continue;
                    };
                    app.dispatch(UiEvent::Intersection {
                        watcher,
                        target,
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        for target in targets {
            if let Some(element) = self.dom.element(*target) {
                observer.observe(element);
            }
        }
        self.observers.borrow_mut().push((watcher, observer));
        Ok(())
    }
}

// =============================================================================
// ENTRY
// =============================================================================

/// Mount once the document body is available.
pub fn mount() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let closure = Closure::once_into_js(mount_now);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref()) {
            log::debug!("mount: cannot wait for DOMContentLoaded: {err:?}");
        }
        return;
    }
    mount_now();
}

fn mount_now() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = read_config(&document);
    let dom = DomPage::discover(&document, &config.selectors);
    let env = BrowserEnv::new(window.clone());
    let capabilities = env.capabilities();
    let dark_query = env.dark_query.clone();
    let store = LocalStore::new(&window);
    let layout = dom.layout();
    log::debug!("mount: {layout:?} {capabilities:?}");

    let controller = UiController::new(config, layout, capabilities, store, env);
    let app = Rc::new(App {
        window,
        document,
        dom,
        dark_query,
        controller: RefCell::new(controller),
        observers: RefCell::new(Vec::new()),
    });

    let startup = app.controller.borrow_mut().start();
    app.apply(&startup.effects);
    for subscription in startup.subscriptions {
        if let Err(err) = app.subscribe(subscription) {
            log::debug!("mount: listener registration failed: {err:?}");
        }
    }
}

/// Defaults, overridden by an inline JSON block when the page has one.
fn read_config(document: &Document) -> UiConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config: {err}; using defaults");
            UiConfig::default()
        }
    }
}
