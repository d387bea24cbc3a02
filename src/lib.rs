//! Page behavior for a static portfolio site.
//!
//! This crate is compiled to WebAssembly and loaded by the site's HTML. It
//! drives four independent features: the mobile navigation menu, the
//! auto/light/dark theme switcher, the scrolled header state with the footer
//! year, and scroll-triggered reveal animations.
//!
//! All behavior lives in [`controller::UiController`], which consumes
//! [`events::UiEvent`]s and returns [`page::Effect`]s without touching the
//! DOM. The `hydrate` feature adds the [`browser`] host that wires the
//! controller to `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Startup and event dispatch |
//! | [`theme`] | Theme modes, resolution, persisted mode engine |
//! | [`nav`] | Menu open/close state |
//! | [`header`] | Scrolled header state and year stamp |
//! | [`reveal`] | Stagger delays and fire-once reveal tracking |
//! | [`events`] | Inbound events and listener subscriptions |
//! | [`page`] | Element targets, effects, page layout |
//! | [`host`] | Environment queries and capability flags |
//! | [`storage`] | Mode persistence trait |
//! | [`config`] | Configuration and JSON overrides |
//! | [`consts`] | Ids, class names, tuning defaults |

pub mod config;
pub mod consts;
pub mod controller;
pub mod events;
pub mod header;
pub mod host;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod storage;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {err}");
    }
    browser::mount();
}
