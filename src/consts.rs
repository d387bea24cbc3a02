//! Shared constants: DOM hooks, class names, and tuning defaults.

// ── DOM hooks ───────────────────────────────────────────────────

/// Id of the mobile navigation trigger button.
pub const MENU_BUTTON_ID: &str = "menuBtn";

/// Id of the mobile navigation panel.
pub const MENU_ID: &str = "mobileMenu";

/// Id of the copyright year placeholder.
pub const YEAR_ID: &str = "year";

/// Id of the theme-cycle button.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Selector for the `<meta name="theme-color">` tag.
pub const THEME_META_SELECTOR: &str = "meta[name=\"theme-color\"]";

/// Selector for the sticky page header.
pub const HEADER_SELECTOR: &str = "header";

/// Id of the section that carries the decorative travel animation.
pub const TRAVEL_SECTION_ID: &str = "travel";

/// Sections whose content is tagged for reveal.
pub const SECTION_SELECTOR: &str = "main section";

/// Content inside a section that is tagged for reveal.
pub const REVEAL_ITEM_SELECTOR: &str = ".section-title, .card, .timeline-item, .chip, p";

/// Id of the optional inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the selected theme mode.
pub const STORAGE_KEY: &str = "portfolio-theme-mode";

// ── Classes and attributes ──────────────────────────────────────

pub const CLASS_OPEN: &str = "open";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_REVEAL: &str = "reveal";
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_ACTIVE: &str = "is-active";

pub const ATTR_THEME: &str = "data-theme";
pub const ATTR_EXPANDED: &str = "aria-expanded";
pub const ATTR_LABEL: &str = "aria-label";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_CONTENT: &str = "content";

/// Inline custom property carrying the stagger delay.
pub const REVEAL_DELAY_PROPERTY: &str = "--reveal-delay";

pub const MENU_OPEN_LABEL: &str = "Open menu";
pub const MENU_CLOSE_LABEL: &str = "Close menu";

// ── Theme ───────────────────────────────────────────────────────

/// `theme-color` value applied with the light theme.
pub const LIGHT_THEME_COLOR: &str = "#f6f4ef";

/// `theme-color` value applied with the dark theme.
pub const DARK_THEME_COLOR: &str = "#0e1116";

/// First local hour (inclusive) treated as daytime.
pub const DAY_START_HOUR: u32 = 7;

/// First local hour (exclusive) treated as night again.
pub const DAY_END_HOUR: u32 = 19;

/// Re-resolution period for auto mode when no color-scheme change event exists.
pub const AUTO_POLL_INTERVAL_MS: u32 = 60 * 60 * 1000;

// ── Header ──────────────────────────────────────────────────────

/// Vertical offset past which the header is marked scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 18.0;

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_STEP_MS: u32 = 70;
pub const REVEAL_MAX_DELAY_MS: u32 = 280;
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
pub const TRAVEL_THRESHOLD: f64 = 0.35;

/// Slack for intersection ratios reported just under a threshold.
pub const RATIO_TOLERANCE: f64 = 1e-3;
