//! # Swagger Theme - Theme switching for Swagger UI
//!
//! `swagger-theme` drives the theme picker of a Swagger UI documentation
//! page: a fixed library of fifteen themes, one stylesheet swapped in and
//! out per switch, the user's choice remembered under a single key, an
//! `auto` mode that follows the system dark-mode setting, and two keyboard
//! shortcuts for cycling.
//!
//! ## Core Concepts
//!
//! - [`ThemeRegistry`]: The ordered theme table (`auto`, `classic`, `dark`, ...)
//! - [`ThemeController`]: Applies, cycles, randomizes and previews themes
//! - [`Host`]: What the controller needs from its environment (document,
//!   storage, color-scheme query, timers)
//! - [`MemoryHost`]: An in-memory host with a virtual clock
//! - [`ThemeChanged`]: Notification published after every switch
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use swagger_theme::{ColorMode, KeyEvent, MemoryHost, ThemeController};
//!
//! let host = MemoryHost::new()
//!     .with_color_scheme(ColorMode::Light)
//!     .with_selector();
//! let mut themes = ThemeController::new(host);
//!
//! // Nothing saved yet, so the page follows the system: light means classic,
//! // which uses the page's own styles and attaches no stylesheet.
//! assert_eq!(themes.initialize(), "auto");
//! assert!(themes.host().stylesheet_hrefs().is_empty());
//!
//! // Ctrl+Shift+D jumps to the first dark theme.
//! themes.handle_key(&KeyEvent::new("D").ctrl().shift());
//! assert_eq!(themes.host().stylesheet_hrefs(), vec!["./themes/dark.css"]);
//!
//! // A preview reverts on its own.
//! themes.preview_theme_for("gruvbox", Duration::from_millis(100));
//! themes.advance(Duration::from_millis(100));
//! assert_eq!(themes.host().stylesheet_hrefs(), vec!["./themes/dark.css"]);
//! ```
//!
//! ## Logging
//!
//! Everything the controller does is reported through [`tracing`]; install
//! a subscriber to see it. Stylesheet fetch failures and storage errors are
//! logged and otherwise ignored.

mod config;
mod controller;
mod error;
mod events;
pub mod host;
mod keyboard;
mod selection;
mod store;
mod stylesheet;
mod theme;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::{ConfigError, StoreError};
pub use events::{Subscribers, SubscriptionId, ThemeChanged};
pub use host::{Host, MemoryHost, SelectorControl, SelectorState, Task};
pub use keyboard::{KeyEvent, KeyOutcome, Shortcut, ShortcutBindings};
pub use selection::initial_selection;
pub use store::{JsonFileStore, MemoryStore, SelectionStore};
pub use stylesheet::{LoadOutcome, StylesheetLink, StylesheetLoader};
pub use theme::{
    resolve_auto, Category, ColorMode, ColorSchemeSource, OsColorScheme, ParseCategoryError,
    ThemeDescriptor, ThemeRegistry, AUTO, CLASSIC, DARK,
};
