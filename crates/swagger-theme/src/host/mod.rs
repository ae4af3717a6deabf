//! The capabilities a controller needs from its environment.
//!
//! In a browser these are the DOM, `localStorage`, `matchMedia` and
//! `setTimeout`. [`Host`] names exactly those capabilities so the controller
//! can run against any environment that provides them, including the
//! in-memory [`MemoryHost`].

mod memory;

use std::time::Duration;

use crate::error::StoreError;
use crate::stylesheet::StylesheetLink;
use crate::theme::ColorMode;

pub use memory::{MemoryHost, SelectorControl, CURRENT_THEME_ATTR, THEME_CATEGORY_ATTR};

/// Deferred work the controller asks the host to run later.
///
/// When the delay expires the host hands the task back through
/// [`ThemeController::run_task`](crate::ThemeController::run_task).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Clear the body transition set while switching.
    ClearTransition,
    /// End the preview started as number `generation`.
    RevertPreview { generation: u64 },
}

/// Visual state pushed to the theme selector control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    /// Full class attribute, `theme-selector <theme>`.
    pub class_name: String,
    /// Value for `data-current-theme`.
    pub current_theme: String,
    /// Value for `data-theme-category`.
    pub category: String,
}

/// Environment capabilities used by [`ThemeController`](crate::ThemeController).
///
/// Methods touching the selector control are no-ops on hosts without one;
/// [`selector_value`](Host::selector_value) returning `None` is how the
/// controller learns that no selector is present.
pub trait Host {
    /// Current system color-scheme preference.
    fn color_mode(&self) -> ColorMode;

    fn load_selection(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn save_selection(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Inserts `link` into the document and starts fetching it.
    fn attach_stylesheet(&mut self, link: &StylesheetLink);

    /// Removes `link` from the document. Returns `false` when it was no
    /// longer attached.
    fn remove_stylesheet(&mut self, link: &StylesheetLink) -> bool;

    fn selector_value(&self) -> Option<String>;

    fn set_selector_value(&mut self, value: &str);

    fn update_selector(&mut self, state: &SelectorState);

    /// Sets, or with `None` clears, the body's CSS transition.
    fn set_transition(&mut self, transition: Option<&str>);

    /// Runs `task` once after `delay`. Scheduled tasks cannot be cancelled.
    fn schedule(&mut self, delay: Duration, task: Task);
}
