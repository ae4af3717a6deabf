//! In-memory host with a virtual clock.

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;
use std::time::Duration;

use super::{Host, SelectorState, Task};
use crate::error::StoreError;
use crate::store::{MemoryStore, SelectionStore};
use crate::stylesheet::{LoadOutcome, StylesheetLink};
use crate::theme::{ColorMode, ColorSchemeSource};

pub const CURRENT_THEME_ATTR: &str = "data-current-theme";
pub const THEME_CATEGORY_ATTR: &str = "data-theme-category";

/// A `<select class="theme-selector">` stand-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorControl {
    pub value: String,
    pub class_name: String,
    pub attributes: BTreeMap<String, String>,
}

impl SelectorControl {
    pub fn new() -> Self {
        Self {
            class_name: "theme-selector".to_string(),
            ..Self::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Debug)]
struct Timer {
    due: Duration,
    seq: u64,
    task: Task,
}

/// A [`Host`] that keeps the document, storage and timers in memory.
///
/// Stylesheet fetches settle on the next clock advance: `Loaded` unless
/// the href was marked with [`mark_unavailable`](Self::mark_unavailable).
/// Timers fire in due order, ties broken by scheduling order.
///
/// Drive it through [`ThemeController::advance`](crate::ThemeController::advance).
pub struct MemoryHost {
    color_scheme: Box<dyn ColorSchemeSource>,
    store: Box<dyn SelectionStore>,
    head: Vec<StylesheetLink>,
    unavailable: HashSet<String>,
    pending_loads: VecDeque<(StylesheetLink, LoadOutcome)>,
    selector: Option<SelectorControl>,
    transition: Option<String>,
    now: Duration,
    timers: Vec<Timer>,
    next_seq: u64,
}

impl MemoryHost {
    /// A light-mode host with empty storage and no selector control.
    pub fn new() -> Self {
        Self {
            color_scheme: Box::new(ColorMode::Light),
            store: Box::new(MemoryStore::new()),
            head: Vec::new(),
            unavailable: HashSet::new(),
            pending_loads: VecDeque::new(),
            selector: None,
            transition: None,
            now: Duration::ZERO,
            timers: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn with_color_scheme(mut self, source: impl ColorSchemeSource + 'static) -> Self {
        self.color_scheme = Box::new(source);
        self
    }

    pub fn with_store(mut self, store: impl SelectionStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Adds a theme selector control to the document.
    pub fn with_selector(mut self) -> Self {
        self.selector = Some(SelectorControl::new());
        self
    }

    /// Changes the reported color scheme. Does not notify anyone; pair it
    /// with [`ThemeController::color_scheme_changed`](crate::ThemeController::color_scheme_changed).
    pub fn set_color_scheme(&mut self, source: impl ColorSchemeSource + 'static) {
        self.color_scheme = Box::new(source);
    }

    /// Makes fetches of `href` fail.
    pub fn mark_unavailable(&mut self, href: &str) {
        self.unavailable.insert(href.to_string());
    }

    pub fn remove_selector(&mut self) {
        self.selector = None;
    }

    pub fn selector(&self) -> Option<&SelectorControl> {
        self.selector.as_ref()
    }

    /// Stylesheets currently in the document head.
    pub fn stylesheets(&self) -> &[StylesheetLink] {
        &self.head
    }

    pub fn stylesheet_hrefs(&self) -> Vec<&str> {
        self.head.iter().map(|link| link.href.as_str()).collect()
    }

    pub fn transition(&self) -> Option<&str> {
        self.transition.as_deref()
    }

    /// Reads a persisted value, treating store errors as absent.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.store.get(key).ok().flatten()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Next fetch result waiting to be reported.
    pub(crate) fn take_settled_load(&mut self) -> Option<(StylesheetLink, LoadOutcome)> {
        self.pending_loads.pop_front()
    }

    /// Pops the earliest timer due at or before `until`, moving the clock
    /// to its due time.
    pub(crate) fn take_due(&mut self, until: Duration) -> Option<Task> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        let timer = self.timers.swap_remove(index);
        self.now = self.now.max(timer.due);
        Some(timer.task)
    }

    pub(crate) fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHost")
            .field("color_mode", &self.color_scheme.color_mode())
            .field("head", &self.head)
            .field("selector", &self.selector)
            .field("transition", &self.transition)
            .field("now", &self.now)
            .field("timers", &self.timers)
            .finish_non_exhaustive()
    }
}

impl Host for MemoryHost {
    fn color_mode(&self) -> ColorMode {
        self.color_scheme.color_mode()
    }

    fn load_selection(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.store.get(key)
    }

    fn save_selection(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.store.set(key, value)
    }

    fn attach_stylesheet(&mut self, link: &StylesheetLink) {
        let outcome = if self.unavailable.contains(&link.href) {
            LoadOutcome::Failed
        } else {
            LoadOutcome::Loaded
        };
        self.head.push(link.clone());
        self.pending_loads.push_back((link.clone(), outcome));
    }

    fn remove_stylesheet(&mut self, link: &StylesheetLink) -> bool {
        match self.head.iter().position(|attached| attached == link) {
            Some(index) => {
                self.head.remove(index);
                true
            }
            None => false,
        }
    }

    fn selector_value(&self) -> Option<String> {
        self.selector.as_ref().map(|s| s.value.clone())
    }

    fn set_selector_value(&mut self, value: &str) {
        if let Some(selector) = self.selector.as_mut() {
            selector.value = value.to_string();
        }
    }

    fn update_selector(&mut self, state: &SelectorState) {
        if let Some(selector) = self.selector.as_mut() {
            selector.class_name = state.class_name.clone();
            selector
                .attributes
                .insert(CURRENT_THEME_ATTR.to_string(), state.current_theme.clone());
            selector
                .attributes
                .insert(THEME_CATEGORY_ATTR.to_string(), state.category.clone());
        }
    }

    fn set_transition(&mut self, transition: Option<&str>) {
        self.transition = transition.map(str::to_string);
    }

    fn schedule(&mut self, delay: Duration, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            due: self.now + delay,
            seq,
            task,
        });
    }
}
