//! The theme-switching controller.

use std::time::Duration;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::ThemeConfig;
use crate::events::{Subscribers, SubscriptionId, ThemeChanged};
use crate::host::{Host, MemoryHost, SelectorState, Task};
use crate::keyboard::{KeyEvent, KeyOutcome, Shortcut, ShortcutBindings};
use crate::selection::initial_selection;
use crate::stylesheet::{LoadOutcome, StylesheetLink, StylesheetLoader};
use crate::theme::{resolve_auto, Category, ColorMode, ThemeRegistry, AUTO};

#[derive(Debug)]
struct PendingPreview {
    generation: u64,
    /// Selection the preview persisted.
    applied: String,
    restore: String,
}

/// Applies, cycles, previews and persists themes on a [`Host`].
///
/// All work happens synchronously inside the calling method. Work the host
/// performs later comes back as explicit calls: [`run_task`](Self::run_task)
/// for timers, [`stylesheet_settled`](Self::stylesheet_settled) for fetch
/// results, [`color_scheme_changed`](Self::color_scheme_changed) and
/// [`handle_key`](Self::handle_key) for user and system input.
///
/// # Example
///
/// ```rust
/// use swagger_theme::{ColorMode, MemoryHost, ThemeController};
///
/// let host = MemoryHost::new().with_color_scheme(ColorMode::Dark).with_selector();
/// let mut controller = ThemeController::new(host);
///
/// assert_eq!(controller.toggle_theme("auto"), "dark");
/// assert_eq!(controller.host().stylesheet_hrefs(), vec!["./themes/dark.css"]);
/// assert_eq!(controller.persisted_selection().as_deref(), Some("auto"));
/// ```
#[derive(Debug)]
pub struct ThemeController<H: Host> {
    host: H,
    registry: ThemeRegistry,
    config: ThemeConfig,
    shortcuts: ShortcutBindings,
    loader: StylesheetLoader,
    subscribers: Subscribers,
    preview: Option<PendingPreview>,
    preview_generation: u64,
}

impl<H: Host> ThemeController<H> {
    /// Creates a controller with the built-in registry and default config.
    pub fn new(host: H) -> Self {
        Self::with_config(host, ThemeConfig::default())
    }

    pub fn with_config(host: H, config: ThemeConfig) -> Self {
        let loader = StylesheetLoader::new(&config.stylesheet_base, &config.default_theme);
        let shortcuts = ShortcutBindings {
            cycle_all: config.cycle_all_key,
            cycle_dark: config.cycle_dark_key,
        };
        Self {
            host,
            registry: ThemeRegistry::builtin().clone(),
            config,
            shortcuts,
            loader,
            subscribers: Subscribers::new(),
            preview: None,
            preview_generation: 0,
        }
    }

    /// Replaces the theme table.
    pub fn with_registry(mut self, registry: ThemeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Every theme, in selector order.
    pub fn available_themes(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn themes_by_category(&self, category: Category) -> Vec<&str> {
        self.registry.ids_by_category(category)
    }

    /// The theme stylesheet currently attached, if any.
    pub fn current_stylesheet(&self) -> Option<&StylesheetLink> {
        self.loader.current()
    }

    /// Registers a `themeChanged` listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&ThemeChanged) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// The stored selection. Storage errors read as no selection.
    pub fn persisted_selection(&self) -> Option<String> {
        match self.host.load_selection(&self.config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read saved theme");
                None
            }
        }
    }

    /// The concrete theme `auto` currently stands for.
    pub fn resolve_auto(&self) -> String {
        self.resolve_auto_for(self.host.color_mode())
    }

    fn resolve_auto_for(&self, mode: ColorMode) -> String {
        resolve_auto(mode, &self.config.light_theme, &self.config.dark_theme).to_string()
    }

    /// The selection to start with: the stored id when registered, else `auto`.
    pub fn initial_selection(&self) -> String {
        initial_selection(self.persisted_selection().as_deref(), &self.registry)
    }

    /// Restores the stored selection onto the page.
    ///
    /// Without a selector control nothing is applied; the selection is
    /// still computed and returned.
    pub fn initialize(&mut self) -> String {
        let initial = self.initial_selection();
        if self.host.selector_value().is_some() {
            self.host.set_selector_value(&initial);
            self.toggle_theme(&initial);
        }
        tracing::info!(theme = %initial, "Theme initialized");
        self.log_banner();
        initial
    }

    fn log_banner(&self) {
        let categories: Vec<&str> = self
            .registry
            .categories()
            .into_iter()
            .map(Category::as_str)
            .collect();
        tracing::debug!(
            count = self.registry.len(),
            categories = ?categories,
            "Theme library loaded"
        );
        for line in self.shortcuts.describe() {
            tracing::debug!("Shortcut {line}");
        }
    }

    /// Switches to `requested`, which may be `auto`.
    ///
    /// Applies the concrete theme's stylesheet, updates the selector
    /// control, persists `requested` itself (so `auto` keeps following the
    /// system), starts the body transition and notifies subscribers.
    /// Returns the concrete theme.
    pub fn toggle_theme(&mut self, requested: &str) -> String {
        let mode = self.host.color_mode();
        self.switch(requested, mode)
    }

    fn switch(&mut self, requested: &str, mode: ColorMode) -> String {
        tracing::info!(theme = requested, "Switching to theme");

        let actual = if requested == AUTO {
            self.resolve_auto_for(mode)
        } else {
            requested.to_string()
        };

        self.loader.apply(&mut self.host, &actual);

        self.host.update_selector(&SelectorState {
            class_name: format!("theme-selector {actual}"),
            current_theme: actual.clone(),
            category: self.registry.category_name(&actual).to_string(),
        });

        if let Err(err) = self.host.save_selection(&self.config.storage_key, requested) {
            tracing::warn!(theme = requested, error = %err, "Failed to save theme selection");
        }

        self.host.set_transition(Some(&self.config.transition));
        self.host
            .schedule(self.config.transition_delay(), Task::ClearTransition);

        let event = ThemeChanged {
            theme: requested.to_string(),
            actual_theme: actual.clone(),
            theme_info: self.registry.get(&actual).cloned(),
        };
        self.subscribers.publish(&event);

        actual
    }

    /// Moves the selector to the next theme, wrapping at the end.
    ///
    /// Returns the new selection, or `None` without a selector control.
    pub fn cycle_theme(&mut self) -> Option<String> {
        let current = self.host.selector_value()?;
        let next = next_after(&self.registry.ids(), &current)?;
        Some(self.select(&next))
    }

    /// Like [`cycle_theme`](Self::cycle_theme), over dark themes only.
    pub fn cycle_dark_themes(&mut self) -> Option<String> {
        let current = self.host.selector_value()?;
        let next = next_after(&self.registry.dark_cycle_ids(), &current)?;
        Some(self.select(&next))
    }

    /// Selects a uniformly random concrete theme.
    pub fn random_theme(&mut self) -> Option<String> {
        self.random_theme_with(&mut rand::rng())
    }

    pub fn random_theme_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        self.host.selector_value()?;
        let pick = self.registry.concrete_ids().choose(rng)?.to_string();
        Some(self.select(&pick))
    }

    fn select(&mut self, theme: &str) -> String {
        self.host.set_selector_value(theme);
        self.toggle_theme(theme);
        theme.to_string()
    }

    /// Shows `theme` for the configured preview length, then switches back.
    pub fn preview_theme(&mut self, theme: &str) {
        let duration = self.config.preview_duration();
        self.preview_theme_for(theme, duration);
    }

    /// Shows `theme` for `duration`, then switches back to the selection
    /// stored before the preview began (`auto` when none was).
    ///
    /// Starting a preview while another is pending supersedes it: the
    /// earlier revert becomes a no-op. While the stored selection is still
    /// the one the earlier preview applied, the new preview inherits its
    /// restore target, so chained previews end on the user's own
    /// selection. A choice stored since then is restored instead.
    pub fn preview_theme_for(&mut self, theme: &str, duration: Duration) {
        let saved = self.persisted_selection();
        let restore = match self.preview.take() {
            Some(pending) => {
                tracing::debug!(
                    generation = pending.generation,
                    "Superseding pending theme preview"
                );
                if saved.as_deref() == Some(pending.applied.as_str()) {
                    pending.restore
                } else {
                    saved.unwrap_or_else(|| AUTO.to_string())
                }
            }
            None => saved.unwrap_or_else(|| AUTO.to_string()),
        };

        self.preview_generation += 1;
        let generation = self.preview_generation;

        tracing::info!(theme, restore = %restore, ?duration, "Previewing theme");
        self.toggle_theme(theme);
        self.host
            .schedule(duration, Task::RevertPreview { generation });
        self.preview = Some(PendingPreview {
            generation,
            applied: theme.to_string(),
            restore,
        });
    }

    /// Whether a preview revert is pending.
    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    /// Runs a task whose timer expired.
    pub fn run_task(&mut self, task: Task) {
        match task {
            Task::ClearTransition => self.host.set_transition(None),
            Task::RevertPreview { generation } => match self.preview.take() {
                Some(pending) if pending.generation == generation => {
                    self.toggle_theme(&pending.restore);
                }
                other => {
                    tracing::debug!(generation, "Ignoring superseded preview revert");
                    self.preview = other;
                }
            },
        }
    }

    /// Re-applies `auto` after the system color scheme changed, if the user
    /// follows the system.
    pub fn color_scheme_changed(&mut self, mode: ColorMode) {
        let saved = self.persisted_selection();
        if saved.as_deref().is_some_and(|s| s != AUTO) {
            let target = self.resolve_auto_for(mode);
            tracing::info!(
                theme = %target,
                saved = ?saved,
                "System theme changed, auto theme now using {target}; keeping saved theme"
            );
            return;
        }
        let actual = self.switch(AUTO, mode);
        tracing::info!(theme = %actual, "System theme changed, auto theme now using {actual}");
    }

    /// Runs the shortcut bound to `event`, if any.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        match self.shortcuts.resolve(event) {
            Some(shortcut) => {
                match shortcut {
                    Shortcut::CycleAll => self.cycle_theme(),
                    Shortcut::CycleDark => self.cycle_dark_themes(),
                };
                KeyOutcome::Handled(shortcut)
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Reports how a stylesheet fetch for `theme` ended.
    ///
    /// Only logs: a failed theme leaves the page on its built-in styles and
    /// is not retried.
    pub fn stylesheet_settled(&self, theme: &str, outcome: LoadOutcome) {
        let name = self.registry.display_name(theme);
        match outcome {
            LoadOutcome::Loaded => tracing::info!(theme, "{name} theme loaded successfully"),
            LoadOutcome::Failed => tracing::error!(theme, "Failed to load {name} theme"),
        }
    }
}

impl ThemeController<MemoryHost> {
    /// Moves the host clock forward by `by`, delivering pending stylesheet
    /// results and every timer that falls due, in order.
    pub fn advance(&mut self, by: Duration) {
        let until = self.host.now() + by;
        loop {
            while let Some((link, outcome)) = self.host.take_settled_load() {
                self.stylesheet_settled(&link.theme, outcome);
            }
            match self.host.take_due(until) {
                Some(task) => self.run_task(task),
                None => break,
            }
        }
        self.host.set_now(until);
    }
}

/// Index after `current` in `ids`, wrapping; unknown `current` starts at 0.
fn next_after(ids: &[&str], current: &str) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    let next = match ids.iter().position(|id| *id == current) {
        Some(index) => (index + 1) % ids.len(),
        None => 0,
    };
    Some(ids[next].to_string())
}
