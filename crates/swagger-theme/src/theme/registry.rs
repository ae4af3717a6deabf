//! Ordered theme registry.
//!
//! The registry is a read-only table from theme id to [`ThemeDescriptor`].
//! Insertion order is significant: cycling walks the ids in the order they
//! were added, so [`ThemeRegistry::builtin`] lists themes exactly as the
//! selector presents them.

use once_cell::sync::Lazy;
use unicode_width::UnicodeWidthStr;

use super::descriptor::{Category, ThemeDescriptor};

/// The virtual selection that follows the host's dark-mode preference.
pub const AUTO: &str = "auto";

/// The default theme. It has no stylesheet of its own.
pub const CLASSIC: &str = "classic";

/// The theme `auto` resolves to when the host prefers dark.
pub const DARK: &str = "dark";

static BUILTIN: Lazy<ThemeRegistry> = Lazy::new(|| {
    use Category::*;

    ThemeRegistry::new()
        .add(AUTO, ThemeDescriptor::new("Auto", "🌓", System))
        .add(CLASSIC, ThemeDescriptor::new("Classic", "🏛️", Light))
        .add(DARK, ThemeDescriptor::new("Dark", "🌙", Dark))
        .add("dark-monokai", ThemeDescriptor::new("Dark Monokai", "🌚", Dark))
        .add("dracula", ThemeDescriptor::new("Dracula", "🧛", Dark))
        .add("feeling-blue", ThemeDescriptor::new("Feeling Blue", "💙", Colored))
        .add("flattop", ThemeDescriptor::new("Flattop", "📱", Modern))
        .add("gruvbox", ThemeDescriptor::new("Gruvbox", "🏔️", Dark))
        .add("material", ThemeDescriptor::new("Material", "🎨", Modern))
        .add("monokai", ThemeDescriptor::new("Monokai", "👨‍💻", Dark))
        .add("muted", ThemeDescriptor::new("Muted", "🔇", Subtle))
        .add("newspaper", ThemeDescriptor::new("Newspaper", "📰", Classic))
        .add("nord-dark", ThemeDescriptor::new("Nord Dark", "🏔️", Dark))
        .add("one-dark", ThemeDescriptor::new("One Dark", "⚡", Dark))
        .add("outline", ThemeDescriptor::new("Outline", "📝", Minimal))
});

/// An ordered table of themes.
///
/// # Example
///
/// ```rust
/// use swagger_theme::{Category, ThemeRegistry};
///
/// let registry = ThemeRegistry::builtin();
/// assert_eq!(registry.len(), 15);
/// assert_eq!(registry.get("dracula").unwrap().category, Category::Dark);
/// assert_eq!(registry.ids_by_category(Category::Modern), vec!["flattop", "material"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    entries: Vec<(String, ThemeDescriptor)>,
}

impl ThemeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Swagger UI theme table.
    pub fn builtin() -> &'static ThemeRegistry {
        &BUILTIN
    }

    /// Adds a theme, returning the registry for chaining.
    ///
    /// Re-adding an existing id replaces its descriptor but keeps its
    /// original position.
    pub fn add(mut self, id: &str, descriptor: ThemeDescriptor) -> Self {
        match self.entries.iter_mut().find(|(existing, _)| existing == id) {
            Some((_, slot)) => *slot = descriptor,
            None => self.entries.push((id.to_string(), descriptor)),
        }
        self
    }

    /// Looks up a theme by id.
    pub fn get(&self, id: &str) -> Option<&ThemeDescriptor> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, descriptor)| descriptor)
    }

    /// Whether `id` is a registered theme.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Index of `id` in registry order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == id)
    }

    /// All ids, in registry order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// Ids and descriptors, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeDescriptor)> {
        self.entries.iter().map(|(id, d)| (id.as_str(), d))
    }

    /// Ids whose category is `category`, in registry order.
    pub fn ids_by_category(&self, category: Category) -> Vec<&str> {
        self.iter()
            .filter(|(_, d)| d.category == category)
            .map(|(id, _)| id)
            .collect()
    }

    /// Ids visited by the dark-only cycle: every dark theme plus the
    /// literal [`DARK`] id.
    pub fn dark_cycle_ids(&self) -> Vec<&str> {
        self.iter()
            .filter(|(id, d)| d.category == Category::Dark || *id == DARK)
            .map(|(id, _)| id)
            .collect()
    }

    /// Ids eligible for a random pick: everything except [`AUTO`].
    pub fn concrete_ids(&self) -> Vec<&str> {
        self.iter().map(|(id, _)| id).filter(|id| *id != AUTO).collect()
    }

    /// Distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for (_, d) in self.iter() {
            if !seen.contains(&d.category) {
                seen.push(d.category);
            }
        }
        seen
    }

    /// Friendly name for `id`, or the id itself when it is not registered.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |d| d.name.as_str())
    }

    /// Category attribute value for `id`; `"unknown"` when not registered.
    pub fn category_name(&self, id: &str) -> &'static str {
        self.get(id).map_or("unknown", |d| d.category.as_str())
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no themes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A column-aligned listing of every theme.
    ///
    /// Columns are padded by display width, so emoji that occupy two
    /// terminal cells line up with single-width text.
    pub fn summary(&self) -> String {
        let label_width = self
            .iter()
            .map(|(_, d)| d.label().width())
            .max()
            .unwrap_or(0);
        let id_width = self.iter().map(|(id, _)| id.width()).max().unwrap_or(0);

        let mut out = String::new();
        for (id, d) in self.iter() {
            let label = d.label();
            let label_pad = label_width - label.width();
            let id_pad = id_width - id.width();
            out.push_str(&label);
            out.push_str(&" ".repeat(label_pad + 2));
            out.push_str(id);
            out.push_str(&" ".repeat(id_pad + 2));
            out.push_str(d.category.as_str());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_and_size() {
        let registry = ThemeRegistry::builtin();
        let ids = registry.ids();
        assert_eq!(ids.len(), 15);
        assert_eq!(ids[0], AUTO);
        assert_eq!(ids[1], CLASSIC);
        assert_eq!(ids[14], "outline");
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let registry = ThemeRegistry::builtin();
        let gruvbox = registry.get("gruvbox").unwrap();
        assert_eq!(gruvbox.name, "Gruvbox");
        assert_eq!(gruvbox.category, Category::Dark);
        assert!(registry.get("solarized").is_none());
    }

    #[test]
    fn test_ids_by_category_preserves_order() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(
            registry.ids_by_category(Category::Dark),
            vec![
                "dark",
                "dark-monokai",
                "dracula",
                "gruvbox",
                "monokai",
                "nord-dark",
                "one-dark"
            ]
        );
        assert_eq!(registry.ids_by_category(Category::System), vec!["auto"]);
    }

    #[test]
    fn test_dark_cycle_matches_dark_category() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(
            registry.dark_cycle_ids(),
            registry.ids_by_category(Category::Dark)
        );
    }

    #[test]
    fn test_dark_cycle_includes_dark_key_regardless_of_category() {
        let registry = ThemeRegistry::new()
            .add("dark", ThemeDescriptor::new("Dark", "🌙", Category::Modern))
            .add("night", ThemeDescriptor::new("Night", "🌃", Category::Dark));
        assert_eq!(registry.dark_cycle_ids(), vec!["dark", "night"]);
    }

    #[test]
    fn test_concrete_ids_exclude_auto() {
        let registry = ThemeRegistry::builtin();
        let ids = registry.concrete_ids();
        assert_eq!(ids.len(), 14);
        assert!(!ids.contains(&AUTO));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(
            registry.categories(),
            vec![
                Category::System,
                Category::Light,
                Category::Dark,
                Category::Colored,
                Category::Modern,
                Category::Subtle,
                Category::Classic,
                Category::Minimal,
            ]
        );
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.display_name("one-dark"), "One Dark");
        assert_eq!(registry.display_name("neon"), "neon");
        assert_eq!(registry.category_name("neon"), "unknown");
    }

    #[test]
    fn test_add_replaces_in_place() {
        let registry = ThemeRegistry::new()
            .add("a", ThemeDescriptor::new("A", "1", Category::Light))
            .add("b", ThemeDescriptor::new("B", "2", Category::Dark))
            .add("a", ThemeDescriptor::new("A2", "3", Category::Subtle));
        assert_eq!(registry.ids(), vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().name, "A2");
    }

    #[test]
    fn test_summary_lists_every_theme() {
        let registry = ThemeRegistry::builtin();
        let summary = registry.summary();
        assert_eq!(summary.lines().count(), registry.len());
        assert!(summary.contains("🧛 Dracula"));
        assert!(summary.lines().all(|line| !line.ends_with(' ')));
    }

    #[test]
    fn test_summary_aligns_id_column() {
        let registry = ThemeRegistry::new()
            .add("x", ThemeDescriptor::new("Wide", "🌙", Category::Dark))
            .add("y", ThemeDescriptor::new("Narrow", "*", Category::Light));
        let summary = registry.summary();
        let columns: Vec<usize> = summary
            .lines()
            .map(|line| {
                let prefix = &line[..line.find("  x").or(line.find("  y")).unwrap()];
                prefix.width()
            })
            .collect();
        assert_eq!(columns[0], columns[1]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ThemeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.ids().is_empty());
        assert_eq!(registry.summary(), "");
    }
}
