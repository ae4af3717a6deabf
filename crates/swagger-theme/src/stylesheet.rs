//! The single theme stylesheet attached to the document.

use std::fmt;

use crate::host::Host;

/// A `<link rel="stylesheet">` for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StylesheetLink {
    /// Theme the stylesheet belongs to.
    pub theme: String,
    /// Element id, `theme-<id>-stylesheet`.
    pub element_id: String,
    /// Resource location, `<base>/<id>.css`.
    pub href: String,
}

impl StylesheetLink {
    /// Builds the link for `theme` under `base`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swagger_theme::StylesheetLink;
    ///
    /// let link = StylesheetLink::for_theme("./themes", "dracula");
    /// assert_eq!(link.href, "./themes/dracula.css");
    /// assert_eq!(link.element_id, "theme-dracula-stylesheet");
    /// ```
    pub fn for_theme(base: &str, theme: &str) -> Self {
        Self {
            theme: theme.to_string(),
            element_id: format!("theme-{theme}-stylesheet"),
            href: format!("{}/{theme}.css", base.trim_end_matches('/')),
        }
    }
}

/// How a stylesheet fetch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadOutcome::Loaded => f.write_str("loaded"),
            LoadOutcome::Failed => f.write_str("failed"),
        }
    }
}

/// Keeps zero or one theme stylesheet attached.
///
/// The loader owns the reference to the attached link. Every
/// [`apply`](Self::apply) removes it before attaching the next one, so the
/// document never holds two theme stylesheets.
#[derive(Debug, Clone)]
pub struct StylesheetLoader {
    base: String,
    default_theme: String,
    current: Option<StylesheetLink>,
}

impl StylesheetLoader {
    /// `default_theme` is styled by the page itself and gets no link.
    pub fn new(base: impl Into<String>, default_theme: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            default_theme: default_theme.into(),
            current: None,
        }
    }

    /// The attached link, if any.
    pub fn current(&self) -> Option<&StylesheetLink> {
        self.current.as_ref()
    }

    /// Swaps the attached stylesheet for the one belonging to `theme`.
    ///
    /// The fetch itself is the host's business; its result comes back later
    /// through [`ThemeController::stylesheet_settled`](crate::ThemeController::stylesheet_settled).
    /// Ids need not be registered: an unknown id still gets a link at the
    /// conventional path.
    pub fn apply<H: Host + ?Sized>(&mut self, host: &mut H, theme: &str) {
        tracing::debug!(theme, "Loading theme");
        self.remove(host);

        if theme == self.default_theme {
            tracing::debug!(theme, "Default theme loaded (built-in styling)");
            return;
        }

        let link = StylesheetLink::for_theme(&self.base, theme);
        host.attach_stylesheet(&link);
        self.current = Some(link);
    }

    /// Detaches the current stylesheet. Returns whether one was attached.
    pub fn remove<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        match self.current.take() {
            Some(link) => {
                let removed = host.remove_stylesheet(&link);
                if removed {
                    tracing::debug!(href = %link.href, "Current theme removed");
                }
                removed
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    #[test]
    fn test_link_trims_trailing_slash() {
        let link = StylesheetLink::for_theme("/static/themes/", "muted");
        assert_eq!(link.href, "/static/themes/muted.css");
    }

    #[test]
    fn test_apply_attaches_one_link() {
        let mut host = MemoryHost::new();
        let mut loader = StylesheetLoader::new("./themes", "classic");

        loader.apply(&mut host, "dracula");
        loader.apply(&mut host, "monokai");

        assert_eq!(host.stylesheet_hrefs(), vec!["./themes/monokai.css"]);
        assert_eq!(loader.current().unwrap().theme, "monokai");
    }

    #[test]
    fn test_apply_default_leaves_none() {
        let mut host = MemoryHost::new();
        let mut loader = StylesheetLoader::new("./themes", "classic");

        loader.apply(&mut host, "gruvbox");
        loader.apply(&mut host, "classic");

        assert!(host.stylesheet_hrefs().is_empty());
        assert!(loader.current().is_none());
    }

    #[test]
    fn test_apply_unknown_theme_still_attaches() {
        let mut host = MemoryHost::new();
        let mut loader = StylesheetLoader::new("./themes", "classic");

        loader.apply(&mut host, "solarized");

        assert_eq!(host.stylesheet_hrefs(), vec!["./themes/solarized.css"]);
    }

    #[test]
    fn test_remove_reports_attachment() {
        let mut host = MemoryHost::new();
        let mut loader = StylesheetLoader::new("./themes", "classic");

        assert!(!loader.remove(&mut host));
        loader.apply(&mut host, "dark");
        assert!(loader.remove(&mut host));
        assert!(host.stylesheet_hrefs().is_empty());
    }
}
