//! Startup selection.

use crate::theme::{ThemeRegistry, AUTO};

/// Chooses the selection to start with from the persisted value.
///
/// A persisted id is honored only when the registry knows it; anything
/// else, including nothing at all, starts on [`AUTO`].
///
/// # Example
///
/// ```rust
/// use swagger_theme::{initial_selection, ThemeRegistry};
///
/// let registry = ThemeRegistry::builtin();
/// assert_eq!(initial_selection(Some("dracula"), registry), "dracula");
/// assert_eq!(initial_selection(Some("solarized"), registry), "auto");
/// assert_eq!(initial_selection(None, registry), "auto");
/// ```
pub fn initial_selection(persisted: Option<&str>, registry: &ThemeRegistry) -> String {
    match persisted {
        Some(id) if registry.contains(id) => {
            tracing::info!(theme = id, "Using saved theme");
            id.to_string()
        }
        _ => {
            tracing::info!("Using auto theme (system default)");
            AUTO.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_id_is_honored() {
        let registry = ThemeRegistry::builtin();
        for id in registry.ids() {
            assert_eq!(initial_selection(Some(id), registry), id);
        }
    }

    #[test]
    fn test_unknown_and_empty_fall_back_to_auto() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(initial_selection(Some(""), registry), AUTO);
        assert_eq!(initial_selection(Some("Dracula"), registry), AUTO);
        assert_eq!(initial_selection(None, registry), AUTO);
    }
}
