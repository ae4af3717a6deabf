//! Theme registry and light/dark resolution.
//!
//! This module provides:
//!
//! - [`ThemeDescriptor`]: Display metadata for one theme
//! - [`Category`]: The grouping a theme belongs to
//! - [`ThemeRegistry`]: An ordered, read-only table of themes
//! - [`ColorMode`] and [`ColorSchemeSource`]: Host dark-mode preference
//!
//! The built-in table mirrors the stylesheets shipped under `themes/`.

mod adaptive;
mod descriptor;
mod registry;

pub use adaptive::{resolve_auto, ColorMode, ColorSchemeSource, OsColorScheme};
pub use descriptor::{Category, ParseCategoryError, ThemeDescriptor};
pub use registry::{ThemeRegistry, AUTO, CLASSIC, DARK};
