//! Cycling properties over the built-in registry.

use std::collections::HashSet;

use proptest::prelude::*;
use swagger_theme::{Category, Host, MemoryHost, ThemeController, ThemeRegistry};

fn controller_at(value: &str) -> ThemeController<MemoryHost> {
    let mut controller = ThemeController::new(MemoryHost::new().with_selector());
    controller.host_mut().set_selector_value(value);
    controller
}

#[test]
fn test_fifteen_cycles_from_auto_return_to_auto() {
    let mut controller = controller_at("auto");
    let mut visited = Vec::new();
    for _ in 0..15 {
        visited.push(controller.cycle_theme().unwrap());
    }
    assert_eq!(visited.last().map(String::as_str), Some("auto"));

    let unique: HashSet<&String> = visited.iter().collect();
    assert_eq!(unique.len(), 15);
}

#[test]
fn test_dark_cycle_visits_only_dark_themes() {
    let registry = ThemeRegistry::builtin();
    let mut controller = controller_at("auto");
    let dark = registry.dark_cycle_ids();

    let mut visited = Vec::new();
    for _ in 0..dark.len() {
        visited.push(controller.cycle_dark_themes().unwrap());
    }

    assert_eq!(visited, dark);
    for id in &visited {
        assert!(id == "dark" || registry.get(id).unwrap().category == Category::Dark);
    }
    assert_eq!(controller.cycle_dark_themes().as_deref(), Some("dark"));
}

proptest! {
    #[test]
    fn prop_full_cycle_visits_every_id_once(start in 0usize..15) {
        let ids = ThemeRegistry::builtin().ids();
        let mut controller = controller_at(ids[start]);

        let mut seen = HashSet::new();
        for _ in 0..ids.len() {
            let next = controller.cycle_theme().unwrap();
            prop_assert!(seen.insert(next));
        }
        prop_assert_eq!(seen.len(), ids.len());
        prop_assert_eq!(controller.host().selector().unwrap().value.as_str(), ids[start]);
    }

    #[test]
    fn prop_dark_cycle_stays_dark(start in 0usize..15, steps in 1usize..30) {
        let registry = ThemeRegistry::builtin();
        let dark = registry.dark_cycle_ids();
        let mut controller = controller_at(registry.ids()[start]);

        for _ in 0..steps {
            let next = controller.cycle_dark_themes().unwrap();
            prop_assert!(dark.contains(&next.as_str()));
        }
    }

    #[test]
    fn prop_unknown_selector_value_cycles_to_first(value in "[a-z]{1,8}-x") {
        let mut controller = controller_at(&value);
        let next = controller.cycle_theme();
        prop_assert_eq!(next.as_deref(), Some("auto"));
    }
}
