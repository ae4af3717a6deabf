//! `themeChanged` notifications.

use serde::Serialize;

use crate::theme::ThemeDescriptor;

/// Published after every theme switch.
///
/// Serializes to the same detail object page scripts receive:
/// `{"theme": ..., "actualTheme": ..., "themeInfo": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeChanged {
    /// The requested selection, possibly `auto`.
    pub theme: String,
    /// The concrete theme that was applied.
    pub actual_theme: String,
    /// Descriptor of `actual_theme`; `None` for unregistered ids.
    pub theme_info: Option<ThemeDescriptor>,
}

impl ThemeChanged {
    pub const EVENT_NAME: &'static str = "themeChanged";

    /// The event detail as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "theme": self.theme,
            "actualTheme": self.actual_theme,
            "themeInfo": self.theme_info,
        })
    }
}

/// Handle returned by [`Subscribers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ThemeChanged)>;

/// Observers of [`ThemeChanged`], notified in subscription order.
#[derive(Default)]
pub struct Subscribers {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ThemeChanged) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn publish(&mut self, event: &ThemeChanged) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Category;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event() -> ThemeChanged {
        ThemeChanged {
            theme: "auto".to_string(),
            actual_theme: "dark".to_string(),
            theme_info: Some(ThemeDescriptor::new("Dark", "🌙", Category::Dark)),
        }
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = event().to_json();
        assert_eq!(json["theme"], "auto");
        assert_eq!(json["actualTheme"], "dark");
        assert_eq!(json["themeInfo"]["category"], "dark");
        assert_eq!(json, serde_json::to_value(event()).unwrap());
    }

    #[test]
    fn test_json_unknown_theme_info_is_null() {
        let changed = ThemeChanged {
            theme: "neon".to_string(),
            actual_theme: "neon".to_string(),
            theme_info: None,
        };
        assert!(changed.to_json()["themeInfo"].is_null());
    }

    #[test]
    fn test_publish_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::new();
        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            subscribers.subscribe(move |e| seen.borrow_mut().push((tag, e.actual_theme.clone())));
        }

        subscribers.publish(&event());

        assert_eq!(
            *seen.borrow(),
            vec![("first", "dark".to_string()), ("second", "dark".to_string())]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::new();
        let counter = Rc::clone(&count);
        let id = subscribers.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
        subscribers.publish(&event());

        assert_eq!(*count.borrow(), 0);
        assert!(subscribers.is_empty());
    }
}
