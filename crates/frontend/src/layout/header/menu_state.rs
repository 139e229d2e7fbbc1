use std::collections::HashMap;
use std::fmt;

/// Identifies one dropdown. The same menu entry has a desktop and a mobile
/// instance, and their keys never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropdownKey {
    Desktop(String),
    Mobile(String),
}

impl fmt::Display for DropdownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropdownKey::Desktop(label) => write!(f, "desktop-{}", label),
            DropdownKey::Mobile(label) => write!(f, "mobile-{}", label),
        }
    }
}

/// Expanded flags by dropdown key. Keys appear on first toggle; a missing
/// key reads as collapsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuOpenState {
    states: HashMap<String, bool>,
}

impl MenuOpenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.states.get(key).copied().unwrap_or(false)
    }

    /// Flip one key and return its new value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let expanded = self.states.entry(key.to_string()).or_insert(false);
        *expanded = !*expanded;
        *expanded
    }

    pub fn set(&mut self, key: &str, expanded: bool) {
        self.states.insert(key.to_string(), expanded);
    }

    pub fn collapse_all(&mut self) {
        self.states.values_mut().for_each(|expanded| *expanded = false);
    }
}
