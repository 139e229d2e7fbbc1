/// How the viewport should move when a scroll is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn reset() -> Self {
        Self {
            top: 0.0,
            behavior: ScrollBehavior::Instant,
        }
    }

    pub fn to_top() -> Self {
        Self {
            top: 0.0,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Tracks the last seen route path and the scroll-to-top visibility signal.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollWatcher {
    threshold: f64,
    last_path: Option<String>,
    visible: bool,
}

impl ScrollWatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_path: None,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Record a vertical offset. Returns the new signal only when it flips.
    pub fn observe_offset(&mut self, offset_y: f64) -> Option<bool> {
        let visible = offset_y > self.threshold;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }

    /// Record the current route path (without query string). The first path
    /// seen and every later change ask for an instant reset to the top.
    pub fn observe_path(&mut self, path: &str) -> Option<ScrollRequest> {
        if self.last_path.as_deref() == Some(path) {
            return None;
        }
        self.last_path = Some(path.to_string());
        Some(ScrollRequest::reset())
    }

    pub fn scroll_to_top(&self) -> ScrollRequest {
        ScrollRequest::to_top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let mut watcher = ScrollWatcher::new(300.0);
        assert_eq!(watcher.observe_offset(0.0), None);
        assert_eq!(watcher.observe_offset(300.0), None);
        assert!(!watcher.is_visible());

        assert_eq!(watcher.observe_offset(300.5), Some(true));
        assert!(watcher.is_visible());
        assert_eq!(watcher.observe_offset(1200.0), None);

        assert_eq!(watcher.observe_offset(300.0), Some(false));
        assert!(!watcher.is_visible());
    }

    #[test]
    fn test_signal_matches_offset_for_any_sequence() {
        let mut watcher = ScrollWatcher::new(300.0);
        for offset in [10.0, 301.0, 299.0, 300.0, 5000.0, 0.0, 301.0] {
            watcher.observe_offset(offset);
            assert_eq!(watcher.is_visible(), offset > 300.0);
        }
    }

    #[test]
    fn test_first_path_resets() {
        let mut watcher = ScrollWatcher::new(300.0);
        assert_eq!(watcher.observe_path("/"), Some(ScrollRequest::reset()));
    }

    #[test]
    fn test_each_path_change_resets_once() {
        let mut watcher = ScrollWatcher::new(300.0);
        watcher.observe_path("/");

        assert_eq!(watcher.observe_path("/nailcare"), Some(ScrollRequest::reset()));
        assert_eq!(watcher.observe_path("/nailcare"), None);
        assert_eq!(watcher.observe_path("/search"), Some(ScrollRequest::reset()));
        // a new query on the same path reaches the watcher as the same path
        assert_eq!(watcher.observe_path("/search"), None);
        assert_eq!(watcher.observe_path("/"), Some(ScrollRequest::reset()));
    }

    #[test]
    fn test_reset_is_instant_and_top_is_smooth() {
        let watcher = ScrollWatcher::new(300.0);
        assert_eq!(ScrollRequest::reset().behavior, ScrollBehavior::Instant);
        let request = watcher.scroll_to_top();
        assert_eq!(request.top, 0.0);
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
    }
}
