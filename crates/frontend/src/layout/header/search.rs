use contracts::navigation::NavigationIntent;

/// Text typed into the search box but not yet submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchDraft {
    text: String,
}

impl SearchDraft {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Turns a submitted draft into a navigation to the search results route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchDispatcher {
    route: String,
    param: String,
}

impl SearchDispatcher {
    pub fn new(route: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            param: param.into(),
        }
    }

    /// Blank input is ignored and leaves the draft as it was. Otherwise the
    /// trimmed text becomes the query and the draft is cleared.
    pub fn submit(&self, draft: &mut SearchDraft) -> Option<NavigationIntent> {
        let query = draft.as_str().trim();
        if query.is_empty() {
            return None;
        }
        let intent = NavigationIntent::to(self.route.as_str()).with_query(self.param.as_str(), query);
        draft.clear();
        log::debug!("search submitted: {}", intent.href());
        Some(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> SearchDispatcher {
        SearchDispatcher::new("/search", "q")
    }

    fn draft(text: &str) -> SearchDraft {
        let mut draft = SearchDraft::default();
        draft.set(text);
        draft
    }

    #[test]
    fn test_empty_submit_is_noop() {
        let mut empty = draft("");
        assert_eq!(dispatcher().submit(&mut empty), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_whitespace_submit_keeps_draft() {
        let mut blank = draft("   ");
        assert_eq!(dispatcher().submit(&mut blank), None);
        assert_eq!(blank.as_str(), "   ");
    }

    #[test]
    fn test_submit_trims_and_clears() {
        let mut braids = draft("  braids  ");
        let intent = dispatcher().submit(&mut braids).unwrap();
        assert_eq!(intent.path, "/search");
        assert_eq!(intent.query, vec![("q".to_string(), "braids".to_string())]);
        assert_eq!(intent.href(), "/search?q=braids");
        assert!(braids.is_empty());
    }

    #[test]
    fn test_submit_percent_encodes_query() {
        let mut text = draft(" gel & tips ");
        let intent = dispatcher().submit(&mut text).unwrap();
        assert_eq!(intent.href(), "/search?q=gel%20%26%20tips");
    }
}
