use serde::{Deserialize, Serialize};

/// A navigation the UI wants to perform, not yet handed to the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIntent {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl NavigationIntent {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Path plus query string, with every key and value percent-encoded.
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_without_query() {
        assert_eq!(NavigationIntent::to("/login").href(), "/login");
    }

    #[test]
    fn test_href_encodes_values() {
        let intent = NavigationIntent::to("/search").with_query("q", "braids");
        assert_eq!(intent.href(), "/search?q=braids");

        let intent = NavigationIntent::to("/search").with_query("q", "nail & gel/tips");
        assert_eq!(intent.href(), "/search?q=nail%20%26%20gel%2Ftips");
    }
}
