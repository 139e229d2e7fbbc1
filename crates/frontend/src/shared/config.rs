use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShellConfig {
    pub scroll: ScrollConfig,
    pub routes: RoutesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScrollConfig {
    /// The scroll-to-top control shows once the offset is strictly above this.
    pub top_button_threshold: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RoutesConfig {
    pub home: String,
    pub search: String,
    pub search_param: String,
    pub login: String,
    pub cart: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[scroll]
top_button_threshold = 300.0

[routes]
home = "/"
search = "/search"
search_param = "q"
login = "/login"
cart = "/cart"
"#;

impl ShellConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse the embedded configuration, falling back to the built-in values
    /// if it does not parse.
    pub fn load() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Embedded shell config is invalid, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig {
                top_button_threshold: 300.0,
            },
            routes: RoutesConfig {
                home: "/".to_string(),
                search: "/search".to_string(),
                search_param: "q".to_string(),
                login: "/login".to_string(),
                cart: "/cart".to_string(),
            },
        }
    }
}

pub fn use_shell_config() -> ShellConfig {
    use_context::<ShellConfig>().expect("ShellConfig context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ShellConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.scroll.top_button_threshold, 300.0);
        assert_eq!(config.routes.search, "/search");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(ShellConfig::from_toml("[scroll]\ntop_button_threshold = \"high\"").is_err());
        assert!(ShellConfig::from_toml("").is_err());
    }
}
