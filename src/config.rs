//! App Configuration
//!
//! Defaults can be overridden by a JSON block in the host page:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   {"storage_key": "shopping", "notice_ms": 6000}
//! </script>
//! ```

use serde::Deserialize;

use crate::error::AppResult;

/// Id of the optional config element in `index.html`
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// localStorage key holding the serialized state
    pub storage_key: String,
    /// Endpoint returning one random sample todo
    pub import_url: String,
    /// How long a notice stays visible
    pub notice_ms: u32,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Lines kept by the in-page activity log
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "todo-app".to_string(),
            import_url: "https://dummyjson.com/todos/random".to_string(),
            notice_ms: 4000,
            log_level: "info".to_string(),
            log_capacity: 200,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config element from the page, falling back to defaults.
    /// Runs before the logger exists, so problems go straight to the console.
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("[CONFIG] Ignoring #{}: {}", CONFIG_ELEMENT_ID, e).into());
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Parsed log level, `Info` if unrecognised
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{"storage_key":"shopping","notice_ms":100}"#).unwrap();
        assert_eq!(config.storage_key, "shopping");
        assert_eq!(config.notice_ms, 100);
        assert_eq!(config.import_url, AppConfig::default().import_url);
    }

    #[test]
    fn test_invalid_json() {
        assert!(AppConfig::from_json("[1, 2").is_err());
    }

    #[test]
    fn test_level_filter() {
        let mut config = AppConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
