//! Backend location.
//!
//! The base URL defaults to the page's own origin. A page can point the app
//! elsewhere by defining `window.ALGO_SCREENER_API_BASE` before the bundle
//! loads.

pub const API_BASE_GLOBAL: &str = "ALGO_SCREENER_API_BASE";

pub const FILTERS_PATH: &str = "/filters";
pub const TICKER_SCORES_PATH: &str = "/ticker-scores";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    #[cfg(feature = "gui")]
    pub fn from_window() -> Self {
        use wasm_bindgen::JsValue;

        let configured = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(API_BASE_GLOBAL))
            .ok()
            .and_then(|v| v.as_string());
        match configured {
            Some(base) => {
                log::info!("using api base {}", base);
                Self::new(base)
            }
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint(FILTERS_PATH), "/filters");
        assert_eq!(config.endpoint(TICKER_SCORES_PATH), "/ticker-scores");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:5000/api/");
        assert_eq!(config.base_url(), "http://localhost:5000/api");
        assert_eq!(config.endpoint("/filters"), "http://localhost:5000/api/filters");
        assert_eq!(config.endpoint("filters"), "http://localhost:5000/api/filters");
    }
}
