//! Parameter type for the `search` tool and its query-string marshaling

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Page requested when the caller does not pick one
pub const DEFAULT_PAGE: i64 = 1;

/// Response format requested when the caller does not pick one
pub const DEFAULT_FORMAT: &str = "json";

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

/// Arguments of the `search` tool
///
/// `page` and `format` are always sent, falling back to their defaults.
/// Every other field left as `None` is omitted from the outbound request;
/// `Some("")` and `Some(0)` are real values and are sent as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// The search query
    pub q: String,
    /// Comma-separated list of active search categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    /// Comma-separated list of active search engines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engines: Option<String>,
    /// Code of the search language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Search page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Time range of search results: day, month or year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,
    /// Output format of the results: json, csv, rss or html
    #[serde(default = "default_format")]
    pub format: String,
    /// Open search results on new tab (0 or 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_on_new_tab: Option<i64>,
    /// Proxy image results through SearXNG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_proxy: Option<bool>,
    /// Service which completes words as you type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    /// Filter search results of engines which support safe search (0, 1 or 2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safesearch: Option<i64>,
    /// Theme of the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Comma-separated list of enabled plugins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_plugins: Option<String>,
    /// Comma-separated list of disabled plugins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_plugins: Option<String>,
    /// Comma-separated list of enabled engines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_engines: Option<String>,
    /// Comma-separated list of disabled engines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_engines: Option<String>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            q: String::new(),
            categories: None,
            engines: None,
            language: None,
            page: DEFAULT_PAGE,
            time_range: None,
            format: default_format(),
            results_on_new_tab: None,
            image_proxy: None,
            autocomplete: None,
            safesearch: None,
            theme: None,
            enabled_plugins: None,
            disabled_plugins: None,
            enabled_engines: None,
            disabled_engines: None,
        }
    }
}

impl SearchParams {
    /// Parameters for `q` with defaults and every optional field absent
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    /// Build the outbound query pairs
    ///
    /// `q`, `page` and `format` always come first, in that order, followed by
    /// whichever optional fields are present in declaration order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("q", self.q.clone()),
            ("page", self.page.to_string()),
            ("format", self.format.clone()),
        ];

        let optional = [
            ("categories", self.categories.clone()),
            ("engines", self.engines.clone()),
            ("language", self.language.clone()),
            ("time_range", self.time_range.clone()),
            ("results_on_new_tab", self.results_on_new_tab.map(|v| v.to_string())),
            // bool renders as lowercase `true` / `false`
            ("image_proxy", self.image_proxy.map(|v| v.to_string())),
            ("autocomplete", self.autocomplete.clone()),
            ("safesearch", self.safesearch.map(|v| v.to_string())),
            ("theme", self.theme.clone()),
            ("enabled_plugins", self.enabled_plugins.clone()),
            ("disabled_plugins", self.disabled_plugins.clone()),
            ("enabled_engines", self.enabled_engines.clone()),
            ("disabled_engines", self.disabled_engines.clone()),
        ];

        query.extend(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v))),
        );
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(query: &[(&'static str, String)]) -> Vec<&'static str> {
        query.iter().map(|(k, _)| *k).collect()
    }

    fn value<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_only_required_fields() {
        let query = SearchParams::new("cats").to_query();
        assert_eq!(
            query,
            vec![
                ("q", "cats".to_string()),
                ("page", "1".to_string()),
                ("format", "json".to_string()),
            ]
        );
    }

    #[test]
    fn test_concrete_scenario_order() {
        let params = SearchParams {
            page: 2,
            categories: Some("images".to_string()),
            ..SearchParams::new("cats")
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("q", "cats".to_string()),
                ("page", "2".to_string()),
                ("format", "json".to_string()),
                ("categories", "images".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_fields_present_in_order() {
        let params = SearchParams {
            q: "rust".to_string(),
            categories: Some("general".to_string()),
            engines: Some("duckduckgo".to_string()),
            language: Some("en".to_string()),
            page: 3,
            time_range: Some("month".to_string()),
            format: "rss".to_string(),
            results_on_new_tab: Some(1),
            image_proxy: Some(true),
            autocomplete: Some("google".to_string()),
            safesearch: Some(2),
            theme: Some("simple".to_string()),
            enabled_plugins: Some("Hash_plugin".to_string()),
            disabled_plugins: Some("Tracker_URL_remover".to_string()),
            enabled_engines: Some("wikipedia".to_string()),
            disabled_engines: Some("bing".to_string()),
        };

        let query = params.to_query();
        assert_eq!(
            keys(&query),
            vec![
                "q",
                "page",
                "format",
                "categories",
                "engines",
                "language",
                "time_range",
                "results_on_new_tab",
                "image_proxy",
                "autocomplete",
                "safesearch",
                "theme",
                "enabled_plugins",
                "disabled_plugins",
                "enabled_engines",
                "disabled_engines",
            ]
        );
        assert_eq!(value(&query, "page"), Some("3"));
        assert_eq!(value(&query, "format"), Some("rss"));
        assert_eq!(value(&query, "results_on_new_tab"), Some("1"));
        assert_eq!(value(&query, "safesearch"), Some("2"));
    }

    #[test]
    fn test_image_proxy_lowercase() {
        let on = SearchParams {
            image_proxy: Some(true),
            ..SearchParams::new("q")
        };
        let off = SearchParams {
            image_proxy: Some(false),
            ..SearchParams::new("q")
        };
        assert_eq!(value(&on.to_query(), "image_proxy"), Some("true"));
        assert_eq!(value(&off.to_query(), "image_proxy"), Some("false"));
    }

    #[test]
    fn test_empty_and_zero_are_not_absent() {
        let params = SearchParams {
            language: Some(String::new()),
            safesearch: Some(0),
            ..SearchParams::new("q")
        };
        let query = params.to_query();
        assert_eq!(value(&query, "language"), Some(""));
        assert_eq!(value(&query, "safesearch"), Some("0"));
        assert_eq!(value(&query, "theme"), None);
    }

    #[test]
    fn test_negative_page_forwarded() {
        let params = SearchParams {
            page: -4,
            ..SearchParams::new("q")
        };
        assert_eq!(value(&params.to_query(), "page"), Some("-4"));
    }

    #[test]
    fn test_deserialize_null_is_absent() {
        let params: SearchParams = serde_json::from_value(serde_json::json!({
            "q": "weather",
            "engines": null,
            "image_proxy": false
        }))
        .unwrap();

        assert_eq!(params.engines, None);
        assert_eq!(params.image_proxy, Some(false));
        assert_eq!(params.page, DEFAULT_PAGE);
        assert_eq!(params.format, DEFAULT_FORMAT);
        assert_eq!(keys(&params.to_query()), vec!["q", "page", "format", "image_proxy"]);
    }

    #[test]
    fn test_deserialize_explicit_page_and_format() {
        let params: SearchParams = serde_json::from_value(serde_json::json!({
            "q": "weather",
            "page": 5,
            "format": "csv"
        }))
        .unwrap();

        assert_eq!(params.page, 5);
        assert_eq!(params.format, "csv");
    }

    #[test]
    fn test_schema_advertises_defaults() {
        let schema = serde_json::to_value(schemars::schema_for!(SearchParams)).unwrap();
        let properties = &schema["properties"];

        assert_eq!(properties["page"]["default"], serde_json::json!(1));
        assert_eq!(properties["page"]["type"], serde_json::json!("integer"));
        assert_eq!(properties["format"]["default"], serde_json::json!("json"));
        assert_eq!(properties["format"]["type"], serde_json::json!("string"));
    }

    #[test]
    fn test_deserialize_requires_q() {
        let result: Result<SearchParams, _> =
            serde_json::from_value(serde_json::json!({ "page": 2 }));
        assert!(result.is_err());
    }
}
