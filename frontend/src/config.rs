use leptos::logging::warn;
use leptos::*;
use serde::Deserialize;

/// Name of the `<meta>` element whose `content` holds the JSON configuration.
pub const CONFIG_META_NAME: &str = "announcements-config";

/// Runtime configuration of the announcements frontend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnnouncementsConfig {
    pub api_base: String,
    pub mount_path: String,
    pub catalog_path: String,
    pub page_title: String,
    pub page_subtitle: Option<String>,
    /// LocalStorage key holding the bearer token
    pub token_key: String,
    /// Success alerts dismiss themselves after this many milliseconds
    pub alert_timeout_ms: u32,
    pub language: String,
}

impl Default for AnnouncementsConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            mount_path: "/announcements".to_string(),
            catalog_path: "/catalog".to_string(),
            page_title: "Announcements".to_string(),
            page_subtitle: None,
            token_key: "auth_token".to_string(),
            alert_timeout_ms: 5000,
            language: "en".to_string(),
        }
    }
}

impl AnnouncementsConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the configuration from the page, falling back to defaults.
    pub fn load() -> Self {
        let Some(json) = read_config_meta() else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!("Invalid {} content, using defaults: {}", CONFIG_META_NAME, e);
                Self::default()
            }
        }
    }
}

fn read_config_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}

pub fn provide_config(config: AnnouncementsConfig) {
    provide_context(config);
}

pub fn use_config() -> AnnouncementsConfig {
    expect_context::<AnnouncementsConfig>()
}
