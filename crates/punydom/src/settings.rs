//! Environment settings

use std::fmt;

use puny_dom::SelectorMatcher;
use serde::{Deserialize, Serialize};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Options a [`PunyDom`](crate::PunyDom) environment is created with
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Initial `window.location`
    #[serde(rename = "baseURL", default = "default_base_url")]
    pub base_url: String,

    /// `navigator.userAgent` override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// `navigator.platform` override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Selector engine backing `querySelector`/`querySelectorAll`
    #[serde(skip)]
    pub query_selector_all: Option<SelectorMatcher>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Settings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_selector_matcher(mut self, matcher: SelectorMatcher) -> Self {
        self.query_selector_all = Some(matcher);
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: None,
            platform: None,
            query_selector_all: None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("platform", &self.platform)
            .field("query_selector_all", &self.query_selector_all.is_some())
            .finish()
    }
}
