//! Backend endpoint configuration.
//!
//! The host server renders the configured URLs into `<meta>` tags in the page
//! shell; the hydrated client reads them back. Missing or blank tags fall back
//! to the built-in defaults, which point the two paths at different hosts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TEXT_ENDPOINT: &str = "https://agentic-ai-project-tqw8.onrender.com/ask";
pub const DEFAULT_VOICE_ENDPOINT: &str = "http://localhost:8000/voice-chat";

/// `<meta name>` carrying the text endpoint.
pub const TEXT_ENDPOINT_META: &str = "voxchat:text-endpoint";
/// `<meta name>` carrying the voice endpoint.
pub const VOICE_ENDPOINT_META: &str = "voxchat:voice-endpoint";

/// Absolute URLs of the two backend endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub text_url: String,
    pub voice_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self { text_url: DEFAULT_TEXT_ENDPOINT.to_owned(), voice_url: DEFAULT_VOICE_ENDPOINT.to_owned() }
    }
}

impl Endpoints {
    /// Build endpoints from a meta-name → content lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |name: &str, fallback: &str| {
            lookup(name)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_owned())
        };
        Self {
            text_url: pick(TEXT_ENDPOINT_META, DEFAULT_TEXT_ENDPOINT),
            voice_url: pick(VOICE_ENDPOINT_META, DEFAULT_VOICE_ENDPOINT),
        }
    }

    /// Endpoints for the running page. Defaults outside the browser.
    #[must_use]
    pub fn resolve() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::from_lookup(read_meta)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten()?;
    el.get_attribute("content")
}
