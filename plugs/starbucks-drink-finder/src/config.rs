const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

// <meta name="recommend-api" content="https://..."> in index.html overrides the default.
const API_META_NAME: &str = "recommend-api";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_dom() -> Self {
        match api_base_from_dom() {
            Some(base) if !base.trim().is_empty() => Self::new(&base),
            _ => Self::default(),
        }
    }

    pub fn recommend_url(&self) -> String {
        format!("{}/recommend_text", self.base)
    }
}

fn api_base_from_dom() -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc
        .query_selector(&format!("meta[name=\"{API_META_NAME}\"]"))
        .ok()??;
    el.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(
            ApiConfig::default().recommend_url(),
            "http://127.0.0.1:8000/recommend_text"
        );
    }

    #[test]
    fn trailing_slash_and_whitespace_are_dropped() {
        assert_eq!(
            ApiConfig::new(" https://drinks.example.com/api/ ").recommend_url(),
            "https://drinks.example.com/api/recommend_text"
        );
    }
}
