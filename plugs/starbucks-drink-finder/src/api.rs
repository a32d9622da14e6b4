use gloo::console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::state::Query;

/// Shown to the user for every transport or decode failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch from API";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct RecommendRequest<'a> {
    text: &'a str,
}

// Wire shape. Every field is optional; `into_result` decides what it means.
#[derive(Debug, Deserialize)]
struct RecommendResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    recommendations: Option<Vec<WireItem>>,
}

#[derive(Debug, Deserialize)]
struct WireItem {
    #[serde(rename = "Beverage")]
    beverage: String,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationItem {
    pub beverage: String,
    pub tags: Vec<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationResult {
    Error(String),
    Success {
        message: Option<String>,
        items: Vec<RecommendationItem>,
    },
}

impl RecommendationResult {
    pub fn fetch_failed() -> Self {
        Self::Error(FETCH_FAILED_MESSAGE.to_string())
    }
}

impl From<WireItem> for RecommendationItem {
    fn from(w: WireItem) -> Self {
        Self {
            beverage: w.beverage,
            tags: w.tags.unwrap_or_default(),
            score: w.score,
        }
    }
}

impl RecommendResponse {
    fn into_result(self) -> RecommendationResult {
        // An empty `error` string does not count as an error.
        if let Some(err) = self.error.filter(|e| !e.is_empty()) {
            return RecommendationResult::Error(err);
        }
        RecommendationResult::Success {
            message: self.message.filter(|m| !m.trim().is_empty()),
            items: self
                .recommendations
                .unwrap_or_default()
                .into_iter()
                .map(RecommendationItem::from)
                .collect(),
        }
    }
}

/// Decode a `/recommend_text` response body.
pub fn decode_response(body: &str) -> Result<RecommendationResult, FetchError> {
    let resp: RecommendResponse = serde_json::from_str(body)?;
    Ok(resp.into_result())
}

/// POST `{ "text": query }` to `url` and decode whatever comes back.
///
/// The HTTP status is only logged: the service reports application errors
/// in the body, so a non-2xx answer is still decoded.
pub async fn fetch_recommendations(
    url: &str,
    query: &Query,
) -> Result<RecommendationResult, FetchError> {
    let resp = Request::post(url)
        .json(&RecommendRequest {
            text: query.as_str(),
        })?
        .send()
        .await?;

    if !resp.ok() {
        log!(format!("recommend_text answered HTTP {}", resp.status()));
    }

    let body = resp.text().await?;
    decode_response(&body)
}
