//! Score service client over `fetch`

use game_core::{ScoreSink, SinkError};
use proto::{top_scores_url, ScoreRecord, ScoreSubmission};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Posts final scores to the score service.
///
/// Each submission runs as its own browser task; the outcome is logged and
/// never retried.
#[derive(Debug, Clone)]
pub struct RestScoreSink {
    endpoint: String,
}

impl RestScoreSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for RestScoreSink {
    fn default() -> Self {
        Self::new(proto::SCORES_URL)
    }
}

impl ScoreSink for RestScoreSink {
    fn submit_score(&mut self, player_name: &str, goals: u32) -> Result<(), SinkError> {
        let body = ScoreSubmission::new(player_name, goals)
            .to_json()
            .map_err(|e| SinkError::Rejected {
                player: player_name.to_string(),
                reason: e.to_string(),
            })?;
        let request = build_request(&self.endpoint, "POST", Some(&body))
            .map_err(|e| SinkError::Unavailable(describe(&e)))?;

        let player = player_name.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            match send(request).await {
                Ok(resp) if resp.ok() => {
                    log::info!("Saved score for {}: {} goals", player, goals);
                }
                Ok(resp) => {
                    log::warn!(
                        "Score service rejected {}'s score: HTTP {}",
                        player,
                        resp.status()
                    );
                }
                Err(e) => {
                    log::warn!("Failed to save score for {}: {}", player, describe(&e));
                }
            }
        });
        Ok(())
    }
}

/// Fetch the top scores from the service. Resolves to a JSON array of records.
#[wasm_bindgen]
pub fn fetch_leaderboard(endpoint: String) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let records = leaderboard(&endpoint).await?;
        let json = serde_json::to_string(&records)
            .map_err(|e| JsValue::from_str(&format!("Failed to encode leaderboard: {}", e)))?;
        Ok(JsValue::from_str(&json))
    })
}

async fn leaderboard(endpoint: &str) -> Result<Vec<ScoreRecord>, JsValue> {
    let request = build_request(&top_scores_url(endpoint), "GET", None)?;
    let resp = send(request).await?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "Leaderboard request failed: HTTP {}",
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text()?).await?;
    let text = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("Leaderboard body was not text"))?;
    ScoreRecord::list_from_json(&text)
        .map_err(|e| JsValue::from_str(&format!("Bad leaderboard payload: {}", e)))
}

fn build_request(url: &str, method: &str, body: Option<&str>) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }
    Ok(request)
}

async fn send(request: Request) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let resp = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp.dyn_into::<Response>()
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
