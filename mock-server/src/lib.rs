//! In-process stand-in for the list-generation backend.
//!
//! Serves the single `POST /api/generate-list` route with a deterministic
//! canned payload so the client core can be exercised over real HTTP. The
//! real backend is inconsistent about how failures are encoded (HTTP status
//! vs. payload flag), so scenario prompts reproduce each divergent shape:
//!
//! - `fail:<reason>` — HTTP 200 with `{ success: false, error: <reason> }`
//! - `empty` — success shape with an empty product list
//! - `boom` — HTTP 500 with the failure shape
//! - `mismatch` — HTTP 500 carrying a full success-shaped body
//! - `headless` — `success: true` but no `products` field
//! - `garbage` — HTTP 200 with a non-JSON body
//! - `slow:<millis>:<prompt>` — delayed response for the remaining prompt

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Affiliate tag stamped on every canned product link.
pub const AFFILIATE_ID: &str = "toplist-20";

/// Fixed generation timestamp; deterministic payloads keep tests stable.
pub const GENERATED_AT: &str = "2025-06-01T12:00:00Z";

const RATINGS: [f64; 3] = [5.0, 4.7, 4.4];

#[derive(Debug, Deserialize)]
pub struct GenerateListBody {
    pub prompt: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub asin: String,
    pub title: String,
    pub price: String,
    pub rating: f64,
    pub description: String,
    pub affiliate_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Success shape of the backend contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListPayload {
    pub success: bool,
    pub title: String,
    pub intro: String,
    pub products: Vec<Product>,
    pub generated_at: String,
    pub affiliate_id: String,
}

/// Failure shape of the backend contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub success: bool,
    pub error: String,
}

impl ErrorPayload {
    fn new(error: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

pub fn app() -> Router {
    Router::new().route("/api/generate-list", post(generate_list))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn generate_list(Json(input): Json<GenerateListBody>) -> Response {
    let mut prompt = input.prompt.trim().to_string();

    let delayed = prompt
        .strip_prefix("slow:")
        .and_then(|rest| rest.split_once(':'))
        .map(|(millis, remainder)| (millis.parse().unwrap_or(0), remainder.to_string()));
    if let Some((delay, remainder)) = delayed {
        tokio::time::sleep(Duration::from_millis(delay)).await;
        prompt = remainder;
    }

    if let Some(reason) = prompt.strip_prefix("fail:") {
        return (StatusCode::OK, Json(ErrorPayload::new(reason))).into_response();
    }

    match prompt.as_str() {
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorPayload::new("internal error")),
        )
            .into_response(),
        "mismatch" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(success_payload(&prompt)),
        )
            .into_response(),
        "headless" => Json(serde_json::json!({
            "success": true,
            "title": "Headless",
            "intro": "Success claim without a product list."
        }))
        .into_response(),
        "garbage" => (StatusCode::OK, "this is not json").into_response(),
        "empty" => {
            let mut payload = success_payload(&prompt);
            payload.products.clear();
            Json(payload).into_response()
        }
        _ => Json(success_payload(&prompt)).into_response(),
    }
}

/// Deterministic success payload: three ranked products derived from the
/// prompt, best rating first.
pub fn success_payload(prompt: &str) -> ListPayload {
    let products = (1..=3usize)
        .map(|rank| Product {
            asin: format!("B0TOPLIST0{rank}"),
            title: format!("{prompt} pick {rank}"),
            price: format!("${rank}9.99"),
            rating: RATINGS[rank - 1],
            description: format!("Ranked number {rank} for {prompt}."),
            affiliate_link: format!(
                "https://www.amazon.com/dp/B0TOPLIST0{rank}?tag={AFFILIATE_ID}"
            ),
            image_url: (rank == 1).then(|| format!("https://images.example.com/{prompt}/1.jpg")),
        })
        .collect();

    ListPayload {
        success: true,
        title: format!("Top 3 {prompt}"),
        intro: format!("Researched picks for {prompt}."),
        products,
        generated_at: GENERATED_AT.to_string(),
        affiliate_id: AFFILIATE_ID.to_string(),
    }
}
