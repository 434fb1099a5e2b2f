//! One-shot submission: exactly one network call per invocation.

use std::time::Duration;

use tracing::debug;

use toplist_core::{transport_failure, HttpMethod, HttpResponse, ListClient, ListResult, Query};

/// Perform one generate-list round-trip and reduce the outcome.
///
/// Returns `None` without any network activity when the query is empty; an
/// empty submission is simply never started. Transport errors and timeouts
/// become the generic network failure; the underlying error text and the
/// endpoint URL stay in the logs, never in the result. No retries.
pub async fn submit(
    http: &reqwest::Client,
    client: &ListClient,
    query: &Query,
    timeout: Duration,
) -> Option<ListResult> {
    if query.is_empty() {
        return None;
    }

    let request = match client.build_generate_list(query) {
        Ok(request) => request,
        Err(err) => {
            debug!(error = %err, "failed to build request");
            return Some(transport_failure());
        }
    };

    let mut builder = match request.method {
        HttpMethod::Post => http.post(&request.path),
    }
    .timeout(timeout);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(body) = request.body {
        builder = builder.body(body);
    }

    let response = match builder.send().await {
        Ok(response) => response,
        Err(err) => {
            debug!(error = %err, "transport failure");
            return Some(transport_failure());
        }
    };

    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            debug!(error = %err, "failed to read response body");
            return Some(transport_failure());
        }
    };

    Some(client.reduce_generate_list(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }))
}
