//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use billsight_app::error::ApiError;
use billsight_app::ports::BillingApi;
use billsight_domain::history::BillHistoryEntry;
use billsight_domain::identity::{Identity, UserId};
use billsight_domain::report::BillReport;
use billsight_domain::submission::SubmissionPayload;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    user_id: &'a str,
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = resp.json::<ErrorBody>().await.ok().map(|body| body.error);
    Err(ApiError::Server {
        status: resp.status(),
        message,
    })
}

/// Percent-encode a query parameter value (handles `+`, `&`, `=`, spaces, etc.).
fn encode_query_value(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace(' ', "%20")
        .replace('#', "%23")
}

/// [`BillingApi`] over `fetch`, rooted at a configured base URL.
#[derive(Debug, Clone)]
pub struct GlooBillingApi {
    base_url: String,
}

impl GlooBillingApi {
    /// Create a client for the service at `base_url` (a trailing `/` is ignored).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn history_url(&self, user_id: &str) -> String {
        self.url(&format!(
            "/api/dashboard_data?user_id={}",
            encode_query_value(user_id)
        ))
    }

    async fn post_json<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::post(&self.url(path)).json(body).map_err(decode)?;
        let resp = check_response(request.send().await.map_err(transport)?).await?;
        resp.json().await.map_err(decode)
    }
}

impl BillingApi for GlooBillingApi {
    async fn register(&self, user_id: &UserId) -> Result<Identity, ApiError> {
        let body = RegisterRequest {
            user_id: user_id.as_str(),
        };
        self.post_json("/api/register", &body).await
    }

    async fn submit_data(&self, payload: &SubmissionPayload) -> Result<BillReport, ApiError> {
        self.post_json("/api/submit_data", payload).await
    }

    async fn fetch_history(&self, user_id: &str) -> Result<Vec<BillHistoryEntry>, ApiError> {
        let url = self.history_url(user_id);
        let resp = check_response(Request::get(&url).send().await.map_err(transport)?).await?;
        resp.json().await.map_err(decode)
    }
}
