//! Request handling shared by the serverless functions under `api/`.

use serde_json::{json, Value};
use tracing::info;
use vercel_runtime::{Body, Request, Response, StatusCode};

use super::cors;
use super::response::{from_error, json_response};
use crate::clients::ModelInvoker;
use crate::config::Settings;
use crate::error::Result;
use crate::services::{self, Flow};

/// Answers preflight, wrong method, and a bad `x-api-key`. `None` means the
/// request may proceed.
pub fn precheck(req: &Request, allow: &str, settings: &Settings) -> anyhow::Result<Option<Response<Body>>> {
    let method = req.method().as_str();
    if method == "OPTIONS" {
        return Ok(Some(cors::preflight()?));
    }
    if method != allow {
        let mut resp = json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            &json!({ "error": format!("Use {allow}") }),
        )?;
        resp.headers_mut().insert("allow", allow.parse()?);
        return Ok(Some(resp));
    }

    // Only enforced when X_API_KEY is configured.
    if let Some(expected) = settings.api_key.as_deref() {
        let provided = req.headers().get("x-api-key").and_then(|h| h.to_str().ok());
        if provided != Some(expected) {
            return Ok(Some(json_response(StatusCode::UNAUTHORIZED, &json!({"error": "Unauthorized"}))?));
        }
    }
    Ok(None)
}

fn read_json(req: &Request) -> std::result::Result<Value, (StatusCode, Value)> {
    let body_bytes: &[u8] = req.body();
    if body_bytes.is_empty() {
        return Err((StatusCode::BAD_REQUEST, json!({"error": "Empty body"})));
    }
    serde_json::from_slice(body_bytes)
        .map_err(|e| (StatusCode::BAD_REQUEST, json!({"error": "Invalid JSON", "detail": e.to_string()})))
}

/// POST endpoint for one flow. `check` runs extra request rules after schema
/// validation; `connect` is only called once the request is known good.
pub async fn serve_flow<F, C, K>(req: &Request, settings: &Settings, check: C, connect: K) -> anyhow::Result<Response<Body>>
where
    F: Flow,
    C: Fn(&F::Request) -> Result<()>,
    K: FnOnce(&Settings) -> Result<Box<dyn ModelInvoker>>,
{
    if let Some(resp) = precheck(req, "POST", settings)? {
        return Ok(resp);
    }
    let body = match read_json(req) {
        Ok(v) => v,
        Err((status, detail)) => return json_response(status, &detail),
    };

    let request = match services::parse::<F>(body).and_then(|r| check(&r).map(|_| r)) {
        Ok(r) => r,
        Err(e) => return from_error(&e),
    };
    let invoker = match connect(settings) {
        Ok(i) => i,
        Err(e) => return from_error(&e),
    };
    match services::run::<F>(invoker.as_ref(), &request).await {
        Ok(out) => json_response(StatusCode::OK, &out),
        Err(e) => from_error(&e),
    }
}

pub async fn serve_dashboard<K>(req: &Request, settings: &Settings, connect: K) -> anyhow::Result<Response<Body>>
where
    K: FnOnce(&Settings) -> Result<Box<dyn ModelInvoker>>,
{
    if let Some(resp) = precheck(req, "GET", settings)? {
        return Ok(resp);
    }
    let invoker = match connect(settings) {
        Ok(i) => i,
        Err(e) => return from_error(&e),
    };
    match services::load_dashboard(invoker.as_ref()).await {
        Ok(dashboard) => {
            info!(metrics = dashboard.metrics.len(), "serving dashboard");
            json_response(StatusCode::OK, &dashboard)
        }
        Err(e) => from_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::AppError;
    use crate::http::response::GENERATION_FAILED;
    use crate::models::AnalysisRequest;
    use crate::services::analyze_response::AnalyzeResponse;
    use crate::services::flow::testing::Canned;
    use crate::services::summary_message::SummaryMessage;

    fn settings(api_key: Option<&str>) -> Settings {
        Settings {
            provider: crate::config::Provider::Gemini,
            timeout: crate::config::DEFAULT_TIMEOUT,
            api_key: api_key.map(str::to_string),
        }
    }

    fn post(body: &str) -> Request {
        let mut req = Request::new(body.to_string().into());
        *req.method_mut() = "POST".parse().unwrap();
        req
    }

    fn body_json(resp: &Response<Body>) -> Value {
        serde_json::from_slice(resp.body()).unwrap()
    }

    fn form_check(r: &AnalysisRequest) -> Result<()> {
        r.validate_form().map_err(AppError::Form)
    }

    #[tokio::test]
    async fn wrong_method_is_rejected_with_allow() {
        let req = Request::new(String::new().into());
        let resp = serve_flow::<SummaryMessage, _, _>(&req, &settings(None), |_| Ok(()), |_| unreachable!())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["allow"], "POST");
    }

    #[tokio::test]
    async fn api_key_is_enforced_when_configured() {
        let mut req = post("{}");
        let resp = serve_flow::<SummaryMessage, _, _>(&req, &settings(Some("k")), |_| Ok(()), |_| unreachable!())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        req.headers_mut().insert("x-api-key", "k".parse().unwrap());
        let resp = serve_flow::<SummaryMessage, _, _>(&req, &settings(Some("k")), |_| Ok(()), |_| unreachable!())
            .await
            .unwrap();
        // past the key check, the empty object fails schema validation
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn short_form_fields_never_reach_the_model() {
        let canned = Arc::new(Canned::ok(json!({})));
        let handle = canned.clone();
        let req = post(r#"{"studentResponses":"ok","lessonContent":"water","teacherActions":"diagram"}"#);
        let resp = serve_flow::<AnalyzeResponse, _, _>(&req, &settings(None), form_check, move |_| {
            Ok(Box::new(handle) as Box<dyn ModelInvoker>)
        })
        .await
        .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&resp)["issues"].as_array().unwrap().len(), 3);
        assert_eq!(canned.calls(), 0);
    }

    #[tokio::test]
    async fn upstream_failure_shows_generic_message() {
        let req = post(
            r#"{"studentResponseInsights":"Engaged","engagementTips":"Groups","participationRate":85,
                "understandingMetrics":"92%","feedbackAnalysis":"Positive"}"#,
        );
        let resp = serve_flow::<SummaryMessage, _, _>(&req, &settings(None), |_| Ok(()), |_| {
            Ok(Box::new(Canned::failing("dns error: no such host")) as Box<dyn ModelInvoker>)
        })
        .await
        .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(&resp);
        assert_eq!(body["detail"], GENERATION_FAILED);
        assert!(!body.to_string().contains("dns"));
    }

    #[tokio::test]
    async fn dashboard_combines_both_flows() {
        let canned = Canned::ok(json!({
            "summaryMessage": "Your hands-on lessons are paying off.",
            "engagementTips": "1. Add a gallery walk\n2. Use exit tickets",
        }));
        let mut req = Request::new(String::new().into());
        *req.method_mut() = "GET".parse().unwrap();
        let resp = serve_dashboard(&req, &settings(None), |_| Ok(Box::new(canned) as Box<dyn ModelInvoker>)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(&resp);
        assert_eq!(body["summaryMessage"], "Your hands-on lessons are paying off.");
        assert_eq!(body["tips"], json!(["Add a gallery walk", "Use exit tickets"]));
        assert_eq!(body["metrics"][0]["value"], "85%");
    }

    #[tokio::test]
    async fn dashboard_upstream_failure_shows_generic_message() {
        let mut req = Request::new(String::new().into());
        *req.method_mut() = "GET".parse().unwrap();
        let resp = serve_dashboard(&req, &settings(None), |_| {
            Ok(Box::new(Canned::failing("timed out after 60s")) as Box<dyn ModelInvoker>)
        })
        .await
        .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(&resp);
        assert_eq!(body["detail"], GENERATION_FAILED);
        assert!(body.get("summaryMessage").is_none());
    }
}
