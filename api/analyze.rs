use teacher_feedback_api::{
    clients, http::serve_flow, models::AnalysisRequest, services::analyze_response::AnalyzeResponse,
    telemetry, AppError, Settings,
};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let settings = Settings::from_env()?;
    // The on-page form limits each field to 20-2000 characters.
    let check = |r: &AnalysisRequest| r.validate_form().map_err(AppError::Form);
    Ok(serve_flow::<AnalyzeResponse, _, _>(&req, &settings, check, clients::from_settings).await?)
}
