use teacher_feedback_api::{clients, http::serve_dashboard, telemetry, Settings};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let settings = Settings::from_env()?;
    Ok(serve_dashboard(&req, &settings, clients::from_settings).await?)
}
