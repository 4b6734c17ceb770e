use teacher_feedback_api::{clients, http::serve_flow, services::summary_message::SummaryMessage, telemetry, Settings};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let settings = Settings::from_env()?;
    Ok(serve_flow::<SummaryMessage, _, _>(&req, &settings, |_| Ok(()), clients::from_settings).await?)
}
