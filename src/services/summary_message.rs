use crate::{
    clients::ModelInvoker,
    error::Result,
    models::summary::{SummaryRequest, SummaryResult, SUMMARY_REQUEST, SUMMARY_RESULT},
    models::Schema,
};

use super::flow::{self, Flow};

pub struct SummaryMessage;

impl Flow for SummaryMessage {
    const NAME: &'static str = "generateSummaryMessage";
    const INPUT: Schema = SUMMARY_REQUEST;
    const OUTPUT: Schema = SUMMARY_RESULT;
    const TEMPLATE: &'static str = "You are a helpful AI assistant designed to provide positive and encouraging feedback to teachers based on classroom data.

Generate a concise and appreciative summary statement (one or two sentences maximum) that highlights the teacher's impactful actions and the positive outcomes observed in the classroom.

Use the following information to generate the summary:

Student Response Insights: {{studentResponseInsights}}
Engagement Tips Provided: {{engagementTips}}
Participation Rate: {{participationRate}}
Understanding Metrics: {{understandingMetrics}}
Feedback Analysis: {{feedbackAnalysis}}";

    type Request = SummaryRequest;
    type Response = SummaryResult;
}

/// One or two encouraging sentences about the teacher's impact.
pub async fn generate_summary_message(invoker: &dyn ModelInvoker, req: &SummaryRequest) -> Result<SummaryResult> {
    flow::run::<SummaryMessage>(invoker, req).await
}
