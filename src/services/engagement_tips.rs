use crate::{
    clients::ModelInvoker,
    error::Result,
    models::tips::{TipsRequest, TipsResult, TIPS_REQUEST, TIPS_RESULT},
    models::Schema,
};

use super::flow::{self, Flow};

pub struct EngagementTips;

impl Flow for EngagementTips {
    const NAME: &'static str = "generateEngagementTips";
    const INPUT: Schema = TIPS_REQUEST;
    const OUTPUT: Schema = TIPS_RESULT;
    const TEMPLATE: &'static str = "You are an AI assistant designed to provide teachers with personalized tips to enhance classroom engagement and a summary of their actions.

Analyze the provided student responses, participation metrics, and understanding feedback to identify areas for improvement and highlight effective teaching strategies.

Provide concrete, actionable engagement tips that the teacher can implement in their classroom.

Compose a summary message that emphasizes the teacher's positive impact and suggests further steps based on the analysis.

Student Responses: {{studentResponses}}
Participation Metrics: {{participationMetrics}}
Understanding Feedback: {{understandingFeedback}}";

    type Request = TipsRequest;
    type Response = TipsResult;
}

pub async fn generate_engagement_tips(invoker: &dyn ModelInvoker, req: &TipsRequest) -> Result<TipsResult> {
    flow::run::<EngagementTips>(invoker, req).await
}
