use serde::{Deserialize, Serialize};

use super::schema::{Field, Schema};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub student_response_insights: String,
    pub engagement_tips: String,
    pub participation_rate: f64,
    pub understanding_metrics: String,
    pub feedback_analysis: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary_message: String,
}

pub const SUMMARY_REQUEST: Schema = Schema {
    name: "SummaryRequest",
    fields: &[
        Field::text("studentResponseInsights", "Insights on student response to lessons."),
        Field::text("engagementTips", "AI-generated tips provided to improve engagement."),
        Field::number("participationRate", "Participation rate in the class."),
        Field::text("understandingMetrics", "Metrics on student understanding."),
        Field::text("feedbackAnalysis", "Analysis of student feedback."),
    ],
};

pub const SUMMARY_RESULT: Schema = Schema {
    name: "SummaryResult",
    fields: &[Field::text("summaryMessage", "A summary statement for the teacher.")],
};
