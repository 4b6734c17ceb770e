//! The landing dashboard: summary and tips generated from the sample class
//! data, next to the static metrics grid.

use tracing::info;

use crate::{
    clients::ModelInvoker,
    error::Result,
    models::dashboard::{Dashboard, METRICS},
    models::tips::parse_tips,
    models::{SummaryRequest, TipsRequest},
};

use super::{engagement_tips::generate_engagement_tips, summary_message::generate_summary_message};

pub fn sample_summary_request() -> SummaryRequest {
    SummaryRequest {
        student_response_insights:
            "Students are highly engaged with interactive elements but less so with long readings.".into(),
        engagement_tips: "Incorporate more group activities. Use visual aids for complex topics.".into(),
        participation_rate: 85.0,
        understanding_metrics: "92% average on recent quizzes.".into(),
        feedback_analysis: "Generally positive, with requests for more hands-on examples.".into(),
    }
}

pub fn sample_tips_request() -> TipsRequest {
    TipsRequest {
        student_responses: "Students showed excitement during the group project on photosynthesis, with many asking follow-up questions.".into(),
        participation_metrics: "85% of students contributed to the class discussion this week.".into(),
        understanding_feedback: "Quiz scores indicate a strong grasp of core concepts, especially photosynthesis.".into(),
    }
}

/// Runs the summary and tips flows concurrently. Either failing fails the
/// whole dashboard.
pub async fn load_dashboard(invoker: &dyn ModelInvoker) -> Result<Dashboard> {
    let summary_req = sample_summary_request();
    let tips_req = sample_tips_request();
    let (summary, tips) = tokio::join!(
        generate_summary_message(invoker, &summary_req),
        generate_engagement_tips(invoker, &tips_req),
    );
    let (summary, tips) = (summary?, tips?);

    let list = parse_tips(&tips.engagement_tips);
    info!(tips = list.len(), "dashboard ready");
    Ok(Dashboard {
        summary_message: summary.summary_message,
        engagement_tips: tips.engagement_tips,
        tips: list,
        metrics: METRICS.to_vec(),
    })
}
