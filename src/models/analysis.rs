use serde::{Deserialize, Serialize};

use super::schema::{Field, Schema};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub student_responses: String,
    pub lesson_content: String,
    pub teacher_actions: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub effective_strategies: String,
    pub areas_for_improvement: String,
    pub student_engagement_level: String,
}

pub const ANALYSIS_REQUEST: Schema = Schema {
    name: "AnalysisRequest",
    fields: &[
        Field::text("studentResponses", "Student responses to a lesson or activity."),
        Field::text("lessonContent", "The content of the lesson or activity."),
        Field::text("teacherActions", "Description of teacher actions during the lesson."),
    ],
};

pub const ANALYSIS_RESULT: Schema = Schema {
    name: "AnalysisResult",
    fields: &[
        Field::text(
            "effectiveStrategies",
            "A summary of effective teaching strategies identified from student responses and engagement levels.",
        ),
        Field::text(
            "areasForImprovement",
            "Areas where teaching strategies could be improved to enhance student engagement and understanding.",
        ),
        Field::text(
            "studentEngagementLevel",
            "Overall student engagement level based on the responses.",
        ),
    ],
};
