use serde::{Deserialize, Serialize};

use super::schema::{Field, Schema};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TipsRequest {
    pub student_responses: String,
    pub participation_metrics: String,
    pub understanding_feedback: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TipsResult {
    pub engagement_tips: String,
    pub summary_message: String,
}

pub const TIPS_REQUEST: Schema = Schema {
    name: "TipsRequest",
    fields: &[
        Field::text("studentResponses", "A summary of student responses to recent lessons."),
        Field::text("participationMetrics", "Metrics on student participation in class."),
        Field::text("understandingFeedback", "Feedback on student understanding of the material."),
    ],
};

pub const TIPS_RESULT: Schema = Schema {
    name: "TipsResult",
    fields: &[
        Field::text(
            "engagementTips",
            "AI-driven personalized tips to enhance classroom engagement, one tip per line.",
        ),
        Field::text(
            "summaryMessage",
            "An AI-generated summary statement that highlights impactful teacher actions.",
        ),
    ],
};

/// Splits a tips block into individual tips, one per line, with list
/// markers (`-`, `*`, `1.`) removed.
pub fn parse_tips(tips: &str) -> Vec<String> {
    tips.lines()
        .map(str::trim)
        .map(strip_marker)
        .filter(|line| line.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

fn strip_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix(&['-', '*'][..]) {
        return rest.trim_start();
    }
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix('.') {
            return rest.trim_start();
        }
    }
    line
}
