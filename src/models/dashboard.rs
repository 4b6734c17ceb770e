use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

pub const METRICS: [Metric; 3] = [
    Metric { title: "Participation Rate", value: "85%", description: "+5% from last week" },
    Metric { title: "Understanding Score", value: "92%", description: "Based on recent quizzes" },
    Metric { title: "Feedback Sentiment", value: "Positive", description: "From 25 student comments" },
];

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary_message: String,
    pub engagement_tips: String,
    pub tips: Vec<String>,
    pub metrics: Vec<Metric>,
}
