use crate::{
    clients::ModelInvoker,
    error::Result,
    models::analysis::{AnalysisRequest, AnalysisResult, ANALYSIS_REQUEST, ANALYSIS_RESULT},
    models::Schema,
};

use super::flow::{self, Flow};

pub struct AnalyzeResponse;

impl Flow for AnalyzeResponse {
    const NAME: &'static str = "analyzeStudentResponse";
    const INPUT: Schema = ANALYSIS_REQUEST;
    const OUTPUT: Schema = ANALYSIS_RESULT;
    const TEMPLATE: &'static str = "You are an expert in educational pedagogy. Analyze the student responses and engagement levels provided to identify effective teaching strategies, areas for improvement, and the overall student engagement level.

Lesson Content: {{lessonContent}}
Teacher Actions: {{teacherActions}}
Student Responses: {{studentResponses}}

Based on this information, provide a summary of effective strategies, areas for improvement, and the student engagement level.";

    type Request = AnalysisRequest;
    type Response = AnalysisResult;
}

/// Identifies what worked in a lesson, what could improve, and how engaged
/// the students were.
pub async fn analyze_student_response(invoker: &dyn ModelInvoker, req: &AnalysisRequest) -> Result<AnalysisResult> {
    flow::run::<AnalyzeResponse>(invoker, req).await
}
