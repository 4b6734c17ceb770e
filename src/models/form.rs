//! Length rules of the on-page analysis form.

use super::analysis::AnalysisRequest;

pub const MIN_LEN: usize = 20;
pub const MAX_LEN: usize = 2000;

impl AnalysisRequest {
    /// Form-level checks: every field between [`MIN_LEN`] and [`MAX_LEN`]
    /// characters. Collects all issues rather than stopping at the first.
    pub fn validate_form(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();
        check(&mut issues, "lessonContent", &self.lesson_content,
            "Please provide more details about the lesson content.");
        check(&mut issues, "teacherActions", &self.teacher_actions,
            "Please describe your actions during the lesson.");
        check(&mut issues, "studentResponses", &self.student_responses,
            "Please provide some examples of student responses.");
        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }
}

fn check(issues: &mut Vec<String>, field: &str, value: &str, too_short: &str) {
    let len = value.chars().count();
    if len < MIN_LEN {
        issues.push(format!("{field}: {too_short}"));
    } else if len > MAX_LEN {
        issues.push(format!("{field}: must be at most {MAX_LEN} characters"));
    }
}
