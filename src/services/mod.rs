pub mod analyze_response;
pub mod dashboard;
pub mod engagement_tips;
pub mod flow;
pub mod summary_message;

pub use analyze_response::analyze_student_response;
pub use dashboard::load_dashboard;
pub use engagement_tips::generate_engagement_tips;
pub use flow::{parse, render_prompt, run, Flow};
pub use summary_message::generate_summary_message;
