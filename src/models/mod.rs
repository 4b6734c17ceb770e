pub mod analysis;
pub mod dashboard;
pub mod form;
pub mod prompt;
pub mod schema;
pub mod summary;
pub mod tips;

pub use analysis::{AnalysisRequest, AnalysisResult};
pub use dashboard::{Dashboard, Metric};
pub use prompt::Prompt;
pub use schema::{Field, FieldKind, Schema};
pub use summary::{SummaryRequest, SummaryResult};
pub use tips::{TipsRequest, TipsResult};
