pub mod filter;
pub mod report;
pub mod status;

pub use filter::StatusFilter;
pub use report::{Report, RunSummary, SourcePos, TestCase, TestGroup};
pub use status::TestStatus;
