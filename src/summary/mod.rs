// Summary assembly: top-K selection, the end-to-end summarizer and its report.

pub mod report;
pub mod selector;
pub mod traits;
pub mod weighted;
