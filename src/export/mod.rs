pub mod json;
pub mod report;

pub use report::progress_report;
