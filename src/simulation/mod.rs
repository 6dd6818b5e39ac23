//! Periodic systems driven by the server tick

pub mod analyzer;
pub mod schedule;

pub use analyzer::{AnalysisReport, PerformanceAnalyzer};
pub use schedule::AnalysisSchedule;
