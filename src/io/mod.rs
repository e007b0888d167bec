pub mod peaks;
pub mod report;
