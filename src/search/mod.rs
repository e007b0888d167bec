pub mod combination;
pub mod filter;
pub mod orchestrator;
pub mod query;
