//! Matching orchestration

pub mod orchestrator;

pub use orchestrator::{match_all, run, MatchReport, PipelineResult};
