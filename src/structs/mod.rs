pub mod ai;
pub mod analysis_result;
pub mod audit_snapshot;
pub mod cli;
pub mod config;
pub mod detailed_timings;
pub mod enrichment_result;
pub mod lead_data;
pub mod score_set;
pub mod validation_result;
