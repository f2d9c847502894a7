pub mod analytics;
pub mod cli;
pub mod engine;
pub mod enrichment;
pub mod ingest;
pub mod models;
pub mod report;
pub mod types;
pub mod validation;
