mod pipeline;

pub use pipeline::{FilterPreview, Pipeline, PipelineConfig, RunSummary};
