mod errors;
mod renderer;

pub use errors::ReportError;
pub use renderer::{render_report, write_report, REPORT_TOP_N};
