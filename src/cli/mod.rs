mod prompt;

pub use prompt::{prompt_filters, prompt_filters_from};

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rust_decimal::Decimal;

use crate::analytics::DEFAULT_LOW_THRESHOLD;
use crate::engine::PipelineConfig;
use crate::enrichment::{DEFAULT_CATALOG_LIMIT, DEFAULT_CATALOG_URL};
use crate::types::{parse_decimal, Quantity};
use crate::validation::FilterOptions;

#[derive(Parser, Debug)]
#[command(name = "sales-analytics")]
#[command(about = "Sales transaction analytics with product catalog enrichment", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pipe-delimited sales data file
    #[arg(env = "SALES_INPUT", default_value = "data/sales_data.txt")]
    pub input: PathBuf,

    /// Where the enriched transactions are written
    #[arg(long, env = "SALES_ENRICHED_OUTPUT", default_value = "data/enriched_sales_data.txt")]
    pub enriched_output: PathBuf,

    /// Where the text report is written
    #[arg(long, env = "SALES_REPORT_OUTPUT", default_value = "output/sales_report.txt")]
    pub report_output: PathBuf,

    /// Product catalog endpoint
    #[arg(long, env = "SALES_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Number of catalog products to request
    #[arg(long, env = "SALES_CATALOG_LIMIT", default_value_t = DEFAULT_CATALOG_LIMIT)]
    pub catalog_limit: usize,

    /// Catalog request timeout in seconds
    #[arg(long, env = "SALES_CATALOG_TIMEOUT_SECS", default_value_t = 10)]
    pub catalog_timeout_secs: u64,

    /// Skip the catalog fetch; every transaction is left unmatched
    #[arg(long)]
    pub offline: bool,

    /// Keep only transactions from this region
    #[arg(long)]
    pub region: Option<String>,

    /// Minimum transaction amount (quantity x unit price), inclusive
    #[arg(long, value_parser = parse_decimal)]
    pub min_amount: Option<Decimal>,

    /// Maximum transaction amount (quantity x unit price), inclusive
    #[arg(long, value_parser = parse_decimal)]
    pub max_amount: Option<Decimal>,

    /// Ask for the filters on stdin instead of taking them from flags
    #[arg(long, conflicts_with_all = ["region", "min_amount", "max_amount"])]
    pub interactive: bool,

    /// Products selling fewer units than this are reported as low performers
    #[arg(long, default_value_t = DEFAULT_LOW_THRESHOLD)]
    pub low_threshold: Quantity,

    /// Available log levels: error, warn, info, debug, trace
    #[arg(long, env = "SALES_LOG_LEVEL", default_value = "error")]
    pub log_level: String
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            input: self.input.clone(),
            enriched_output: self.enriched_output.clone(),
            report_output: self.report_output.clone(),
            catalog_limit: self.catalog_limit,
            low_threshold: self.low_threshold
        }
    }

    /// Filters given on the command line; an empty region counts as none.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            region: self.region.clone().filter(|region| !region.trim().is_empty()),
            min_amount: self.min_amount,
            max_amount: self.max_amount
        }
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog_timeout_secs)
    }
}
