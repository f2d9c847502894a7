use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use rust_decimal::Decimal;
use tracing::info;

use crate::analytics::{AnalysisSummary, DEFAULT_TOP_PRODUCTS};
use crate::enrichment::{enrich_sales_data, fetch_catalog, save_enriched_data, CatalogSource, EnrichmentStats};
use crate::ingest::{parse_transactions, read_sales_data};
use crate::report::{render_report, write_report};
use crate::types::{format_currency, format_percent, Quantity};
use crate::validation::{amount_range, available_regions, validate, validate_and_filter, FilterOptions, FilterSummary};

const BANNER_WIDTH: usize = 39;

/// Everything a single run needs to know besides the filter choice.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub enriched_output: PathBuf,
    pub report_output: PathBuf,
    pub catalog_limit: usize,
    pub low_threshold: Quantity
}

/// What the operator sees before choosing filters, computed over records that pass validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPreview {
    pub regions: Vec<String>,
    pub amount_range: Option<(Decimal, Decimal)>
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub parsed: usize,
    pub unparsed: usize,
    pub filter: FilterSummary,
    pub catalog_size: usize,
    pub enrichment: EnrichmentStats,
    pub enriched_saved: bool,
    pub report_saved: bool
}

/// Synchronous sales pipeline: read, parse, validate, analyze, enrich, report.
pub struct Pipeline {
    config: PipelineConfig,
    catalog: Box<dyn CatalogSource>
}

impl Pipeline {
    pub fn new(config: PipelineConfig, catalog: Box<dyn CatalogSource>) -> Self {
        Self { config, catalog }
    }

    /// Runs every stage in order, writing operator progress to `progress`.
    ///
    /// `select_filters` is called once, after the filter preview is shown.
    /// Failing to persist the enriched data or the report is reported on
    /// `progress` and in the summary; it does not abort the run.
    pub fn run<W, F>(&self, progress: &mut W, select_filters: F) -> anyhow::Result<RunSummary>
    where
        W: Write,
        F: FnOnce(&FilterPreview) -> anyhow::Result<FilterOptions>
    {
        let banner = "=".repeat(BANNER_WIDTH);
        writeln!(progress, "{banner}")?;
        writeln!(progress, "        SALES ANALYTICS SYSTEM")?;
        writeln!(progress, "{banner}")?;

        writeln!(progress, "\n[1/10] Reading sales data...")?;
        let lines = read_sales_data(&self.config.input);
        writeln!(progress, "✓ Successfully read {} transactions", lines.len())?;

        writeln!(progress, "\n[2/10] Parsing and cleaning data...")?;
        let parsed = parse_transactions(&lines);
        writeln!(progress, "✓ Parsed {} records", parsed.transactions.len())?;

        writeln!(progress, "\n[3/10] Filter Options Available:")?;
        let valid: Vec<_> = parsed.transactions.iter()
            .filter(|transaction| validate(transaction).is_ok())
            .cloned()
            .collect();
        let preview = FilterPreview {
            regions: available_regions(&valid),
            amount_range: amount_range(&valid)
        };
        write_preview(progress, &preview)?;

        writeln!(progress, "\n[4/10] Validating transactions...")?;
        progress.flush()?;
        let filters = select_filters(&preview)?;
        let parsed_count = parsed.transactions.len();
        let outcome = validate_and_filter(parsed.transactions, &filters);
        writeln!(progress, "✓ Valid: {} | Invalid: {}", outcome.valid.len(), outcome.invalid_count)?;

        writeln!(progress, "\n[5/10] Analyzing sales data...")?;
        let analysis = AnalysisSummary::analyze(&outcome.valid, DEFAULT_TOP_PRODUCTS, self.config.low_threshold);
        info!(
            "Total revenue {} across {} regions, {} customers, {} days",
            analysis.total_revenue,
            analysis.regions.len(),
            analysis.customers.len(),
            analysis.daily_trend.len()
        );
        writeln!(progress, "✓ Analysis complete")?;

        writeln!(progress, "\n[6/10] Fetching product data from API...")?;
        let catalog = fetch_catalog(self.catalog.as_ref(), self.config.catalog_limit);
        writeln!(progress, "✓ Fetched {} products", catalog.len())?;

        writeln!(progress, "\n[7/10] Enriching sales data...")?;
        let enriched = enrich_sales_data(&outcome.valid, &catalog);
        let stats = EnrichmentStats::from_enriched(&enriched);
        writeln!(
            progress,
            "✓ Enriched {}/{} transactions ({})",
            stats.matched,
            stats.total,
            format_percent(stats.success_rate)
        )?;

        writeln!(progress, "\n[8/10] Saving enriched data...")?;
        let enriched_saved = match save_enriched_data(&self.config.enriched_output, &enriched) {
            Ok(()) => {
                writeln!(progress, "✓ Saved to: {}", self.config.enriched_output.display())?;
                true
            }
            Err(error) => {
                writeln!(progress, "✗ Could not save enriched data: {error}")?;
                false
            }
        };

        writeln!(progress, "\n[9/10] Generating report...")?;
        let report = render_report(&outcome.valid, &enriched, Local::now().naive_local(), self.config.low_threshold);
        let report_saved = match write_report(&self.config.report_output, &report) {
            Ok(()) => {
                writeln!(progress, "✓ Report saved to: {}", self.config.report_output.display())?;
                true
            }
            Err(error) => {
                writeln!(progress, "✗ Could not save report: {error}")?;
                false
            }
        };

        writeln!(progress, "\n[10/10] Process Complete!")?;
        writeln!(progress, "{banner}")?;
        progress.flush()?;

        Ok(RunSummary {
            lines_read: lines.len(),
            parsed: parsed_count,
            unparsed: parsed.unparsed,
            filter: outcome.summary,
            catalog_size: catalog.len(),
            enrichment: stats,
            enriched_saved,
            report_saved
        })
    }
}

fn write_preview<W: Write>(progress: &mut W, preview: &FilterPreview) -> std::io::Result<()> {
    writeln!(progress, "Regions: {}", preview.regions.join(", "))?;

    match preview.amount_range {
        Some((min, max)) => writeln!(progress, "Amount Range: {} - {}", format_currency(min, 2), format_currency(max, 2)),
        None => writeln!(progress, "Amount Range: N/A")
    }
}
