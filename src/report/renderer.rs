use std::fs::{create_dir_all, write};
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{error, info};

use crate::analytics::AnalysisSummary;
use crate::enrichment::EnrichmentStats;
use crate::models::{EnrichedTransaction, Transaction};
use crate::report::errors::ReportError;
use crate::types::{average, format_currency, format_percent, Quantity};

/// Rows shown in the product and customer rankings.
pub const REPORT_TOP_N: usize = 5;

const BANNER_WIDTH: usize = 43;
const RULE_WIDTH: usize = 44;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Default)]
struct ReportBuilder {
    lines: Vec<String>
}

impl ReportBuilder {
    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn section(&mut self, title: &str) {
        self.line(title);
        self.line("-".repeat(RULE_WIDTH));
    }

    fn end_section(&mut self) {
        self.line("");
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Renders the full sales report.
///
/// The output depends only on the arguments, so the same inputs and
/// timestamp always produce the same text.
pub fn render_report(
    transactions: &[Transaction],
    enriched: &[EnrichedTransaction],
    generated_at: NaiveDateTime,
    low_threshold: Quantity
) -> String {
    let analysis = AnalysisSummary::analyze(transactions, REPORT_TOP_N, low_threshold);
    let stats = EnrichmentStats::from_enriched(enriched);
    let mut report = ReportBuilder::default();

    render_header(&mut report, transactions.len(), generated_at);
    render_overall_summary(&mut report, transactions, &analysis);
    render_regions(&mut report, &analysis);
    render_top_products(&mut report, &analysis);
    render_top_customers(&mut report, &analysis);
    render_daily_trend(&mut report, &analysis);
    render_performance(&mut report, &analysis);
    render_enrichment(&mut report, &stats);

    report.finish()
}

fn render_header(report: &mut ReportBuilder, record_count: usize, generated_at: NaiveDateTime) {
    report.line("=".repeat(BANNER_WIDTH));
    report.line("          SALES ANALYTICS REPORT");
    report.line(format!("        Generated: {}", generated_at.format(TIMESTAMP_FORMAT)));
    report.line(format!("        Records Processed: {record_count}"));
    report.line("=".repeat(BANNER_WIDTH));
    report.end_section();
}

fn render_overall_summary(report: &mut ReportBuilder, transactions: &[Transaction], analysis: &AnalysisSummary) {
    let count = transactions.len();
    let average_order = average(analysis.total_revenue, count);

    let first_date = transactions.iter().map(|transaction| transaction.date.as_str()).min();
    let last_date = transactions.iter().map(|transaction| transaction.date.as_str()).max();
    let date_range = match (first_date, last_date) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "N/A".to_string()
    };

    report.section("OVERALL SUMMARY");
    report.line(format!("Total Revenue:        {}", format_currency(analysis.total_revenue, 2)));
    report.line(format!("Total Transactions:   {count}"));
    report.line(format!("Average Order Value:  {}", format_currency(average_order, 2)));
    report.line(format!("Date Range:           {date_range}"));
    report.end_section();
}

fn render_regions(report: &mut ReportBuilder, analysis: &AnalysisSummary) {
    report.section("REGION-WISE PERFORMANCE");
    report.line(format!("{:<10}{:>16}{:>12}{:>14}", "Region", "Sales", "% of Total", "Transactions"));

    for region in &analysis.regions {
        report.line(format!(
            "{:<10}{:>16}{:>12}{:>14}",
            region.region,
            format_currency(region.total_sales, 0),
            format_percent(region.percentage),
            region.transaction_count
        ));
    }

    report.end_section();
}

fn render_top_products(report: &mut ReportBuilder, analysis: &AnalysisSummary) {
    report.section(&format!("TOP {REPORT_TOP_N} PRODUCTS"));
    report.line(format!("{:<6}{:<20}{:>10}{:>16}", "Rank", "Product Name", "Quantity", "Revenue"));

    for (rank, product) in analysis.top_products.iter().enumerate() {
        report.line(format!(
            "{:<6}{:<20}{:>10}{:>16}",
            rank + 1,
            product.product_name,
            product.total_quantity,
            format_currency(product.total_revenue, 0)
        ));
    }

    report.end_section();
}

fn render_top_customers(report: &mut ReportBuilder, analysis: &AnalysisSummary) {
    report.section(&format!("TOP {REPORT_TOP_N} CUSTOMERS"));
    report.line(format!("{:<6}{:<14}{:>16}{:>8}", "Rank", "Customer ID", "Total Spent", "Orders"));

    for (rank, customer) in analysis.customers.iter().take(REPORT_TOP_N).enumerate() {
        report.line(format!(
            "{:<6}{:<14}{:>16}{:>8}",
            rank + 1,
            customer.customer_id,
            format_currency(customer.total_spent, 0),
            customer.purchase_count
        ));
    }

    report.end_section();
}

fn render_daily_trend(report: &mut ReportBuilder, analysis: &AnalysisSummary) {
    report.section("DAILY SALES TREND");
    report.line(format!("{:<12}{:>16}{:>14}{:>18}", "Date", "Revenue", "Transactions", "Unique Customers"));

    for day in &analysis.daily_trend {
        report.line(format!(
            "{:<12}{:>16}{:>14}{:>18}",
            day.date,
            format_currency(day.revenue, 0),
            day.transaction_count,
            day.unique_customers
        ));
    }

    report.end_section();
}

fn render_performance(report: &mut ReportBuilder, analysis: &AnalysisSummary) {
    report.section("PRODUCT PERFORMANCE ANALYSIS");

    match &analysis.peak_day {
        Some(peak) => report.line(format!(
            "Best Selling Day: {} (Revenue {}, Transactions {})",
            peak.date,
            format_currency(peak.revenue, 0),
            peak.transaction_count
        )),
        None => report.line("Best Selling Day: N/A")
    }

    if analysis.low_performers.is_empty() {
        report.line("No low performing products found.");
    } else {
        report.line("Low Performing Products:");

        for product in &analysis.low_performers {
            report.line(format!(
                "  {:<15} Qty: {:<3} Revenue: {}",
                product.product_name,
                product.total_quantity,
                format_currency(product.total_revenue, 0)
            ));
        }
    }

    report.line("Average Transaction Value per Region:");

    for region in &analysis.regions {
        report.line(format!("  {:<8} {}", region.region, format_currency(region.average_order_value(), 2)));
    }

    report.end_section();
}

fn render_enrichment(report: &mut ReportBuilder, stats: &EnrichmentStats) {
    report.section("API ENRICHMENT SUMMARY");
    report.line(format!("Total Products Enriched: {}", stats.matched));
    report.line(format!("Success Rate: {}", format_percent(stats.success_rate)));

    if stats.unmatched_product_ids.is_empty() {
        report.line("All products enriched successfully.");
    } else {
        report.line("Products Not Enriched:");

        for product_id in &stats.unmatched_product_ids {
            report.line(format!("  {product_id}"));
        }
    }

    report.end_section();
}

/// Writes the rendered report to `path`, creating its directory if needed.
pub fn write_report(path: &Path, report: &str) -> Result<(), ReportError> {
    let to_report_error = |source| ReportError::Io { path: path.to_path_buf(), source };

    let result = path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or(Ok(()), create_dir_all)
        .and_then(|()| write(path, report))
        .map_err(to_report_error);

    match &result {
        Ok(()) => info!("Sales report written to {}", path.display()),
        Err(error) => error!("Failed to write sales report: {error}")
    }

    result
}
