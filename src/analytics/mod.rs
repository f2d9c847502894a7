mod customers;
mod daily;
mod grouping;
mod products;
mod regions;
mod revenue;

pub use customers::{customer_analysis, CustomerSummary};
pub use daily::{daily_sales_trend, peak_sales_day, DailySales, PeakDay};
pub use products::{low_performing_products, product_sales, top_selling_products, ProductSales, DEFAULT_LOW_THRESHOLD, DEFAULT_TOP_PRODUCTS};
pub use regions::{region_wise_sales, RegionSales};
pub use revenue::total_revenue;

use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::types::Quantity;

/// Every aggregate computed over one set of transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    pub total_revenue: Decimal,
    pub regions: Vec<RegionSales>,
    pub top_products: Vec<ProductSales>,
    pub customers: Vec<CustomerSummary>,
    pub daily_trend: Vec<DailySales>,
    pub peak_day: Option<PeakDay>,
    pub low_performers: Vec<ProductSales>
}

impl AnalysisSummary {
    pub fn analyze(transactions: &[Transaction], top_products: usize, low_threshold: Quantity) -> Self {
        Self {
            total_revenue: total_revenue(transactions),
            regions: region_wise_sales(transactions),
            top_products: top_selling_products(transactions, top_products),
            customers: customer_analysis(transactions),
            daily_trend: daily_sales_trend(transactions),
            peak_day: peak_sales_day(transactions),
            low_performers: low_performing_products(transactions, low_threshold)
        }
    }
}
