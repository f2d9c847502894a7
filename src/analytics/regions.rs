use rust_decimal::Decimal;

use crate::analytics::grouping::OrderedGroups;
use crate::analytics::revenue::total_revenue;
use crate::models::Transaction;
use crate::types::{add_money, average, percentage};

#[derive(Debug, Clone, PartialEq)]
pub struct RegionSales {
    pub region: String,
    pub total_sales: Decimal,
    pub transaction_count: usize,
    /// Share of the grand total, rounded to two decimals.
    pub percentage: Decimal
}

impl RegionSales {
    /// Average transaction value in this region, rounded to two decimals.
    pub fn average_order_value(&self) -> Decimal {
        average(self.total_sales, self.transaction_count)
    }
}

#[derive(Default)]
struct RegionTotals {
    sales: Decimal,
    count: usize
}

/// Sales per region, largest first.
pub fn region_wise_sales(transactions: &[Transaction]) -> Vec<RegionSales> {
    let grand_total = total_revenue(transactions);
    let mut groups = OrderedGroups::<RegionTotals>::new();

    for transaction in transactions {
        let totals = groups.entry(&transaction.region);
        add_money(&mut totals.sales, transaction.amount());
        totals.count += 1;
    }

    let mut regions: Vec<RegionSales> = groups.into_groups()
        .into_iter()
        .map(|(region, totals)| RegionSales {
            region,
            percentage: percentage(totals.sales, grand_total),
            total_sales: totals.sales,
            transaction_count: totals.count
        })
        .collect();

    regions.sort_by(|a, b| b.total_sales.cmp(&a.total_sales));
    regions
}
