use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::analytics::grouping::OrderedGroups;
use crate::models::Transaction;
use crate::types::add_money;

#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    pub date: String,
    pub revenue: Decimal,
    pub transaction_count: usize,
    pub unique_customers: usize
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeakDay {
    pub date: String,
    pub revenue: Decimal,
    pub transaction_count: usize
}

#[derive(Default)]
struct DayTotals {
    revenue: Decimal,
    count: usize,
    customers: HashSet<String>
}

fn group_by_date(transactions: &[Transaction]) -> Vec<(String, DayTotals)> {
    let mut groups = OrderedGroups::<DayTotals>::new();

    for transaction in transactions {
        let totals = groups.entry(&transaction.date);
        add_money(&mut totals.revenue, transaction.amount());
        totals.count += 1;
        totals.customers.insert(transaction.customer_id.clone());
    }

    groups.into_groups()
}

/// Revenue, transaction count and distinct customers per date, oldest first.
///
/// Dates are compared as strings, which is chronological for `YYYY-MM-DD`.
pub fn daily_sales_trend(transactions: &[Transaction]) -> Vec<DailySales> {
    let mut days: Vec<DailySales> = group_by_date(transactions)
        .into_iter()
        .map(|(date, totals)| DailySales {
            date,
            revenue: totals.revenue,
            transaction_count: totals.count,
            unique_customers: totals.customers.len()
        })
        .collect();

    days.sort_by(|a, b| a.date.cmp(&b.date));
    days
}

/// The date with the highest revenue; on a tie the date seen first in the input wins.
pub fn peak_sales_day(transactions: &[Transaction]) -> Option<PeakDay> {
    let mut peak: Option<(String, DayTotals)> = None;

    for (date, totals) in group_by_date(transactions) {
        let is_higher = peak.as_ref().is_none_or(|(_, best)| totals.revenue > best.revenue);

        if is_higher {
            peak = Some((date, totals));
        }
    }

    peak.map(|(date, totals)| PeakDay {
        date,
        revenue: totals.revenue,
        transaction_count: totals.count
    })
}
