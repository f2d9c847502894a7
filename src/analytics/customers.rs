use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::analytics::grouping::OrderedGroups;
use crate::models::Transaction;
use crate::types::{add_money, average};

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub total_spent: Decimal,
    pub purchase_count: usize,
    pub avg_order_value: Decimal,
    /// Distinct product names, sorted.
    pub products_bought: Vec<String>
}

#[derive(Default)]
struct CustomerTotals {
    spent: Decimal,
    purchases: usize,
    products: BTreeSet<String>
}

/// Spending per customer, biggest spender first.
pub fn customer_analysis(transactions: &[Transaction]) -> Vec<CustomerSummary> {
    let mut groups = OrderedGroups::<CustomerTotals>::new();

    for transaction in transactions {
        let totals = groups.entry(&transaction.customer_id);
        add_money(&mut totals.spent, transaction.amount());
        totals.purchases += 1;
        totals.products.insert(transaction.product_name.clone());
    }

    let mut customers: Vec<CustomerSummary> = groups.into_groups()
        .into_iter()
        .map(|(customer_id, totals)| CustomerSummary {
            customer_id,
            avg_order_value: average(totals.spent, totals.purchases),
            total_spent: totals.spent,
            purchase_count: totals.purchases,
            products_bought: totals.products.into_iter().collect()
        })
        .collect();

    customers.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    customers
}
