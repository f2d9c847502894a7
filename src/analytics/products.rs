use rust_decimal::Decimal;

use crate::analytics::grouping::OrderedGroups;
use crate::models::Transaction;
use crate::types::{add_money, Quantity};

pub const DEFAULT_TOP_PRODUCTS: usize = 5;
pub const DEFAULT_LOW_THRESHOLD: Quantity = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    pub product_name: String,
    pub total_quantity: Quantity,
    pub total_revenue: Decimal
}

#[derive(Default)]
struct ProductTotals {
    quantity: Quantity,
    revenue: Decimal
}

/// Quantity and revenue per product name, in order of first appearance.
pub fn product_sales(transactions: &[Transaction]) -> Vec<ProductSales> {
    let mut groups = OrderedGroups::<ProductTotals>::new();

    for transaction in transactions {
        let totals = groups.entry(&transaction.product_name);
        totals.quantity = totals.quantity.saturating_add(transaction.quantity);
        add_money(&mut totals.revenue, transaction.amount());
    }

    groups.into_groups()
        .into_iter()
        .map(|(product_name, totals)| ProductSales {
            product_name,
            total_quantity: totals.quantity,
            total_revenue: totals.revenue
        })
        .collect()
}

/// The `n` products with the most units sold.
pub fn top_selling_products(transactions: &[Transaction], n: usize) -> Vec<ProductSales> {
    let mut products = product_sales(transactions);

    products.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    products.truncate(n);
    products
}

/// Products whose total units sold are strictly below `threshold`, fewest first.
pub fn low_performing_products(transactions: &[Transaction], threshold: Quantity) -> Vec<ProductSales> {
    let mut products: Vec<ProductSales> = product_sales(transactions)
        .into_iter()
        .filter(|product| product.total_quantity < threshold)
        .collect();

    products.sort_by_key(|product| product.total_quantity);
    products
}
