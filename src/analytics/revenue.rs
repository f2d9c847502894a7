use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::types::sum_money;

/// Sum of quantity x unit price over all transactions; zero when empty.
pub fn total_revenue(transactions: &[Transaction]) -> Decimal {
    sum_money(transactions.iter().map(Transaction::amount))
}
