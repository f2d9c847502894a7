use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::Transaction;
use crate::validation::validator::validate;

/// Optional narrowing applied to valid transactions.
///
/// `None` on any axis means "no constraint"; it is not the same as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub region: Option<String>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>
}

impl FilterOptions {
    pub fn none() -> Self {
        Self::default()
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|region| !region.is_empty())
    }

    fn has_amount_bounds(&self) -> bool {
        self.min_amount.is_some() || self.max_amount.is_some()
    }

    fn amount_in_bounds(&self, amount: Decimal) -> bool {
        self.min_amount.is_none_or(|min| amount >= min) && self.max_amount.is_none_or(|max| amount <= max)
    }
}

/// How many records each stage removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub total_input: usize,
    pub invalid: usize,
    pub filtered_by_region: usize,
    pub filtered_by_amount: usize,
    pub final_count: usize
}

#[derive(Debug, Default)]
pub struct ValidationOutcome {
    pub valid: Vec<Transaction>,
    pub invalid_count: usize,
    pub summary: FilterSummary
}

/// Validates every transaction and then applies the region and amount filters.
///
/// Each rejected transaction counts once in `invalid_count`. Filters only see
/// transactions that passed validation.
pub fn validate_and_filter(transactions: Vec<Transaction>, options: &FilterOptions) -> ValidationOutcome {
    let total_input = transactions.len();
    let mut invalid_count = 0;
    let mut valid = Vec::with_capacity(total_input);

    for transaction in transactions {
        match validate(&transaction) {
            Ok(()) => valid.push(transaction),
            Err(error) => {
                debug!("{error}");
                invalid_count += 1;
            }
        }
    }

    info!("Available regions: {}", available_regions(&valid).join(", "));

    if let Some((min, max)) = amount_range(&valid) {
        info!("Transaction amount range: min={min}, max={max}");
    }

    let mut filtered_by_region = 0;
    let mut filtered_by_amount = 0;

    if let Some(region) = options.region() {
        let before = valid.len();
        valid.retain(|transaction| transaction.region == region);
        filtered_by_region = before - valid.len();
        info!("Records after region filter ({region}): {}", valid.len());
    }

    if options.has_amount_bounds() {
        let before = valid.len();
        valid.retain(|transaction| options.amount_in_bounds(transaction.amount()));
        filtered_by_amount = before - valid.len();
        info!("Records after amount filter: {}", valid.len());
    }

    let summary = FilterSummary {
        total_input,
        invalid: invalid_count,
        filtered_by_region,
        filtered_by_amount,
        final_count: valid.len()
    };

    info!("Validation summary: {summary:?}");

    ValidationOutcome { valid, invalid_count, summary }
}

/// Distinct non-empty regions, sorted.
pub fn available_regions(transactions: &[Transaction]) -> Vec<String> {
    transactions.iter()
        .filter(|transaction| !transaction.region.is_empty())
        .map(|transaction| transaction.region.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Smallest and largest transaction amount, or `None` when there are no transactions.
pub fn amount_range(transactions: &[Transaction]) -> Option<(Decimal, Decimal)> {
    let mut amounts = transactions.iter().map(Transaction::amount);
    let first = amounts.next()?;

    Some(amounts.fold((first, first), |(min, max), amount| (min.min(amount), max.max(amount))))
}
