use crate::types::errors::AmountError;
use crate::types::Quantity;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::error;

const CURRENCY_SYMBOL: char = '₹';
const MONEY_PLACES: u32 = 2;
const GROUP_SEPARATOR: char = ',';

/// Rounds a monetary value to two decimal places, halves to even.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Adds `amount` to `total`, saturating at the `Decimal` bounds on overflow.
pub fn add_money(total: &mut Decimal, amount: Decimal) {
    if let Some(sum) = total.checked_add(amount) {
        *total = sum;
    } else {
        error!("Money addition overflow: {total} + {amount}, saturating");
        *total = total.saturating_add(amount);
    }
}

/// Sums amounts with [`add_money`], so an oversized total saturates instead of panicking.
pub fn sum_money(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |mut total, amount| {
        add_money(&mut total, amount);
        total
    })
}

/// `total / count` rounded to two decimals; zero when `count` is zero.
pub fn average(total: Decimal, count: usize) -> Decimal {
    total.checked_div(Decimal::from(count)).map(round_money).unwrap_or(Decimal::ZERO)
}

/// `part` as a percentage of `whole`, rounded to two decimals; zero when `whole` is zero.
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_money)
        .unwrap_or(Decimal::ZERO)
}

/// Parses an integer quantity, ignoring thousands separators ("1,200" -> 1200).
pub fn parse_quantity(value: &str) -> Result<Quantity, AmountError> {
    let cleaned = strip_separators(value);

    if cleaned.is_empty() {
        return Err(AmountError::Empty);
    }

    cleaned.parse::<Quantity>().map_err(|source| AmountError::InvalidInteger {
        raw: value.to_string(),
        source
    })
}

/// Parses a decimal amount, ignoring thousands separators ("1,500.50" -> 1500.50).
///
/// Scientific notation ("1.5e3") is accepted as well.
pub fn parse_decimal(value: &str) -> Result<Decimal, AmountError> {
    let cleaned = strip_separators(value);

    if cleaned.is_empty() {
        return Err(AmountError::Empty);
    }

    let parsed = if cleaned.contains(['e', 'E']) {
        Decimal::from_scientific(&cleaned)
    } else {
        Decimal::from_str(&cleaned)
    };

    parsed.map_err(|source| AmountError::InvalidDecimal {
        raw: value.to_string(),
        source
    })
}

/// Renders a value as currency with thousands separators, e.g. `₹1,500.50`.
pub fn format_currency(value: Decimal, places: u32) -> String {
    format!("{CURRENCY_SYMBOL}{}", group_thousands(value, places))
}

/// Renders a percentage with exactly two decimals, e.g. `29.10%`.
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(MONEY_PLACES);
    format!("{rounded}%")
}

fn strip_separators(value: &str) -> String {
    value.trim().replace(GROUP_SEPARATOR, "")
}

fn group_thousands(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    let is_negative = rounded.is_sign_negative() && !rounded.is_zero();

    rounded.set_sign_positive(true);
    rounded.rescale(places);

    let text = rounded.to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None)
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3 + 1);

    if is_negative {
        grouped.push('-');
    }

    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}
