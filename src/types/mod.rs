mod currency;
mod errors;

pub use currency::{add_money, average, format_currency, format_percent, parse_decimal, parse_quantity, percentage, round_money, sum_money};
pub use errors::AmountError;

pub type Quantity = i64;
pub type CatalogId = u32;
