mod errors;
mod parser;
mod reader;
#[cfg(test)]
mod tests;

pub use errors::ParseError;
pub use parser::{parse_line, parse_transactions, ParseOutcome, FIELD_COUNT};
pub use reader::{decode_bytes, read_sales_data, read_sales_data_with, TextEncoding, DEFAULT_ENCODINGS};
