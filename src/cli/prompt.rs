use std::io::{stdin, stdout, BufRead, Write};

use rust_decimal::Decimal;
use tracing::warn;

use crate::types::parse_decimal;
use crate::validation::FilterOptions;

/// Asks the operator for filters on stdin.
pub fn prompt_filters() -> std::io::Result<FilterOptions> {
    prompt_filters_from(&mut stdin().lock(), &mut stdout())
}

/// Asks whether to filter and, if so, for a region and amount bounds.
///
/// An empty answer leaves that axis unconstrained. An amount that does not
/// parse is reported and treated as absent. End of input counts as "no".
pub fn prompt_filters_from<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<FilterOptions> {
    let choice = ask(input, output, "\nDo you want to filter data? (y/n): ")?;

    if !matches!(choice.to_lowercase().as_str(), "y" | "yes") {
        return Ok(FilterOptions::none());
    }

    let region = ask(input, output, "Enter region to filter (or press Enter to skip): ")?;
    let min_amount = ask_amount(input, output, "Enter minimum amount (or press Enter to skip): ")?;
    let max_amount = ask_amount(input, output, "Enter maximum amount (or press Enter to skip): ")?;

    Ok(FilterOptions {
        region: (!region.is_empty()).then_some(region),
        min_amount,
        max_amount
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> std::io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim().to_string())
}

fn ask_amount<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> std::io::Result<Option<Decimal>> {
    let answer = ask(input, output, question)?;

    if answer.is_empty() {
        return Ok(None);
    }

    match parse_decimal(&answer) {
        Ok(amount) => Ok(Some(amount)),
        Err(error) => {
            warn!("Ignoring amount '{answer}': {error}");
            writeln!(output, "Invalid amount '{answer}', no bound applied")?;
            Ok(None)
        }
    }
}
