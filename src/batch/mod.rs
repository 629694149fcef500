//! Batch orchestration: read quotes, price them, print one line per record.

pub mod config;

use anyhow::{bail, Result};

use self::config::BatchConfig;
use crate::price_quotes;
use crate::quotes::reader::read_quotes;
use crate::quotes::types::QuotePricing;

/// Format one priced quote for console output.
///
/// `index` is the 1-based position of the record in the input file.
pub fn render_priced_quote(index: usize, priced: &QuotePricing) -> String {
    format!(
        "Option {} Call Price: ${:.2} | Put Price: ${:.2}",
        index, priced.call_price, priced.put_price
    )
}

/// Price every parseable record in the configured input file and print one
/// line per record to stdout, in file order.
///
/// Returns the number of records priced. An input that yields zero usable
/// records (missing, unreadable or entirely malformed file) is an error;
/// the caller decides the process exit status.
pub fn run(config: &BatchConfig) -> Result<usize> {
    let quotes = read_quotes(&config.input_path);
    if quotes.is_empty() {
        bail!("no quote data to process in '{}'", config.input_path);
    }

    let priced = price_quotes(quotes);
    for (i, result) in priced.iter().enumerate() {
        println!("{}", render_priced_quote(i + 1, result));
    }

    Ok(priced.len())
}
