//! Plain-text quote reader.
//!
//! Parses whitespace-delimited numeric quintuples (`S K T r sigma`), one
//! record per line, preserving file order. Lines that do not parse as
//! exactly five numbers are skipped without error, and a file that cannot
//! be opened yields an empty batch; callers treat an empty batch as the
//! no-data condition.

use std::fs;
use std::path::Path;

use crate::quotes::types::Quote;

/// Read all parseable quotes from a text file, preserving file order.
///
/// Returns an empty vector when the file cannot be opened or read.
pub fn read_quotes<P: AsRef<Path>>(path: P) -> Vec<Quote> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_quotes(&contents),
        Err(_) => Vec::new(),
    }
}

/// Parse quotes out of raw text, one record per line.
pub fn parse_quotes(input: &str) -> Vec<Quote> {
    input.lines().filter_map(parse_quote_line).collect()
}

/// Parse one line into a quote.
///
/// The line must contain exactly five whitespace-separated tokens, each
/// parseable as `f64`, in the order `S K T r sigma`. Anything else yields
/// `None`. Numeric ranges are not validated at this layer.
fn parse_quote_line(line: &str) -> Option<Quote> {
    let fields = line
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<Result<Vec<f64>, _>>()
        .ok()?;

    if fields.len() != 5 {
        return None;
    }

    Some(Quote {
        underlying_price: fields[0],
        strike_price: fields[1],
        years_to_exp: fields[2],
        rate: fields[3],
        vol: fields[4],
    })
}
