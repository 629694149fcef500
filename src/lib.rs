//! # Vanilla-Pricer: Batch Black-Scholes Pricing for European Options
//!
//! `vanilla-pricer` is a Rust library and command-line tool for pricing
//! batches of European call and put options with the closed-form
//! Black-Scholes model. Quote records are read from plain-text files and
//! priced in file order, producing one call/put price pair per record.
//!
//! ## Core Features
//!
//! - **Closed-Form Pricing**: Black-Scholes call and put prices via the
//!   complementary error function
//! - **Lenient Quote Reader**: whitespace-delimited quintuples, malformed
//!   lines skipped without aborting the batch
//! - **Batch Orchestration**: ordered pricing with fixed two-decimal console
//!   rendering and distinct exit status on empty input
//! - **TOML Configuration**: optional config file plus environment and CLI
//!   overrides for the input path
//!
//! ## Quick Start
//!
//! ```rust
//! use vanilla_pricer::{price_quotes, Quote};
//!
//! // Build a batch (normally read from a file with `read_quotes`)
//! let quotes = vec![Quote {
//!     underlying_price: 100.0,
//!     strike_price: 100.0,
//!     years_to_exp: 1.0,
//!     rate: 0.05,
//!     vol: 0.2,
//! }];
//!
//! // Price calls and puts for every record
//! let priced = price_quotes(quotes);
//! assert!((priced[0].call_price - 10.45).abs() < 0.01);
//! assert!((priced[0].put_price - 5.57).abs() < 0.01);
//! ```
//!
//! ## Input Format
//!
//! One record per line, five whitespace-separated real numbers in the order
//! `S K T r sigma` (spot, strike, years to expiry, risk-free rate,
//! volatility). Lines that do not parse as exactly five numbers are skipped;
//! a file that cannot be opened yields an empty batch.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod batch;
pub mod models;
pub mod quotes;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Batch orchestration and configuration
pub use batch::config::BatchConfig;
pub use batch::{render_priced_quote, run};

// Quote records and the plain-text reader
pub use quotes::reader::{parse_quotes, read_quotes};
pub use quotes::types::{Quote, QuotePricing};

// ================================================================================================
// BATCH PRICING API
// ================================================================================================

/// Price European call and put options for every quote in a batch.
///
/// Each record is priced independently with the Black-Scholes closed form;
/// the result carries the input quote together with both derived prices.
/// Input order is preserved exactly — callers rely on the i-th result
/// corresponding to the i-th quote.
///
/// # Numeric Semantics
///
/// Quotes are not validated. Degenerate inputs (zero time to expiry, zero or
/// negative volatility, non-positive spot or strike) flow through the closed
/// form unguarded and may yield NaN or infinite prices per IEEE-754.
///
/// # Example
///
/// ```rust
/// use vanilla_pricer::{price_quotes, Quote};
///
/// let quotes = vec![
///     Quote { underlying_price: 100.0, strike_price: 100.0, years_to_exp: 1.0, rate: 0.05, vol: 0.2 },
///     Quote { underlying_price: 50.0, strike_price: 60.0, years_to_exp: 0.5, rate: 0.03, vol: 0.25 },
/// ];
///
/// let priced = price_quotes(quotes);
/// assert_eq!(priced.len(), 2);
/// assert_eq!(priced[1].quote.strike_price, 60.0);
/// ```
pub fn price_quotes(quotes: Vec<Quote>) -> Vec<QuotePricing> {
    // Pre-allocate results vector for efficiency
    let mut results = Vec::with_capacity(quotes.len());

    for quote in quotes {
        results.push(models::utils::price_quote(&quote));
    }

    results
}
