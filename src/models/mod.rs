pub mod bs;

/// Utility functions for per-quote pricing
pub mod utils {
    use crate::models::bs;
    use crate::quotes::types::{Quote, QuotePricing};

    /// Price both closed-form variants (call and put) for a single quote.
    ///
    /// Pure and deterministic given the quote's five inputs. Degenerate
    /// inputs flow through to the Black-Scholes helpers unvalidated and may
    /// produce NaN or infinite prices.
    pub fn price_quote(quote: &Quote) -> QuotePricing {
        let call_price = bs::bs_call_price(
            quote.underlying_price,
            quote.strike_price,
            quote.rate,
            quote.years_to_exp,
            quote.vol,
        );
        let put_price = bs::bs_put_price(
            quote.underlying_price,
            quote.strike_price,
            quote.rate,
            quote.years_to_exp,
            quote.vol,
        );

        QuotePricing {
            quote: *quote,
            call_price,
            put_price,
        }
    }
}
