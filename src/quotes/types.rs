/// Minimal quote record carrying the five inputs of the Black-Scholes closed form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Underlying asset price
    pub underlying_price: f64,
    /// Strike price
    pub strike_price: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Risk-free rate (as decimal, e.g., 0.05 for 5%)
    pub rate: f64,
    /// Volatility (as decimal, e.g., 0.2 for 20%)
    pub vol: f64,
}

/// Lightweight struct to hold the priced result for a single quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotePricing {
    /// The input quote
    pub quote: Quote,
    /// Black-Scholes call price
    pub call_price: f64,
    /// Black-Scholes put price
    pub put_price: f64,
}
