// A minimal Black-Scholes implementation that provides call and put pricing
// helpers for the batch pricer.  Greeks and implied-volatility are
// intentionally omitted.
//
// Inputs are not guarded: zero time or volatility and non-positive spot or
// strike propagate NaN/Infinity through the formulas per IEEE-754.

/// Standard normal CDF.
pub fn norm_cdf(x: f64) -> f64 {
    // Phi(x) = 0.5 * erfc(-x / sqrt(2))
    0.5 * libm::erfc(-x / (2.0_f64).sqrt())
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    K * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atm_reference_prices() {
        // Standard at-the-money reference: S=K=100, T=1y, r=5%, sigma=20%
        let call = bs_call_price(100.0, 100.0, 0.05, 1.0, 0.2);
        let put = bs_put_price(100.0, 100.0, 0.05, 1.0, 0.2);

        assert!((call - 10.4506).abs() < 5e-4, "call price {}", call);
        assert!((put - 5.5735).abs() < 5e-4, "put price {}", put);
    }

    #[test]
    fn test_put_call_parity() {
        let (s, k, r, t, sigma) = (50.0, 60.0, 0.03, 0.5, 0.25);
        let call = bs_call_price(s, k, r, t, sigma);
        let put = bs_put_price(s, k, r, t, sigma);

        let parity = s - k * (-r * t).exp();
        assert!((call - put - parity).abs() < 1e-9);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
        for x in [0.1, 0.5, 1.0, 2.5] {
            assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-12);
        }
    }
}
