// demos/pricing_demo.rs

//! Demonstration of batch quote pricing
//!
//! This example shows how to:
//! 1. Build a batch of quote records
//! 2. Price calls and puts with the Black-Scholes closed form
//! 3. Render the per-record console lines

use vanilla_pricer::{price_quotes, render_priced_quote, Quote};

fn main() {
    println!("Batch Black-Scholes Pricing Demo");
    println!("================================");

    // Create a small batch of quotes for demonstration
    let quotes = vec![
        Quote {
            underlying_price: 100.0,
            strike_price: 100.0,
            years_to_exp: 1.0,
            rate: 0.05,
            vol: 0.20,
        },
        Quote {
            underlying_price: 50.0,
            strike_price: 60.0,
            years_to_exp: 0.5,
            rate: 0.03,
            vol: 0.25,
        },
        Quote {
            underlying_price: 120.0,
            strike_price: 95.0,
            years_to_exp: 0.25,
            rate: 0.01,
            vol: 0.40,
        },
    ];

    println!("Quotes loaded: {}", quotes.len());

    println!("\nStep 1: Pricing batch...");
    let priced = price_quotes(quotes);
    println!("Options priced: {}", priced.len());

    println!("\nPricing Results:");
    println!(
        "{:<10} {:<10} {:<8} {:<12} {:<12}",
        "Spot", "Strike", "Expiry", "Call Price", "Put Price"
    );
    println!("{}", "-".repeat(54));

    for result in &priced {
        println!(
            "{:<10.2} {:<10.2} {:<8.2} {:<12.4} {:<12.4}",
            result.quote.underlying_price,
            result.quote.strike_price,
            result.quote.years_to_exp,
            result.call_price,
            result.put_price
        );
    }

    println!("\nStep 2: Console rendering...");
    for (i, result) in priced.iter().enumerate() {
        println!("{}", render_priced_quote(i + 1, result));
    }
}
