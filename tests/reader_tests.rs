use vanilla_pricer::{parse_quotes, read_quotes};

/// Mixed well-formed and malformed lines: only the well-formed records
/// survive, in original file order.
#[test]
fn test_mixed_file_keeps_count_and_order() {
    let quotes = read_quotes("tests/data/quotes_mixed.txt");

    assert_eq!(quotes.len(), 3, "expected 3 parseable records");
    assert_eq!(quotes[0].underlying_price, 100.0);
    assert_eq!(quotes[1].underlying_price, 50.0);
    assert_eq!(quotes[2].underlying_price, 120.0);

    // Spot-check the full field mapping S K T r sigma on the second record
    assert_eq!(quotes[1].strike_price, 60.0);
    assert_eq!(quotes[1].years_to_exp, 0.5);
    assert_eq!(quotes[1].rate, 0.03);
    assert_eq!(quotes[1].vol, 0.25);
}

/// A nonexistent file is not an error at the reader layer; it yields an
/// empty batch.
#[test]
fn test_nonexistent_file_yields_empty() {
    let quotes = read_quotes("tests/data/does_not_exist.txt");
    assert!(quotes.is_empty());
}

#[test]
fn test_empty_file_yields_empty() {
    let quotes = read_quotes("tests/data/empty.txt");
    assert!(quotes.is_empty());
}

#[test]
fn test_malformed_only_file_yields_empty() {
    let quotes = read_quotes("tests/data/malformed_only.txt");
    assert!(quotes.is_empty());
}

/// A record must consist of exactly five numeric tokens; short, long and
/// partially numeric lines are all skipped.
#[test]
fn test_record_must_have_exactly_five_tokens() {
    let quotes = parse_quotes("1 2 3 4\n1 2 3 4 5 6\n1 2 three 4 5\n\n1 2 3 4 5\n");

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].underlying_price, 1.0);
    assert_eq!(quotes[0].vol, 5.0);
}

/// Tokens may be separated by any amount of whitespace, including tabs and
/// leading/trailing padding.
#[test]
fn test_whitespace_variants() {
    let quotes = parse_quotes("  100   100\t1  0.05\t\t0.2  \n");

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].underlying_price, 100.0);
    assert_eq!(quotes[0].vol, 0.2);
}

/// The reader applies no schema validation: out-of-domain values such as
/// negative volatility or rate are passed through untouched.
#[test]
fn test_no_numeric_range_validation() {
    let quotes = parse_quotes("100 100 1 -0.01 -0.5\n");

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].rate, -0.01);
    assert_eq!(quotes[0].vol, -0.5);
}
