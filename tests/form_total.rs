use portfolio_ui_wasm::domain::portfolio::{FormTotal, parse_float_lenient, parse_operand};

#[test]
fn total_of_quantity_and_price() {
    assert_eq!(FormTotal::from_inputs("3", "2.5").display(), "$7.50");
    assert_eq!(FormTotal::from_inputs("10", "19.999").display(), "$199.99");
}

#[test]
fn half_cent_totals_round_up() {
    assert_eq!(FormTotal::from_inputs("3", "0.375").display(), "$1.13");
    assert_eq!(FormTotal::from_inputs("1", "0.125").display(), "$0.13");
    assert_eq!(FormTotal::from_inputs("-1", "0.125").display(), "$-0.13");
}

#[test]
fn empty_operand_counts_as_zero() {
    assert_eq!(FormTotal::from_inputs("", "4").display(), "$0.00");
    assert_eq!(FormTotal::from_inputs("3", "").display(), "$0.00");
    assert_eq!(FormTotal::from_inputs("abc", "xyz").display(), "$0.00");
}

#[test]
fn negative_zero_total_prints_positive() {
    assert_eq!(FormTotal::from_inputs("-0", "5").display(), "$0.00");
}

#[test]
fn operands_take_the_numeric_prefix() {
    assert_eq!(parse_float_lenient("  12abc"), 12.0);
    assert_eq!(parse_float_lenient("3.5.1"), 3.5);
    assert_eq!(parse_float_lenient("-.5"), -0.5);
    assert_eq!(parse_float_lenient("1e3x"), 1000.0);
    assert_eq!(parse_float_lenient("2e"), 2.0);
    assert_eq!(parse_float_lenient("7."), 7.0);
    assert_eq!(parse_float_lenient("-Infinity"), f64::NEG_INFINITY);
    assert!(parse_float_lenient(".").is_nan());
    assert!(parse_float_lenient("$5").is_nan());
}

#[test]
fn nan_operand_becomes_zero() {
    assert_eq!(parse_operand("NaN"), 0.0);
    assert_eq!(parse_operand(" 42 "), 42.0);
}
