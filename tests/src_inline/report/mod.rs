
use super::*;

#[test]
fn test_js_number_plain() {
    assert_eq!(format_js_number(1.9), "1.9");
    assert_eq!(format_js_number(133.0), "133");
    assert_eq!(format_js_number(70.0), "70");
    assert_eq!(format_js_number(-2.5), "-2.5");
    assert_eq!(format_js_number(0.000001), "0.000001");
    assert_eq!(format_js_number(1e20), "100000000000000000000");
}

#[test]
fn test_js_number_special() {
    assert_eq!(format_js_number(f64::NAN), "NaN");
    assert_eq!(format_js_number(f64::INFINITY), "Infinity");
    assert_eq!(format_js_number(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_js_number(-0.0), "0");
}

#[test]
fn test_js_number_exponent() {
    assert_eq!(format_js_number(1e-7), "1e-7");
    assert_eq!(format_js_number(1.5e-7), "1.5e-7");
    assert_eq!(format_js_number(1e21), "1e+21");
    assert_eq!(format_js_number(-2.5e22), "-2.5e+22");
}

#[test]
fn test_fixed3() {
    assert_eq!(format_fixed3(0.12345), "0.123");
    assert_eq!(format_fixed3(-0.4), "-0.400");
    assert_eq!(format_fixed3(1.0), "1.000");
    assert_eq!(format_fixed3(f64::NAN), "NaN");
    assert_eq!(format_fixed3(f64::INFINITY), "Infinity");
}

#[test]
fn test_fixed3_ties_round_away_from_zero() {
    assert_eq!(format_fixed3(0.0625), "0.063");
    assert_eq!(format_fixed3(0.3125), "0.313");
    assert_eq!(format_fixed3(-0.0625), "-0.063");
    assert_eq!(format_fixed3(0.9995), "1.000");
}

#[test]
fn test_fixed3_signs() {
    assert_eq!(format_fixed3(-0.0), "0.000");
    assert_eq!(format_fixed3(-0.0001), "-0.000");
    assert_eq!(format_fixed3(0.0), "0.000");
    assert_eq!(format_fixed3(12.3456), "12.346");
}
