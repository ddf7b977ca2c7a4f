pub mod csv;
pub mod json;
pub mod text;

/// Renders a number the way a JavaScript host stringifies it, so exported
/// values stay byte-compatible with earlier `edv_data.csv` files.
pub fn format_js_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&v.abs()) {
        return format!("{v}");
    }
    let sci = format!("{v:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

/// Three decimals like JavaScript `toFixed(3)`: ties round away from zero on
/// the exact binary value, and `-0` prints as `0.000`.
pub fn format_fixed3(v: f64) -> String {
    if !v.is_finite() || v.abs() >= 1e21 {
        return format_js_number(v);
    }
    // 1100 places covers the full expansion of any f64 below 1e21.
    let exact = format!("{:.1100}", v.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = format!("{frac:0<4}");
    let mut units = format!("{int_part}{}", &frac[..3])
        .parse::<u128>()
        .unwrap_or(0);
    if frac.as_bytes()[3] >= b'5' {
        units += 1;
    }
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{}.{:03}", units / 1000, units % 1000)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
