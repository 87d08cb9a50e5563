/// Formats a number the way axis labels expect: integers without a decimal
/// point, fractions trimmed to at most three places, thousands grouped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = (value * 1_000.0).round() / 1_000.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let int_part = abs.trunc() as u64;
    let frac = format!("{:.3}", abs.fract());
    // "0.250" -> "25"
    let frac = frac
        .trim_start_matches('0')
        .trim_start_matches('.')
        .trim_end_matches('0');

    let mut out = String::new();
    if negative && (int_part > 0 || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{symbol}{}", format_number(value))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

pub fn format_with_unit(value: f64, unit: &str) -> String {
    format!("{}{unit}", format_number(value))
}
