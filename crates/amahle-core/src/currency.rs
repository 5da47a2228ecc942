//! Currency Formatting
//!
//! Amounts are rendered with a fixed symbol prefix and two decimals.

/// Format an amount with thousands separators, e.g. `R1,234.50`.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", symbol, non_finite_label(amount));
    }

    let fixed = to_fixed_2(amount);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    format!("{}{}{}.{}", symbol, sign, group_thousands(digits), frac_part)
}

/// Format a computed total without separators, e.g. `R1234.50`.
pub fn format_total(symbol: &str, amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", symbol, non_finite_label(amount));
    }
    format!("{}{}", symbol, to_fixed_2(amount))
}

/// Two-decimal rendering of a finite amount, rounded on its exact decimal
/// expansion with ties away from zero (1234.125 -> "1234.13", like `toFixed(2)`).
fn to_fixed_2(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    // Every finite f64 has at most 1074 fractional digits
    let exact = format!("{:.1074}", amount.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain((0..2).map(|i| frac.get(i).copied().unwrap_or(b'0')))
        .collect();
    if frac.get(2).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - 2;
    let whole: String = digits[..split].iter().map(|&b| b as char).collect();
    let cents: String = digits[split..].iter().map(|&b| b as char).collect();
    format!("{}{}.{}", sign, whole, cents)
}

/// Add one unit in the last place of a decimal digit string
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn non_finite_label(amount: f64) -> &'static str {
    if amount.is_nan() {
        "NaN"
    } else if amount.is_sign_negative() {
        "-Infinity"
    } else {
        "Infinity"
    }
}

/// Insert a comma every three digits counting from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
