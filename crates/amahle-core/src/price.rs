//! Booking Price Arithmetic
//!
//! Mirrors the lenient number parsing browsers apply to form values:
//! a numeric prefix is accepted and trailing garbage ignored.

/// Parse the room count typed by the user.
///
/// Leading whitespace and a sign are allowed, then digits up to the first
/// non-digit. Anything unparsable or negative counts as zero rooms. The count
/// is a float so very long inputs keep their magnitude instead of saturating.
pub fn parse_room_count(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() || negative {
        return 0.0;
    }

    digits.parse::<f64>().unwrap_or(0.0)
}

/// Parse a decimal prefix such as the `data-price` on a listing ("4500.00").
///
/// Returns `None` when no finite number prefix is present.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits |= frac_end > frac_start;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }

    // Optional exponent, only taken when complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-') | Some(b'+')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Total for a booking of `rooms` at `base_price` per room
pub fn room_total(base_price: f64, rooms: f64) -> f64 {
    base_price * rooms
}
