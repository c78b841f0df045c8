use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a numeric form value into a Decimal.
///
/// Handles formats like:
/// - "3.69" -> 3.69
/// - " 3,69 " -> 3.69 (comma decimal)
/// - "RSI 3.69" / "3.69 m²K/W" -> 3.69 (unit text around the number)
/// - "2.5 ACH50" -> 2.5
/// - "1,200" / "1,200.5" -> 1200 / 1200.5 (thousands separator)
/// - "1e3" / "2.5E0" -> 1000 / 2.5 (JSON numbers in exponent form)
/// - "", "-", "N/A", "abc" -> None
///
/// Negative values are not meaningful for any scored field and yield None.
pub fn parse_numeric(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() || s == "-" || s == "—" || s.eq_ignore_ascii_case("n/a") {
        return None;
    }

    let start = s.find(|c: char| c.is_ascii_digit() || c == '.')?;
    if s[..start].trim_end().ends_with('-') {
        return None;
    }

    let number: String = s[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    let exponent = exponent_suffix(&s[start + number.len()..]);
    let number = number.trim_end_matches([',', '.']);
    if number.is_empty() {
        return None;
    }

    let mut unified = unify_separators(number);
    if unified.starts_with('.') {
        unified.insert(0, '0');
    }
    match exponent {
        Some(exp) => Decimal::from_scientific(&format!("{unified}e{exp}")).ok(),
        None => Decimal::from_str(&unified).ok(),
    }
}

/// Exponent of scientific notation directly after the digits ("e20",
/// "E-3", "e+2"), without its sign when positive.
fn exponent_suffix(rest: &str) -> Option<String> {
    let rest = rest.strip_prefix(['e', 'E'])?;
    let (negative, digits) = match rest.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };
    let digits: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(if negative { format!("-{digits}") } else { digits })
}

/// Resolve comma usage: thousands separator when a dot is also present or a
/// single comma is followed by exactly three digits, decimal comma otherwise.
fn unify_separators(s: &str) -> String {
    if !s.contains(',') {
        return s.to_string();
    }
    if s.contains('.') {
        return s.replace(',', "");
    }

    let parts: Vec<&str> = s.split(',').collect();
    let thousands = parts.len() > 2
        || (parts.len() == 2 && parts[1].len() == 3 && !parts[0].is_empty() && parts[0] != "0");
    if thousands {
        parts.concat()
    } else {
        s.replace(',', ".")
    }
}
