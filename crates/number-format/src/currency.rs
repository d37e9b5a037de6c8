//! en-IN currency rendering.
//!
//! Integer digits are grouped as the last three, then pairs
//! (`12,34,567`), with exactly two fraction digits rounded half away from
//! zero on the shortest decimal representation of the value.

/// Render `amount` prefixed with `symbol`, e.g. `₹1,234.50`.
///
/// Non-finite input is rendered as-is (`₹NaN`, `₹∞`).
pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{}{}", symbol, format_grouped(amount))
}

/// en-IN grouping with two fraction digits, without a symbol.
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}∞", sign);
    }

    let (int_part, frac_part) = round_two_places(value.abs());
    format!("{}{}.{}", sign, group_indian(&int_part), frac_part)
}

fn round_two_places(value: f64) -> (String, String) {
    // Display never switches to exponent notation for f64.
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    (
        String::from_utf8_lossy(&digits[..split]).into_owned(),
        String::from_utf8_lossy(&digits[split..]).into_owned(),
    )
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
