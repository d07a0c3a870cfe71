//! Indian-convention number and currency rendering.
//!
//! The last three integer digits form one group and every group to the left
//! of it has two digits: `12,34,567`, `1,00,00,000`.

pub const CURRENCY_SYMBOL: &str = "₹";

/// Render `amount` as whole rupees, e.g. `₹3,60,000` or `-₹989`.
///
/// Non-finite amounts render as `₹0`.
pub fn format_currency(amount: f64) -> String {
    let (negative, digits) = split_sign(amount);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{}", group_indian(&digits))
}

/// Render `value` rounded to a whole number with Indian grouping.
pub fn format_number(value: f64) -> String {
    let (negative, digits) = split_sign(value);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{}", group_indian(&digits))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

fn split_sign(value: f64) -> (bool, String) {
    if !value.is_finite() {
        return (false, "0".to_string());
    }
    let rounded = value.round();
    // -0.4 rounds to -0.0, which is not negative for display purposes
    let negative = rounded < 0.0;
    (negative, format!("{:.0}", rounded.abs()))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 2);
    let first_len = head.len() % 2;
    if first_len > 0 {
        groups.push(&head[..first_len]);
    }
    groups.extend(
        head.as_bytes()[first_len..]
            .chunks(2)
            .filter_map(|pair| std::str::from_utf8(pair).ok()),
    );
    groups.push(last_three);
    groups.join(",")
}
