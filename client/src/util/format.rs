//! Display formatting for prices and listing rows.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a rupee amount with Indian digit grouping, e.g. `₹12,34,567.50`.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return "₹0.00".to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let paise = (value.abs() * 100.0).round() as i64;
    let sign = if value < 0.0 && paise != 0 { "-" } else { "" };
    let rupees = group_indian(&(paise / 100).to_string());
    format!("{sign}₹{rupees}.{:02}", paise % 100)
}

/// Optional price, rendered as `N/A` when absent.
pub fn format_optional_inr(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_owned(), format_inr)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        groups.push(back);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Two-letter avatar text for a listing row; `PR` when the title is blank.
pub fn initials(title: &str) -> String {
    let initials: String = title.trim().chars().take(2).collect::<String>().to_uppercase();
    if initials.is_empty() { "PR".to_owned() } else { initials }
}

/// Render a decimal attribute, hiding zero.
pub fn format_measure(value: f64, unit: &str) -> String {
    if value.abs() < f64::EPSILON { "—".to_owned() } else { format!("{value} {unit}") }
}
