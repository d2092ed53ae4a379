//! Utility functions for formatting and display

/// Format a price as whole dollars with thousands separators.
///
/// Examples:
/// - 2500.0 -> "2,500"
/// - 1250000.4 -> "1,250,000"
/// - negative or NaN -> "0"
pub fn format_price(amount: f64) -> String {
    let whole = if amount.is_finite() && amount > 0.0 { amount.round() as u64 } else { 0 };
    let digits = whole.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "1 bed", "3 beds", "1 bath", ...
pub fn format_rooms(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
