//! Number formatting for labels, tooltips and metric tiles.

/// `1234567` → `"1,234,567"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two-decimal currency with grouped thousands: `1234.5` → `"$1,234.50"`.
pub fn currency(symbol: &str, amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol}{}.{:02}", thousands(cents / 100), cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(1_203_000), "1,203,000");
    }

    #[test]
    fn formats_currency() {
        assert_eq!(currency("$", 0.0), "$0.00");
        assert_eq!(currency("£", 19.989), "£19.99");
        assert_eq!(currency("$", 1234.5), "$1,234.50");
        assert_eq!(currency("$", -2.5), "-$2.50");
    }
}
