/// USD amount with two decimals and space-separated thousands:
/// 1234567.891 -> "1 234 567.89". This is the exact display format the
/// calculator has always rendered.
pub fn format_usd(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*digit as char);
    }

    format!("{sign}{grouped}.{frac_part}")
}

/// BTC amount with five decimals and the unit suffix.
pub fn format_btc(value: f64) -> String {
    format!("{value:.5} BTC")
}
