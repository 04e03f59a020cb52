//! Conversion and display-formatting helpers shared by the quote, watchlist and news modules.

use chrono::{DateTime, Utc};

/// Convert i64 timestamp to `DateTime`<Utc>
#[must_use]
pub fn i64_to_datetime(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or_default()
}

/// Insert `,` thousands separators into the integer part of an already formatted number.
fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = formatted
        .strip_prefix('-')
        .map_or(("", formatted), |r| ("-", r));
    let (int_part, frac_part) = rest.split_once('.').map_or((rest, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `1234.5` -> `"$1,234.50"`.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price < 0.0 {
        return format!("-${}", group_thousands(&format!("{:.2}", -price)));
    }
    format!("${}", group_thousands(&format!("{price:.2}")))
}

/// `1.234` -> `"+1.23%"`, `-0.5` -> `"-0.50%"`, `0.0` -> `"0.00%"`.
#[must_use]
pub fn format_change_percent(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{pct:.2}%")
    } else {
        format!("{pct:.2}%")
    }
}

/// Format a market capitalization given in **millions** of USD, as the provider reports it.
///
/// `2_950_000.0` -> `"$2.95T"`, `310_200.0` -> `"$310.20B"`, `850.0` -> `"$850.00M"`.
#[must_use]
pub fn format_market_cap(cap_millions: f64) -> Option<String> {
    if !cap_millions.is_finite() || cap_millions <= 0.0 {
        return None;
    }
    let s = if cap_millions >= 1_000_000.0 {
        format!("${:.2}T", cap_millions / 1_000_000.0)
    } else if cap_millions >= 1_000.0 {
        format!("${:.2}B", cap_millions / 1_000.0)
    } else {
        format!("${cap_millions:.2}M")
    };
    Some(s)
}

/// One decimal place; loss-making or missing ratios render as nothing.
#[must_use]
pub fn format_pe(pe: f64) -> Option<String> {
    (pe.is_finite() && pe > 0.0).then(|| format!("{pe:.1}"))
}
