//! Display formatters for table cells.

use chrono::NaiveDate;

/// Volume with magnitude suffixes: "1.50M", "12.34K", grouped integer
/// below one thousand. Missing or zero volume renders "N/A".
pub fn format_volume(volume: Option<u64>) -> String {
    match volume {
        None | Some(0) => "N/A".to_string(),
        Some(v) if v >= 1_000_000 => format!("{:.2}M", v as f64 / 1_000_000.0),
        Some(v) if v >= 1_000 => format!("{:.2}K", v as f64 / 1_000.0),
        Some(v) => group_thousands(v),
    }
}

/// Integer with "," thousands separators.
pub fn group_thousands(v: u64) -> String {
    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// "+$1.23" for non-negative values, "-$1.23" for negative.
pub fn format_signed_money(v: f64) -> String {
    if v >= 0.0 {
        format!("+${:.2}", v)
    } else {
        format!("-${:.2}", v.abs())
    }
}

/// "+1.23%" for non-negative values, "-1.23%" for negative (the number's
/// own sign supplies the minus).
pub fn format_signed_percent(v: f64) -> String {
    if v >= 0.0 {
        format!("+{:.2}%", v)
    } else {
        format!("{:.2}%", v)
    }
}

/// "$123.45" for price columns.
pub fn format_price(v: f64) -> String {
    format!("${:.2}", v)
}

/// "Aug 30, 2025" — the seasonal dataset's calendar-label convention,
/// with the day taken from `date` and the year forced to `year`.
pub fn month_day_label(date: NaiveDate, year: i32) -> String {
    format!("{}, {year}", date.format("%b %-d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_millions() {
        assert_eq!(format_volume(Some(1_500_000)), "1.50M");
        assert_eq!(format_volume(Some(23_456_789)), "23.46M");
    }

    #[test]
    fn volume_thousands() {
        assert_eq!(format_volume(Some(1_000)), "1.00K");
        assert_eq!(format_volume(Some(12_340)), "12.34K");
    }

    #[test]
    fn volume_small_and_missing() {
        assert_eq!(format_volume(Some(999)), "999");
        assert_eq!(format_volume(Some(0)), "N/A");
        assert_eq!(format_volume(None), "N/A");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn signed_money() {
        assert_eq!(format_signed_money(1.234), "+$1.23");
        assert_eq!(format_signed_money(0.0), "+$0.00");
        assert_eq!(format_signed_money(-1.234), "-$1.23");
    }

    #[test]
    fn signed_percent() {
        assert_eq!(format_signed_percent(1.234), "+1.23%");
        assert_eq!(format_signed_percent(0.0), "+0.00%");
        assert_eq!(format_signed_percent(-0.5), "-0.50%");
    }

    #[test]
    fn month_day_label_uses_forced_year() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(month_day_label(date, 2025), "Aug 30, 2025");
        let single_digit = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        assert_eq!(month_day_label(single_digit, 2025), "Jan 3, 2025");
    }
}
