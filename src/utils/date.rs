use chrono::NaiveDate;

/// Strict `YYYY-MM-DD`. Anything else (other separators, signed years,
/// trailing text, impossible days) is rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits = [&bytes[0..4], &bytes[5..7], &bytes[8..10]];
    if !digits.iter().all(|part| part.iter().all(u8::is_ascii_digit)) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
