use chrono::{DateTime, Utc};

/// Rendered in place of a timestamp that is missing or unparsable.
pub const DATE_PLACEHOLDER: &str = "-";

/// Language-to-format table. Every pattern keeps 2-digit day and month,
/// a numeric year and 2-digit hour/minute; only order and separators
/// differ between locales. Unmapped languages fall back to the first
/// entry.
const LOCALE_FORMATS: &[(&str, &str)] = &[
    ("ru", "%d.%m.%Y %H:%M"),
    ("en", "%m/%d/%Y %H:%M"),
    ("uk", "%d.%m.%Y %H:%M"),
    ("kk", "%d.%m.%Y %H:%M"),
    ("fa", "%Y/%m/%d %H:%M"),
    ("zh", "%Y/%m/%d %H:%M"),
];

fn locale_format(lang: &str) -> &'static str {
    LOCALE_FORMATS
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, fmt)| *fmt)
        .unwrap_or(LOCALE_FORMATS[0].1)
}

pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        None
    } else {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

pub fn format_datetime(value: Option<DateTime<Utc>>, lang: &str) -> String {
    match value {
        Some(dt) => dt.format(locale_format(lang)).to_string(),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

/// RFC 3339 input variant: `None` and anything that does not parse both
/// render the placeholder.
pub fn format_date(value: Option<&str>, lang: &str) -> String {
    format_datetime(value.and_then(parse_datetime), lang)
}
