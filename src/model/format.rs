//! Date rendering in the Brazilian format used across the interface.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

pub const INVALID_DATE: &str = "Data inválida";

/// America/Sao_Paulo, a fixed UTC-3 offset since 2019.
const SAO_PAULO_OFFSET_SECONDS: i32 = -3 * 3600;

fn sao_paulo() -> FixedOffset {
    FixedOffset::east_opt(SAO_PAULO_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Renders a timestamp as `dd/mm/yyyy HH:MM` in São Paulo time.
pub fn format_datetime_br(value: DateTime<Utc>) -> String {
    value
        .with_timezone(&sao_paulo())
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// Renders raw ISO text: an RFC 3339 timestamp through [`format_datetime_br`], a plain
/// `yyyy-mm-dd` date (what `<input type="date">` yields) through [`format_date_br`].
///
/// Anything else, including an empty input, yields `Data inválida`.
pub fn format_iso_br(value: &str) -> String {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return format_datetime_br(parsed.with_timezone(&Utc));
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => format_date_br(date),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Current calendar date in São Paulo, used to bound verification dates.
pub fn today_br() -> NaiveDate {
    Utc::now().with_timezone(&sao_paulo()).date_naive()
}

/// Renders a calendar date as `dd/mm/yyyy`.
pub fn format_date_br(value: NaiveDate) -> String {
    value.format("%d/%m/%Y").to_string()
}
