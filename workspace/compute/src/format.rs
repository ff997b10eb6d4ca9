use chrono::NaiveDate;

/// Formats dates for display.
///
/// The frontend plugs in a locale-aware implementation. [`EnUsFormatter`]
/// is the fallback and the one used in tests.
pub trait DateFormatter {
    /// Short month and day, e.g. "Jun 5".
    fn short_date(&self, date: NaiveDate) -> String;
}

/// `en-US` short dates without touching any locale database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnUsFormatter;

impl DateFormatter for EnUsFormatter {
    fn short_date(&self, date: NaiveDate) -> String {
        date.format("%b %-d").to_string()
    }
}

pub fn format_short_date(date: NaiveDate) -> String {
    EnUsFormatter.short_date(date)
}

/// "Jun 2 - Jun 7"
pub fn format_date_range(formatter: &dyn DateFormatter, start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", formatter.short_date(start), formatter.short_date(end))
}
