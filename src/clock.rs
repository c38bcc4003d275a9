//! Header clock text in the dashboard's `ar-EG` style.

use chrono::{Datelike, NaiveDateTime, Timelike};

const MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Replace ASCII digits with Arabic-Indic digits.
pub fn arabic_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// `١٦ أكتوبر ٢٠٢٦، ٠٢:٠٥ م`
pub fn format_clock(at: &NaiveDateTime) -> String {
    let (is_pm, hour12) = at.hour12();
    let month = MONTHS[at.month0() as usize];
    let marker = if is_pm { "م" } else { "ص" };
    let latin = format!(
        "{day} {month} {year}، {hour:02}:{minute:02} {marker}",
        day = at.day(),
        year = at.year(),
        hour = hour12,
        minute = at.minute(),
    );
    arabic_digits(&latin)
}

/// Current local time, formatted.
pub fn now_text() -> String {
    format_clock(&chrono::Local::now().naive_local())
}
