//! Date and week arithmetic for the week-indexed timeline axis.
//!
//! Horizontal positions are expressed as *week offsets*: the number of weeks,
//! possibly fractional, between the plan's start date and a given date.

use std::{fmt, str::FromStr};

use jiff::{civil::Date, Span};

/// Language used for month names and the few fixed labels of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    French,
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

impl Locale {
    /// Name of `month` (1-12).
    pub fn month_name(self, month: i8) -> &'static str {
        let index = usize::try_from(month.clamp(1, 12) - 1).unwrap_or(0);
        match self {
            Locale::English => ENGLISH_MONTHS[index],
            Locale::French => FRENCH_MONTHS[index],
        }
    }

    /// Prefix put before ISO week numbers under the axis.
    pub fn week_prefix(self) -> &'static str {
        match self {
            Locale::English => "W",
            Locale::French => "S",
        }
    }

    /// Caption drawn before the legend swatches.
    pub fn legend_caption(self) -> &'static str {
        match self {
            Locale::English => "Legend:",
            Locale::French => "Légende :",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "fr" | "french" => Ok(Locale::French),
            _ => Err(format!("Invalid locale: {s}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: Date, to: Date) -> i64 {
    from.until(to)
        .map(|span| i64::from(span.get_days()))
        .unwrap_or(0)
}

/// Real-valued week offset of `date` from `start`.
///
/// Not floored: a date three days after `start` sits at `3 / 7`.
pub fn week_offset(date: Date, start: Date) -> f64 {
    days_between(start, date) as f64 / 7.0
}

/// ISO-8601 week number of `date` (1-53).
///
/// The week containing the year's first Thursday is week 1, so late
/// December dates may belong to week 1 and early January dates to week
/// 52 or 53 of the previous year.
pub fn iso_week_number(date: Date) -> u8 {
    u8::try_from(date.iso_week_date().week()).unwrap_or(1)
}

/// First day of week `week_index`, saturating at the calendar bounds.
pub fn week_start(start: Date, week_index: u32) -> Date {
    Span::new()
        .try_days(i64::from(week_index) * 7)
        .and_then(|span| start.checked_add(span))
        .unwrap_or(Date::MAX)
}

/// Month and year label for week `week_index`, e.g. `March 2024`.
pub fn month_label(start: Date, week_index: u32, locale: Locale) -> String {
    let date = week_start(start, week_index);
    format!("{} {}", locale.month_name(date.month()), date.year())
}

/// Iterator over the month headings of a timeline.
///
/// Headings are only considered every fourth week and a heading is skipped
/// when it repeats the previously emitted one, which leaves the first
/// eligible week of each month. Yields `(week_index, label)`.
#[derive(Debug, Clone)]
pub struct MonthLabels {
    start: Date,
    locale: Locale,
    next: u32,
    num_weeks: u32,
    last: Option<String>,
}

impl MonthLabels {
    pub fn new(start: Date, num_weeks: u32, locale: Locale) -> Self {
        Self {
            start,
            locale,
            next: 0,
            num_weeks,
            last: None,
        }
    }
}

impl Iterator for MonthLabels {
    type Item = (u32, String);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.num_weeks {
            let index = self.next;
            self.next += 4;

            let label = month_label(self.start, index, self.locale);
            if self.last.as_deref() != Some(label.as_str()) {
                self.last = Some(label.clone());
                return Some((index, label));
            }
        }
        None
    }
}
