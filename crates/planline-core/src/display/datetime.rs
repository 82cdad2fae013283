//! Date and time display utilities.
//!
//! Wrapper types formatting calendar dates for timeline labels and
//! timestamps in the system timezone for terminal output.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A save time in the system timezone, `dd/mm/yyyy HH:MM TZ`, matching
/// [`LongDate`] for the day part.
pub struct SavedAt<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for SavedAt<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", local.strftime("%d/%m/%Y %H:%M %Z"))
    }
}

/// Day, month and two-digit year (`dd/mm/yy`), used under task bar ends.
pub struct ShortDate<'a>(pub &'a Date);

impl<'a> fmt::Display for ShortDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d/%m/%y"))
    }
}

/// Day, month and full year (`dd/mm/yyyy`), used under milestones.
pub struct LongDate<'a>(pub &'a Date);

impl<'a> fmt::Display for LongDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d/%m/%Y"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_short_and_long_dates() {
        let day = date(2024, 3, 7);
        assert_eq!(ShortDate(&day).to_string(), "07/03/24");
        assert_eq!(LongDate(&day).to_string(), "07/03/2024");
    }

    #[test]
    fn test_saved_at_layout() {
        let ts = Timestamp::from_second(1_704_110_400).unwrap();
        let output = SavedAt(&ts).to_string();
        // The zone name depends on the machine, the layout does not.
        assert_eq!(&output[2..3], "/");
        assert_eq!(&output[5..6], "/");
        assert!(output[6..10].starts_with("20"));
        assert_eq!(&output[13..14], ":");
    }
}
