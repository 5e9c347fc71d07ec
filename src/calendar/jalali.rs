//! Gregorian to Jalali conversion.
//!
//! This is the widely circulated arithmetic approximation based on 33-year
//! and 4-year cycles, not an astronomical computation. It is kept exactly
//! as is so dates render the same as every other client of the same data.
//! All divisions truncate toward zero.
//!
//! Before the start of the Jalali era (Gregorian 622-03-22) the arithmetic
//! yields negative months and days. They are returned unchanged; use
//! [`JalaliDate::is_calendar_date`] to tell them apart.

use std::fmt;

/// Day-of-year offset at the start of each Gregorian month (non-leap).
const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A date in the Persian solar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JalaliDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl JalaliDate {
    /// Month in `1..=12` and day in `1..=31`.
    pub fn is_calendar_date(&self) -> bool {
        (1..=12).contains(&self.month) && (1..=31).contains(&self.day)
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Convert a Gregorian date to the Jalali calendar.
///
/// `month` must be in `1..=12`; out-of-range months are clamped so the
/// function stays total. Days are not range-checked.
pub fn gregorian_to_jalali(year: i64, month: u32, day: u32) -> JalaliDate {
    let month = month.clamp(1, 12) as i64;
    let day = day as i64;

    let (mut jy, gy) = if year <= 1600 { (0, year - 621) } else { (979, year - 1600) };
    let gy2 = if month > 2 { gy + 1 } else { gy };

    let mut days = 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400 - 80
        + day
        + GREGORIAN_DAYS_BEFORE_MONTH[(month - 1) as usize];

    jy += 33 * (days / 12053);
    days %= 12053;
    jy += 4 * (days / 1461);
    days %= 1461;
    jy += (days - 1) / 365;
    if days > 365 {
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    JalaliDate {
        year: jy,
        month: jm,
        day: jd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn j(year: i64, month: i64, day: i64) -> JalaliDate {
        JalaliDate { year, month, day }
    }

    #[test]
    fn test_nowruz() {
        assert_eq!(gregorian_to_jalali(2024, 3, 20), j(1403, 1, 1));
        assert_eq!(gregorian_to_jalali(2023, 3, 21), j(1402, 1, 1));
        assert_eq!(gregorian_to_jalali(2024, 3, 19), j(1402, 12, 29));
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(gregorian_to_jalali(2024, 1, 15), j(1402, 10, 25));
        assert_eq!(gregorian_to_jalali(2024, 2, 15), j(1402, 11, 26));
        assert_eq!(gregorian_to_jalali(2024, 1, 1), j(1402, 10, 11));
        assert_eq!(gregorian_to_jalali(2000, 1, 1), j(1378, 10, 11));
        assert_eq!(gregorian_to_jalali(2024, 9, 22), j(1403, 7, 1));
    }

    #[test]
    fn test_is_pure() {
        let first = gregorian_to_jalali(2024, 3, 20);
        for _ in 0..3 {
            assert_eq!(gregorian_to_jalali(2024, 3, 20), first);
        }
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(j(1403, 1, 1).to_string(), "1403/01/01");
    }

    #[test]
    fn test_before_epoch_keeps_negative_parts() {
        let date = gregorian_to_jalali(1, 1, 1);
        assert_eq!(date, j(-620, -25, -1));
        assert!(!date.is_calendar_date());
        assert_eq!(date.to_string(), "-620/-25/-1");

        assert_eq!(gregorian_to_jalali(500, 6, 1), j(-120, -20, -6));
    }

    #[test]
    fn test_epoch_start_is_calendar_date() {
        let date = gregorian_to_jalali(622, 3, 22);
        assert_eq!(date, j(1, 1, 2));
        assert!(date.is_calendar_date());
        assert!(gregorian_to_jalali(2024, 3, 20).is_calendar_date());
    }
}
