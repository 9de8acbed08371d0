//! Calendar rules of Harptos.
//!
//! Pure lookups over year and month lengths and day names. Special
//! occasions are counted as the last day of the month before them, so
//! months 1, 4, 7, 9 and 11 run to 31 days and Flamerule runs to 32 in
//! leap years.

use crate::consts::{
    BASE_MONTH_DAYS, COMMON_YEAR_DAYS, ELEINT, FLAMERULE, HAMMER, LEAP_YEAR_CYCLE, LEAP_YEAR_DAYS,
    MAX_MONTH, MIN_DAY, SHIELDMEET_DAY, SPECIAL_OCCASION_DAY, TARSAKH, UKTAR,
};
use crate::types::{Festival, Month};
use crate::DateError;

/// Whether Shieldmeet falls in `year`. Every fourth year, no century rule.
pub const fn is_leap_year(year: u32) -> bool {
    year % LEAP_YEAR_CYCLE == 0
}

/// Number of days in `year`: 366 if it is a leap year, otherwise 365.
pub const fn year_length(year: u32) -> u16 {
    if is_leap_year(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

/// Number of days in `month`, counting the special occasion that follows it.
///
/// Months followed by a special occasion have 31 days, Flamerule has 32 in
/// leap years and every other month has 30.
pub const fn month_length(month: u8, is_leap_year: bool) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    match month {
        FLAMERULE if is_leap_year => SHIELDMEET_DAY,
        HAMMER | TARSAKH | FLAMERULE | ELEINT | UKTAR => SPECIAL_OCCASION_DAY,
        _ => BASE_MONTH_DAYS,
    }
}

/// The festival at `day` of `month`, if that position holds one.
///
/// Does not check that Shieldmeet actually occurs in a given year.
pub const fn festival(day: u8, month: u8) -> Option<Festival> {
    match (day, month) {
        (SHIELDMEET_DAY, FLAMERULE) => Some(Festival::Shieldmeet),
        (SPECIAL_OCCASION_DAY, HAMMER) => Some(Festival::Midwinter),
        (SPECIAL_OCCASION_DAY, TARSAKH) => Some(Festival::Greengrass),
        (SPECIAL_OCCASION_DAY, FLAMERULE) => Some(Festival::Midsummer),
        (SPECIAL_OCCASION_DAY, ELEINT) => Some(Festival::HighHarvestide),
        (SPECIAL_OCCASION_DAY, UKTAR) => Some(Festival::FeastOfTheMoon),
        _ => None,
    }
}

/// Name of `month`, e.g. "Hammer".
///
/// # Errors
/// Returns `DateError::InvalidMonth` if the month is not in `1..=12`.
pub fn month_name(month: u8) -> Result<&'static str, DateError> {
    Month::new(month).map(Month::name)
}

/// Human friendly name of `day` in `month`.
///
/// Festivals carry the name of the month they follow, except Shieldmeet
/// which stands alone. Ordinals are spelled out for the first three days
/// and suffixed for 21-23; every other day takes "th".
///
/// # Errors
/// Returns `DateError::InvalidMonth` for a month outside `1..=12` and
/// `DateError::InvalidDay` for day 0 or a day 31 in a month that no
/// special occasion follows. The resolver never produces either.
pub fn day_name(day: u8, month: u8) -> Result<String, DateError> {
    let month = Month::new(month)?;
    if day < MIN_DAY || (day == SPECIAL_OCCASION_DAY && festival(day, month.get()).is_none()) {
        return Err(DateError::InvalidDay {
            day,
            month: month.get(),
        });
    }
    Ok(name_of(day, month))
}

/// Names a day already known to be valid for its month.
pub(crate) fn name_of(day: u8, month: Month) -> String {
    let month_name = month.name();

    match festival(day, month.get()) {
        Some(Festival::Shieldmeet) => return Festival::Shieldmeet.to_string(),
        Some(festival) => return format!("{festival}, {month_name}"),
        None => {}
    }

    match day {
        1 => format!("First of {month_name}"),
        2 => format!("Second of {month_name}"),
        3 => format!("Third of {month_name}"),
        21 => format!("{month_name} {day}st"),
        22 => format!("{month_name} {day}nd"),
        23 => format!("{month_name} {day}rd"),
        _ => format!("{month_name} {day}th"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 1372,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 1376,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 1377,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1389,
                is_leap: false,
                description: "not divisible by 4",
            },
            // No Gregorian century correction
            TestCase {
                year: 1400,
                is_leap: true,
                description: "century divisible by 4",
            },
            TestCase {
                year: 1500,
                is_leap: true,
                description: "century divisible by 4",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_year_length_matches_leap_rule() {
        for year in 1..=2000 {
            let length = year_length(year);
            assert!(length == 365 || length == 366, "Year {year} has {length} days");
            assert_eq!(length == 366, year % 4 == 0, "Year {year}");
        }
    }

    #[test]
    fn test_any_four_years_span_1461_days() {
        for start in 1..=400 {
            let total: u32 = (start..start + 4).map(|y| u32::from(year_length(y))).sum();
            assert_eq!(total, 1461, "Years {start}..{}", start + 4);
        }
    }

    #[test]
    fn test_month_length_values() {
        let expected_common = [31, 30, 30, 31, 30, 30, 31, 30, 31, 30, 31, 30];
        let expected_leap = [31, 30, 30, 31, 30, 30, 32, 30, 31, 30, 31, 30];
        for month in 1..=12u8 {
            let index = usize::from(month - 1);
            assert_eq!(month_length(month, false), expected_common[index], "Month {month}");
            assert_eq!(month_length(month, true), expected_leap[index], "Month {month}");
        }
    }

    #[test]
    fn test_month_length_32_only_for_leap_flamerule() {
        for month in 1..=12u8 {
            for leap in [false, true] {
                let length = month_length(month, leap);
                assert!((30..=32).contains(&length));
                assert_eq!(length == 32, month == 7 && leap, "Month {month}, leap {leap}");
            }
        }
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        let common: u16 = (1..=12).map(|m| u16::from(month_length(m, false))).sum();
        let leap: u16 = (1..=12).map(|m| u16::from(month_length(m, true))).sum();
        assert_eq!(common, 365);
        assert_eq!(leap, 366);
    }

    #[test]
    fn test_festival_lookup() {
        assert_eq!(festival(31, 1), Some(Festival::Midwinter));
        assert_eq!(festival(31, 7), Some(Festival::Midsummer));
        assert_eq!(festival(32, 7), Some(Festival::Shieldmeet));
        assert_eq!(festival(31, 2), None);
        assert_eq!(festival(32, 1), None);
        assert_eq!(festival(1, 1), None);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1).unwrap(), "Hammer");
        assert_eq!(month_name(12).unwrap(), "Nightal");
        assert!(matches!(month_name(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(month_name(13), Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_day_name_festivals() {
        assert_eq!(day_name(32, 7).unwrap(), "Shieldmeet");
        assert_eq!(day_name(31, 1).unwrap(), "Midwinter, Hammer");
        assert_eq!(day_name(31, 4).unwrap(), "Greengrass, Tarsakh");
        assert_eq!(day_name(31, 7).unwrap(), "Midsummer, Flamerule");
        assert_eq!(day_name(31, 9).unwrap(), "High Harvestide, Eleint");
        assert_eq!(day_name(31, 11).unwrap(), "Feast of the Moon, Uktar");
    }

    #[test]
    fn test_day_name_ordinals() {
        struct TestCase {
            day: u8,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                day: 1,
                expected: "First of Mirtul",
            },
            TestCase {
                day: 2,
                expected: "Second of Mirtul",
            },
            TestCase {
                day: 3,
                expected: "Third of Mirtul",
            },
            TestCase {
                day: 4,
                expected: "Mirtul 4th",
            },
            TestCase {
                day: 11,
                expected: "Mirtul 11th",
            },
            TestCase {
                day: 21,
                expected: "Mirtul 21st",
            },
            TestCase {
                day: 22,
                expected: "Mirtul 22nd",
            },
            TestCase {
                day: 23,
                expected: "Mirtul 23rd",
            },
            TestCase {
                day: 24,
                expected: "Mirtul 24th",
            },
            TestCase {
                day: 30,
                expected: "Mirtul 30th",
            },
        ];

        for case in &cases {
            assert_eq!(day_name(case.day, 5).unwrap(), case.expected, "Day {}", case.day);
        }
    }

    #[test]
    fn test_day_name_rejects_day_31_without_festival() {
        for month in [2, 3, 5, 6, 8, 10, 12] {
            let result = day_name(31, month);
            assert!(
                matches!(result, Err(DateError::InvalidDay { day: 31, month: m }) if m == month),
                "Month {month}"
            );
        }
    }

    #[test]
    fn test_day_name_rejects_bad_input() {
        assert!(matches!(
            day_name(0, 1),
            Err(DateError::InvalidDay { day: 0, month: 1 })
        ));
        assert!(matches!(day_name(1, 0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(day_name(1, 13), Err(DateError::InvalidMonth(13))));
    }
}
