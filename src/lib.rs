//! Dates in the Calendar of Harptos.
//!
//! A Harptos year has twelve months of 30 days. Five festivals sit between
//! months and Shieldmeet follows Midsummer every fourth year, giving 365 or
//! 366 days. This crate counts a number of days into a starting year and
//! names the day it lands on:
//!
//! ```
//! let date = harptos_date::resolve_date(1372, 214).unwrap();
//! assert_eq!(date.to_string(), "Shieldmeet, 1372 DR");
//!
//! let name = harptos_date::format_day_offset(1491, 42).unwrap();
//! assert_eq!(name, "Alturiak 11th, 1491 DR");
//! ```

mod consts;
mod date;
mod prelude;
mod reckoning;
mod resolver;
mod rules;
mod types;

pub use consts::*;
pub use date::HarptosDate;
pub use reckoning::{Reckoning, ReckoningConfig};
pub use resolver::{format_date, resolve};
pub use rules::{day_name, festival, is_leap_year, month_length, month_name, year_length};
pub use types::{Day, Festival, Month, Year};

/// Error type for all fallible operations in this crate.
///
/// Every variant describes input the calendar cannot place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year number below 1.
    #[error("Invalid year: {0} (must be at least 1)")]
    InvalidYear(i64),

    /// Day offset below 1.
    #[error("Invalid day offset: {0} (must be at least 1)")]
    InvalidDayOffset(i64),

    /// Month number outside `1..=MAX_MONTH`.
    #[error("Invalid month: {} (must be 1-{})", .0, MAX_MONTH)]
    InvalidMonth(u8),

    /// Day outside its month, or a day 31 in a month no special occasion follows.
    #[error("Invalid day {day} for month {month}")]
    InvalidDay { day: u8, month: u8 },

    /// The resolved year does not fit in a `u32`.
    #[error("Year overflow: resolved date lies past year {}", u32::MAX)]
    YearOverflow,

    /// An instant before the first day of a reckoning era.
    #[error("Instant lies before the era: day {days} (must be at least 1)")]
    BeforeEra { days: i64 },
}

/// Resolves the date `day_offset` days into `start_year`.
///
/// The returned date exposes the year, month number, month name, day and
/// display string, and serializes to those five fields.
///
/// # Errors
/// Returns `DateError::InvalidYear` if `start_year < 1` and
/// `DateError::InvalidDayOffset` if `day_offset < 1`.
pub fn resolve_date(start_year: i64, day_offset: i64) -> Result<HarptosDate, DateError> {
    resolve(start_year, day_offset)
}

/// Names the date `day_offset` days into `start_year`, e.g.
/// "Midwinter, Hammer, 1377 DR".
///
/// # Errors
/// Same as [`resolve_date`].
pub fn format_day_offset(start_year: i64, day_offset: i64) -> Result<String, DateError> {
    resolve(start_year, day_offset).map(|date| format_date(&date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date_fields() {
        let date = resolve_date(1376, 215).unwrap();
        assert_eq!(date.year(), 1376);
        assert_eq!(date.month(), 8);
        assert_eq!(date.month_name(), "Eleasis");
        assert_eq!(date.day(), 1);
        assert_eq!(date.display(), "First of Eleasis, 1376 DR");
    }

    #[test]
    fn test_fixture_scenarios() {
        assert!(
            format_day_offset(1789, 1)
                .unwrap()
                .starts_with("First of Hammer, 1789 DR")
        );
        assert!(
            format_day_offset(1792, 214)
                .unwrap()
                .starts_with("Shieldmeet, 1792 DR")
        );
        assert!(format_day_offset(1377, 31).unwrap().contains("Midwinter"));
        assert!(format_day_offset(1377, 122).unwrap().contains("Greengrass"));
        assert!(format_day_offset(1376, 214).unwrap().starts_with("Shieldmeet"));
    }

    #[test]
    fn test_format_day_offset_matches_resolve() {
        for offset in [1, 31, 214, 365, 366, 1461, 10_000] {
            let date = resolve_date(1372, offset).unwrap();
            assert_eq!(format_day_offset(1372, offset).unwrap(), date.to_string());
        }
    }

    #[test]
    fn test_entry_points_validate() {
        assert!(matches!(
            resolve_date(0, 1),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            format_day_offset(1372, 0),
            Err(DateError::InvalidDayOffset(0))
        ));
        assert!(matches!(
            format_day_offset(-5, -5),
            Err(DateError::InvalidYear(-5))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be at least 1)"
        );
        assert_eq!(
            DateError::InvalidDayOffset(-1).to_string(),
            "Invalid day offset: -1 (must be at least 1)"
        );
        assert_eq!(
            DateError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            DateError::InvalidDay { day: 31, month: 2 }.to_string(),
            "Invalid day 31 for month 2"
        );
        assert_eq!(
            DateError::BeforeEra { days: -3 }.to_string(),
            "Instant lies before the era: day -3 (must be at least 1)"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<DateError>();
    }

    #[test]
    fn test_serde_output() {
        let date = resolve_date(1377, 31).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(
            json,
            r#"{"year":1377,"month":1,"month_name":"Hammer","day":31,"display":"Midwinter, Hammer, 1377 DR"}"#
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_MONTH, 12);
        assert_eq!(MONTH_NAMES[1], "Hammer");
        assert_eq!(MONTH_NAMES[12], "Nightal");
        assert_eq!(DALE_RECKONING, "DR");
    }
}
