//! Turns a starting year and a day offset into a Harptos date.
//!
//! The offset is reduced in three stages: whole 4-year cycles, then single
//! years, then months. Each stage uses a strict `>` comparison, so an offset
//! equal to a year's length lands on that year's last day rather than
//! rolling over.

use tracing::{debug, trace};

use crate::consts::{HAMMER, LEAP_CYCLE_DAYS, LEAP_YEAR_CYCLE, LEAP_YEAR_DAYS};
use crate::date::HarptosDate;
use crate::rules::{month_length, year_length};
use crate::types::{Day, Month, Year};
use crate::DateError;

/// Resolves the date `day_offset` days into `start_year`.
///
/// Day 1 is the first of Hammer of `start_year`. Offsets past the end of
/// the year roll into the following years.
///
/// Whole cycles are skipped in blocks of four times the length of
/// `start_year`, so a leap starting year skips 1464 days per block and a
/// common one 1460.
///
/// # Errors
/// Returns `DateError::InvalidYear` if `start_year < 1`,
/// `DateError::InvalidDayOffset` if `day_offset < 1`, and
/// `DateError::YearOverflow` if the result lies past `u32::MAX`.
pub fn resolve(start_year: i64, day_offset: i64) -> Result<HarptosDate, DateError> {
    let year = validate_year(start_year)?;
    let offset = validate_offset(day_offset)?;

    let quadri_year_length = u64::from(LEAP_YEAR_CYCLE) * u64::from(year_length(year.get()));
    let cycles = (offset - 1) / quadri_year_length;
    let remaining = offset - cycles * quadri_year_length;
    let year = if cycles == 0 {
        year.get()
    } else {
        let skipped = cycles
            .checked_mul(u64::from(LEAP_YEAR_CYCLE))
            .and_then(|years| years.checked_add(u64::from(year.get())))
            .and_then(|year| u32::try_from(year).ok())
            .ok_or(DateError::YearOverflow)?;
        trace!(cycles, year = skipped, remaining, "skipped whole leap cycles");
        skipped
    };

    let date = walk(year, remaining)?;
    debug!(
        start_year,
        day_offset,
        year = date.year(),
        month = date.month(),
        day = date.day(),
        "resolved day offset"
    );
    Ok(date)
}

/// Walks forward from the first day of `year` one year at a time, then one
/// month at a time, until `remaining` fits in a month.
pub(crate) fn walk(mut year: u32, mut remaining: u64) -> Result<HarptosDate, DateError> {
    debug_assert!(remaining >= 1);

    let mut year_len = year_length(year);
    while remaining > u64::from(year_len) {
        remaining -= u64::from(year_len);
        year = year.checked_add(1).ok_or(DateError::YearOverflow)?;
        year_len = year_length(year);
    }

    let is_leap_year = year_len == LEAP_YEAR_DAYS;
    let mut month = HAMMER;
    let mut month_len = month_length(month, is_leap_year);
    while remaining > u64::from(month_len) {
        remaining -= u64::from(month_len);
        month += 1;
        month_len = month_length(month, is_leap_year);
    }

    // Bounded by the month length here
    let day = u8::try_from(remaining).unwrap_or(u8::MAX);
    let year = Year::new(year)?;
    let day = Day::new(day, year, month)?;
    Ok(HarptosDate::from_parts(year, Month::new(month)?, day))
}

/// Like [`walk`], but first skips whole 1461-day cycles, which span four
/// years whatever year they start in. `remaining` must be at least 1.
pub(crate) fn walk_cycles(year: u32, remaining: u64) -> Result<HarptosDate, DateError> {
    let cycles = (remaining - 1) / LEAP_CYCLE_DAYS;
    let year = cycles
        .checked_mul(u64::from(LEAP_YEAR_CYCLE))
        .and_then(|years| years.checked_add(u64::from(year)))
        .and_then(|year| u32::try_from(year).ok())
        .ok_or(DateError::YearOverflow)?;
    walk(year, remaining - cycles * LEAP_CYCLE_DAYS)
}

/// Renders `date` as "{day name}, {year} DR".
pub fn format_date(date: &HarptosDate) -> String {
    date.display().to_owned()
}

fn validate_year(start_year: i64) -> Result<Year, DateError> {
    if start_year < 1 {
        return Err(DateError::InvalidYear(start_year));
    }
    let year = u32::try_from(start_year).map_err(|_| DateError::YearOverflow)?;
    Year::new(year)
}

fn validate_offset(day_offset: i64) -> Result<u64, DateError> {
    match u64::try_from(day_offset) {
        Ok(offset) if offset >= 1 => Ok(offset),
        _ => Err(DateError::InvalidDayOffset(day_offset)),
    }
}
