use crate::consts::{
    ELEINT, FLAMERULE, HAMMER, MAX_MONTH, MONTH_NAMES, SHIELDMEET_DAY, SPECIAL_OCCASION_DAY,
    TARSAKH, UKTAR,
};
use crate::prelude::*;
use crate::rules::{is_leap_year, month_length};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::num::NonZeroU8;

/// A Dale Reckoning year, guaranteed to be at least 1.
/// Uses `NonZeroU32` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Year(NonZeroU32);

impl Year {
    /// Creates a new Year, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0.
    pub fn new(value: u32) -> Result<Self, DateError> {
        let non_zero = NonZeroU32::new(value).ok_or(DateError::InvalidYear(i64::from(value)))?;
        Ok(Self(non_zero))
    }

    /// Returns the year value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Whether Shieldmeet falls in this year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u32> for Year {
    type Error = DateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u32 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the month's name, e.g. "Hammer"
    #[inline]
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }

    /// Number of days in this month, special occasions included
    #[inline]
    pub const fn length(self, is_leap_year: bool) -> u8 {
        month_length(self.get(), is_leap_year)
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day of the month in `1..=SHIELDMEET_DAY` (1..=32)
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
/// `Day::new` also checks the value against a particular year and month;
/// `TryFrom<u8>` (and so deserialization) only checks the calendar-wide range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and fits the month in the given year
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a bad month and
    /// `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: u8) -> Result<Self, DateError> {
        let month = Month::new(month)?;
        let invalid = DateError::InvalidDay {
            day: value,
            month: month.get(),
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > month.length(year.is_leap()) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the calendar-wide range can be checked
        let invalid = DateError::InvalidDay {
            day: value,
            month: 0,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > SHIELDMEET_DAY {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The named days of the calendar.
///
/// Each one lies between two months but is counted as the last day
/// of the month before it: day 31, or day 32 for Shieldmeet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Festival {
    #[display(fmt = "Midwinter")]
    Midwinter,
    #[display(fmt = "Greengrass")]
    Greengrass,
    #[display(fmt = "Midsummer")]
    Midsummer,
    /// Only in years divisible by 4
    #[display(fmt = "Shieldmeet")]
    Shieldmeet,
    #[display(fmt = "High Harvestide")]
    HighHarvestide,
    #[display(fmt = "Feast of the Moon")]
    FeastOfTheMoon,
}

impl Festival {
    /// All festivals in calendar order
    pub const ALL: [Self; 6] = [
        Self::Midwinter,
        Self::Greengrass,
        Self::Midsummer,
        Self::Shieldmeet,
        Self::HighHarvestide,
        Self::FeastOfTheMoon,
    ];

    /// Month the festival is attached to
    pub const fn month(self) -> u8 {
        match self {
            Self::Midwinter => HAMMER,
            Self::Greengrass => TARSAKH,
            Self::Midsummer | Self::Shieldmeet => FLAMERULE,
            Self::HighHarvestide => ELEINT,
            Self::FeastOfTheMoon => UKTAR,
        }
    }

    /// Day number the festival takes within its month
    pub const fn day(self) -> u8 {
        match self {
            Self::Shieldmeet => SHIELDMEET_DAY,
            _ => SPECIAL_OCCASION_DAY,
        }
    }

    /// Whether the festival is observed in every year
    pub const fn is_yearly(self) -> bool {
        !matches!(self, Self::Shieldmeet)
    }
}
