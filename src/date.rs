use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::DALE_RECKONING;
use crate::rules::{festival, name_of};
use crate::types::{Day, Festival, Month, Year};

/// A resolved date in the Calendar of Harptos.
///
/// Special occasions belong to the month before them: Midwinter is
/// Hammer 31 and Shieldmeet is Flamerule 32. Values are only built by the
/// resolver and never change; the display string is rendered on first use.
#[derive(Debug, Clone)]
pub struct HarptosDate {
    year: Year,
    month: Month,
    day: Day,
    display: OnceLock<String>,
}

impl HarptosDate {
    /// Assembles a date from components the caller has already validated
    /// against each other.
    pub(crate) const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self {
            year,
            month,
            day,
            display: OnceLock::new(),
        }
    }

    /// Returns the Dale Reckoning year
    pub const fn year(&self) -> u32 {
        self.year.get()
    }

    /// Returns the month number in `1..=12`
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the month's name, e.g. "Eleasis"
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Returns the day of the month.
    ///
    /// Normally `1..=30`; 31 is the special occasion after the month and
    /// 32 is Shieldmeet.
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Whether the date's year holds Shieldmeet
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// The festival this date falls on, if any
    pub const fn festival(&self) -> Option<Festival> {
        festival(self.day.get(), self.month.get())
    }

    /// Name of the day without the year, e.g. "Midsummer, Flamerule"
    pub fn day_name(&self) -> String {
        name_of(self.day.get(), self.month)
    }

    /// Human friendly rendering, e.g. "Eleint 14th, 1372 DR".
    ///
    /// Computed once and cached.
    pub fn display(&self) -> &str {
        self.display
            .get_or_init(|| format!("{}, {} {DALE_RECKONING}", self.day_name(), self.year))
    }

    /// Converts to database columns: (year, month, day)
    pub const fn to_columns(&self) -> (u32, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

impl PartialEq for HarptosDate {
    fn eq(&self, other: &Self) -> bool {
        self.to_columns() == other.to_columns()
    }
}

impl Eq for HarptosDate {}

impl Hash for HarptosDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_columns().hash(state);
    }
}

impl PartialOrd for HarptosDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HarptosDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_columns().cmp(&other.to_columns())
    }
}

impl fmt::Display for HarptosDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl Serialize for HarptosDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("HarptosDate", 5)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("month_name", self.month_name())?;
        state.serialize_field("day", &self.day)?;
        state.serialize_field("display", self.display())?;
        state.end()
    }
}
