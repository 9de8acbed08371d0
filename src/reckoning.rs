//! Maps real-world instants onto the Harptos calendar.
//!
//! A campaign fixes an era: a Unix day on which the first of Hammer of
//! `era_year` began, plus shifts that line the day boundary up with the
//! players' evening. Everything here is configuration supplied by the
//! caller; the defaults reproduce the long-running campaign clock that
//! began in 1375 DR.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DALE_RECKONING, SECONDS_PER_DAY};
use crate::date::HarptosDate;
use crate::resolver::walk_cycles;
use crate::types::Year;
use crate::DateError;

/// Epoch configuration for [`Reckoning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReckoningConfig {
    /// Dale Reckoning year in which the era begins
    pub era_year: u32,
    /// Days between the Unix epoch and the era's first day
    pub era_start_day: i64,
    /// Whole days added to the instant before counting
    pub day_shift: i64,
    /// Fixed offset from UTC, in seconds
    pub utc_offset_seconds: i64,
    /// Subtracted from the DR year to give the setting's own year count
    pub year_adjustment: i64,
}

impl Default for ReckoningConfig {
    fn default() -> Self {
        Self {
            era_year: 1375,
            era_start_day: 12_886,
            day_shift: -53,
            utc_offset_seconds: -18_000,
            year_adjustment: 1222,
        }
    }
}

/// Converts instants to Harptos dates under a fixed [`ReckoningConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reckoning {
    config: ReckoningConfig,
}

impl Reckoning {
    /// Creates a reckoning over the given era
    pub const fn new(config: ReckoningConfig) -> Self {
        Self { config }
    }

    /// Returns the era configuration
    pub const fn config(&self) -> &ReckoningConfig {
        &self.config
    }

    /// Day count of `instant` within the era; the era's first day is 1.
    ///
    /// Saturates at the bounds of `i64` for extreme configurations.
    pub fn days_since_era(&self, instant: DateTime<Utc>) -> i64 {
        let seconds = instant
            .timestamp()
            .saturating_add(self.config.utc_offset_seconds)
            .saturating_add(self.config.day_shift.saturating_mul(SECONDS_PER_DAY));
        seconds
            .div_euclid(SECONDS_PER_DAY)
            .saturating_sub(self.config.era_start_day)
    }

    /// The Harptos date at `instant`.
    ///
    /// Counts forward from the era year with exact leap handling.
    ///
    /// # Errors
    /// Returns `DateError::BeforeEra` if `instant` falls before the era's
    /// first day, `DateError::InvalidYear` if the era year is 0 and
    /// `DateError::YearOverflow` if the date lies past year `u32::MAX`.
    pub fn date_at(&self, instant: DateTime<Utc>) -> Result<HarptosDate, DateError> {
        let era_year = Year::new(self.config.era_year)?;
        let days = self.days_since_era(instant);
        let remaining = match u64::try_from(days) {
            Ok(remaining) if remaining >= 1 => remaining,
            _ => return Err(DateError::BeforeEra { days }),
        };

        let date = walk_cycles(era_year.get(), remaining)?;
        debug!(%instant, days, date = date.display(), "reckoned instant");
        Ok(date)
    }

    /// Banner line for `instant`, e.g.
    /// `::[ Midsummer, Flamerule : Year 154 : 1376 DR ]::`.
    ///
    /// # Errors
    /// Same as [`Reckoning::date_at`].
    pub fn banner_at(&self, instant: DateTime<Utc>) -> Result<String, DateError> {
        let date = self.date_at(instant)?;
        let setting_year = i64::from(date.year()) - self.config.year_adjustment;
        Ok(format!(
            "::[ {} : Year {setting_year} : {} {DALE_RECKONING} ]::",
            date.day_name(),
            date.year()
        ))
    }

    /// The Harptos date right now.
    ///
    /// # Errors
    /// Same as [`Reckoning::date_at`].
    pub fn now(&self) -> Result<HarptosDate, DateError> {
        self.date_at(Utc::now())
    }

    /// Banner line for right now.
    ///
    /// # Errors
    /// Same as [`Reckoning::date_at`].
    pub fn banner_now(&self) -> Result<String, DateError> {
        self.banner_at(Utc::now())
    }
}
