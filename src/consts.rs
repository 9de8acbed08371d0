/// Maximum valid month (Nightal)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Hammer
pub const HAMMER: u8 = 1;
/// Month number for Tarsakh
pub const TARSAKH: u8 = 4;
/// Month number for Flamerule, followed by Midsummer and, in leap years, Shieldmeet
pub const FLAMERULE: u8 = 7;
/// Month number for Eleint
pub const ELEINT: u8 = 9;
/// Month number for Uktar
pub const UKTAR: u8 = 11;
/// Month number for Nightal
pub const NIGHTAL: u8 = 12;

/// Month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",          // index 0 unused (months are 1-indexed)
    "Hammer",    // Deepwinter
    "Alturiak",  // The Claw of Winter
    "Ches",      // The Claw of the Sunsets
    "Tarsakh",   // The Claw of the Storms
    "Mirtul",    // The Melting
    "Kythorn",   // The Time of Flowers
    "Flamerule", // Summertide
    "Eleasis",   // Highsun
    "Eleint",    // The Fading
    "Marpenoth", // Leaffall
    "Uktar",     // The Rotting
    "Nightal",   // The Drawing Down
];

/// Days in every month before any special occasion is attached
pub const BASE_MONTH_DAYS: u8 = 30;

/// Day number a special occasion takes at the end of its preceding month
pub const SPECIAL_OCCASION_DAY: u8 = 31;

/// Day number Shieldmeet takes at the end of Flamerule in leap years
pub const SHIELDMEET_DAY: u8 = 32;

/// Days in a common year
pub const COMMON_YEAR_DAYS: u16 = 365;
/// Days in a leap year, Shieldmeet included
pub const LEAP_YEAR_DAYS: u16 = 366;

/// Shieldmeet occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;

/// Days in any 4 consecutive years, exactly one of them leap
pub(crate) const LEAP_CYCLE_DAYS: u64 = 3 * COMMON_YEAR_DAYS as u64 + LEAP_YEAR_DAYS as u64;

/// Seconds in a day, used when mapping real-world instants
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Era suffix appended to every rendered year
pub const DALE_RECKONING: &str = "DR";
