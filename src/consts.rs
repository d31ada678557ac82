/// Minimum supported ISO year (inclusive)
pub const MIN_YEAR: i32 = -999_999_999;
/// Maximum supported ISO year (inclusive)
pub const MAX_YEAR: i32 = 999_999_999;

/// Epoch day of `-999999999-01-01`
pub const MIN_EPOCH_DAY: i64 = -365_243_219_162;
/// Epoch day of `+999999999-12-31`
pub const MAX_EPOCH_DAY: i64 = 365_241_780_471;

/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Largest day-of-month in any month
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in February for common years
pub const FEBRUARY_DAYS_COMMON: u8 = 28;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

pub(crate) const DAYS_PER_WEEK: i64 = 7;
pub(crate) const DAYS_IN_COMMON_YEAR: u16 = 365;
pub(crate) const DAYS_IN_LEAP_YEAR: u16 = 366;
/// Days in one 400 year Gregorian cycle
pub(crate) const DAYS_PER_CYCLE: i64 = 146_097;
/// Days from `0000-01-01` to `1970-01-01`
pub(crate) const DAYS_0000_TO_1970: i64 = DAYS_PER_CYCLE * 5 - (30 * 365 + 7);

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Prefix of the ISO 8601 reduced-precision month-day form (`--MM-DD`)
pub const MONTH_DAY_PREFIX: &str = "--";
/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Type discriminator written ahead of the serialized month-day fields
pub const MONTH_DAY_TAG: u8 = 64;
