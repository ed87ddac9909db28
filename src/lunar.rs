//! The Vietnamese lunar date value type.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::canchi;
use crate::convert;
use crate::lucky_hours::{self, HourWindow};
use crate::solar::SolarDate;
use crate::solar_terms;
use crate::{CalendarError, DEFAULT_TIMEZONE, LUNAR_YEAR_MAX, LUNAR_YEAR_MIN};

/// An immutable Vietnamese lunar calendar date.
///
/// The `is_leap` flag marks the intercalary (nhuận) month that shares
/// its number with the preceding regular month in a 13-month year.
/// Construction validates the quadruple against the actual structure of
/// the year — a leap flag the year cannot carry, or a 30th day in a
/// 29-day month, is rejected — so every constructed value corresponds to
/// a real day.
///
/// # Example
///
/// ```
/// use amlich::LunarDate;
///
/// let trung_thu = LunarDate::new(15, 8, 2024, false).unwrap();
/// let solar = trung_thu.to_solar().unwrap();
/// assert_eq!(solar.to_string(), "17/09/2024");
/// assert_eq!(trung_thu.year_name(), "Giáp Thìn");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    year: i32,
    month: u32,
    day: u32,
    is_leap: bool,
}

impl LunarDate {
    /// Construct a validated lunar date.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::InvalidDate`] when the month is outside 1..=12
    ///   or the day outside 1..=30.
    /// - [`CalendarError::OutOfRange`] when the year lies outside the
    ///   supported window 1899..=2100.
    /// - [`CalendarError::DateNotExist`] when the year does not
    ///   intercalate the named leap month, or the day exceeds the
    ///   month's actual length.
    pub fn new(day: u32, month: u32, year: i32, is_leap: bool) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidDate);
        }
        if !(LUNAR_YEAR_MIN..=LUNAR_YEAR_MAX).contains(&year) {
            return Err(CalendarError::OutOfRange);
        }
        // Existence check against the year's real month table.
        convert::lunar_to_solar(day, month, year, is_leap, DEFAULT_TIMEZONE)?;
        Ok(Self {
            year,
            month,
            day,
            is_leap,
        })
    }

    /// Construct from components already known to name a real day.
    pub(crate) fn from_parts_unchecked(day: u32, month: u32, year: i32, is_leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap,
        }
    }

    /// The lunar date of a solar date at Indochina Time.
    pub fn from_solar(solar: &SolarDate) -> Self {
        solar.to_lunar()
    }

    /// The lunar date of a solar date at the given timezone offset.
    pub fn from_solar_tz(solar: &SolarDate, tz: f64) -> Self {
        solar.to_lunar_tz(tz)
    }

    /// The lunar date of a [`chrono::NaiveDate`] at Indochina Time.
    pub fn from_naive_date(date: NaiveDate) -> Result<Self, CalendarError> {
        Ok(SolarDate::from_naive_date(date)?.to_lunar())
    }

    /// The lunar date of a [`chrono::NaiveDate`] at the given timezone
    /// offset.
    pub fn from_naive_date_tz(date: NaiveDate, tz: f64) -> Result<Self, CalendarError> {
        Ok(SolarDate::from_naive_date(date)?.to_lunar_tz(tz))
    }

    /// Today's lunar date in the system's local timezone.
    pub fn today() -> Result<Self, CalendarError> {
        Ok(SolarDate::today()?.to_lunar())
    }

    /// Lunar day of the month (1..=30).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Lunar month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Lunar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether this is an intercalary (nhuận) month.
    pub fn is_leap(&self) -> bool {
        self.is_leap
    }

    /// Convert back to the solar calendar at Indochina Time.
    ///
    /// # Errors
    ///
    /// [`CalendarError::OutOfRange`] for the few days whose solar
    /// counterpart precedes 1900-01-01 or follows 2100-12-31.
    pub fn to_solar(&self) -> Result<SolarDate, CalendarError> {
        self.to_solar_tz(DEFAULT_TIMEZONE)
    }

    /// Convert back to the solar calendar at the given timezone offset.
    ///
    /// # Errors
    ///
    /// [`CalendarError::DateNotExist`] when the quadruple does not name
    /// a day under this offset; [`CalendarError::OutOfRange`] as for
    /// [`Self::to_solar`].
    pub fn to_solar_tz(&self, tz: f64) -> Result<SolarDate, CalendarError> {
        let (day, month, year) =
            convert::lunar_to_solar(self.day, self.month, self.year, self.is_leap, tz)?;
        SolarDate::new(day, month, year)
    }

    /// Can Chi name of this lunar year.
    pub fn year_name(&self) -> String {
        canchi::year_name(self.year)
    }

    /// Can Chi name of this lunar month.
    pub fn month_name(&self) -> String {
        canchi::month_name(self.month, self.year)
    }

    /// Can Chi name of this day.
    ///
    /// # Errors
    ///
    /// As for [`Self::to_solar`].
    pub fn day_name(&self) -> Result<String, CalendarError> {
        Ok(canchi::day_name(self.to_solar()?.jdn()))
    }

    /// Can Chi name of this day's first double-hour (Giờ Tý).
    ///
    /// # Errors
    ///
    /// As for [`Self::to_solar`].
    pub fn first_hour_name(&self) -> Result<String, CalendarError> {
        Ok(canchi::first_hour_name(self.to_solar()?.jdn()))
    }

    /// Solar term (Tiết Khí) of this day at Indochina Time.
    ///
    /// # Errors
    ///
    /// As for [`Self::to_solar`].
    pub fn solar_term(&self) -> Result<&'static str, CalendarError> {
        Ok(solar_terms::solar_term(self.to_solar()?.jdn(), DEFAULT_TIMEZONE))
    }

    /// The six auspicious double-hours (Giờ Hoàng Đạo) of this day.
    ///
    /// # Errors
    ///
    /// As for [`Self::to_solar`].
    pub fn lucky_hours(&self) -> Result<Vec<HourWindow>, CalendarError> {
        Ok(lucky_hours::lucky_hours(self.to_solar()?.jdn()))
    }

    /// All twelve double-hours of this day with their lucky flags.
    ///
    /// # Errors
    ///
    /// As for [`Self::to_solar`].
    pub fn day_hours(&self) -> Result<[HourWindow; 12], CalendarError> {
        Ok(lucky_hours::day_hours(self.to_solar()?.jdn()))
    }
}

impl Ord for LunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // A leap month follows the regular month of the same number.
        self.year
            .cmp(&other.year)
            .then(self.month.cmp(&other.month))
            .then(self.is_leap.cmp(&other.is_leap))
            .then(self.day.cmp(&other.day))
    }
}

impl PartialOrd for LunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)?;
        if self.is_leap {
            write!(f, " (nhuận)")?;
        }
        Ok(())
    }
}
