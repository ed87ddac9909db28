//! The solar (Gregorian) date value type.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::canchi::{self, HourInfo};
use crate::convert;
use crate::julian::{self, date_from_jdn, jdn_from_date};
use crate::lunar::LunarDate;
use crate::solar_terms;
use crate::{CalendarError, DEFAULT_TIMEZONE, SOLAR_YEAR_MAX, SOLAR_YEAR_MIN};

/// An immutable solar (Gregorian) calendar date.
///
/// Values are validated once at construction and never change; equality,
/// ordering and hashing follow the `(year, month, day)` tuple, so dates
/// are safe as map keys and across threads.
///
/// # Example
///
/// ```
/// use amlich::SolarDate;
///
/// let tet = SolarDate::new(10, 2, 2024).unwrap();
/// let lunar = tet.to_lunar();
/// assert_eq!((lunar.day(), lunar.month(), lunar.year()), (1, 1, 2024));
/// assert_eq!(tet.day_name(), "Giáp Thìn");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl SolarDate {
    /// Construct a validated solar date.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::InvalidDate`] when the month is outside 1..=12
    ///   or the day exceeds the month's length.
    /// - [`CalendarError::OutOfRange`] when the year lies outside the
    ///   supported window 1900..=2100.
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || day < 1 || day > julian::days_in_month(month, year) {
            return Err(CalendarError::InvalidDate);
        }
        if !(SOLAR_YEAR_MIN..=SOLAR_YEAR_MAX).contains(&year) {
            return Err(CalendarError::OutOfRange);
        }
        Ok(Self { year, month, day })
    }

    /// Construct from a Julian Day Number.
    ///
    /// # Errors
    ///
    /// [`CalendarError::OutOfRange`] when the JDN falls outside the
    /// supported window.
    pub fn from_jdn(jdn: i64) -> Result<Self, CalendarError> {
        let (day, month, year) = date_from_jdn(jdn);
        Self::new(day, month, year)
    }

    /// Construct from a [`chrono::NaiveDate`].
    pub fn from_naive_date(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(date.day(), date.month(), date.year())
    }

    /// Today's date in the system's local timezone.
    pub fn today() -> Result<Self, CalendarError> {
        Self::from_naive_date(chrono::Local::now().date_naive())
    }

    /// Day of the month (1..=31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        jdn_from_date(self.day, self.month, self.year)
    }

    /// Convert to a [`chrono::NaiveDate`].
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Convert to the lunar calendar at Indochina Time (UTC+7).
    pub fn to_lunar(&self) -> LunarDate {
        self.to_lunar_tz(DEFAULT_TIMEZONE)
    }

    /// Convert to the lunar calendar at the given timezone offset.
    pub fn to_lunar_tz(&self, tz: f64) -> LunarDate {
        let (day, month, year, is_leap) = convert::solar_to_lunar(self.day, self.month, self.year, tz);
        LunarDate::from_parts_unchecked(day, month, year, is_leap)
    }

    /// Solar term (Tiết Khí) of this date at Indochina Time.
    pub fn solar_term(&self) -> &'static str {
        self.solar_term_tz(DEFAULT_TIMEZONE)
    }

    /// Solar term of this date at the given timezone offset.
    pub fn solar_term_tz(&self, tz: f64) -> &'static str {
        solar_terms::solar_term(self.jdn(), tz)
    }

    /// Can Chi name of this day.
    pub fn day_name(&self) -> String {
        canchi::day_name(self.jdn())
    }

    /// Can Chi name of this day's first double-hour (Giờ Tý).
    pub fn first_hour_name(&self) -> String {
        canchi::first_hour_name(self.jdn())
    }

    /// Can Chi information for a clock hour (0..=23) of this date.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidDate`] when the hour exceeds 23.
    pub fn hour_info(&self, hour: u32) -> Result<HourInfo, CalendarError> {
        canchi::hour_info(hour, self.day, self.month, self.year)
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_month_and_day() {
        assert!(SolarDate::new(1, 1, 2024).is_ok());
        assert_eq!(SolarDate::new(32, 1, 2024), Err(CalendarError::InvalidDate));
        assert_eq!(SolarDate::new(1, 13, 2024), Err(CalendarError::InvalidDate));
        assert_eq!(SolarDate::new(0, 1, 2024), Err(CalendarError::InvalidDate));
        assert_eq!(SolarDate::new(29, 2, 2023), Err(CalendarError::InvalidDate));
        assert!(SolarDate::new(29, 2, 2024).is_ok());
    }

    #[test]
    fn enforces_supported_window() {
        assert!(SolarDate::new(1, 1, 1900).is_ok());
        assert!(SolarDate::new(31, 12, 2100).is_ok());
        assert_eq!(SolarDate::new(31, 12, 1899), Err(CalendarError::OutOfRange));
        assert_eq!(SolarDate::new(1, 1, 2101), Err(CalendarError::OutOfRange));
    }

    #[test]
    fn jdn_roundtrip() {
        let date = SolarDate::new(10, 2, 2024).unwrap();
        assert_eq!(date.jdn(), 2460351);
        assert_eq!(SolarDate::from_jdn(2460351), Ok(date));
    }

    #[test]
    fn naive_date_interop() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let date = SolarDate::from_naive_date(naive).unwrap();
        assert_eq!(date.to_naive_date(), Some(naive));
    }

    #[test]
    fn ordering_is_by_tuple() {
        let a = SolarDate::new(31, 12, 2023).unwrap();
        let b = SolarDate::new(1, 1, 2024).unwrap();
        let c = SolarDate::new(2, 1, 2024).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn displays_as_dd_mm_yyyy() {
        assert_eq!(SolarDate::new(5, 1, 2024).unwrap().to_string(), "05/01/2024");
    }
}
