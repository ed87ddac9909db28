//! # amlich
//!
//! Vietnamese lunisolar calendar (Âm lịch) computations: conversion
//! between Gregorian solar dates and Vietnamese lunar dates, Can Chi
//! (Sexagenary cycle) names, the 24 solar terms (Tiết Khí) and the daily
//! lucky hours (Giờ Hoàng Đạo).
//!
//! The lunar calendar is derived astronomically — mean New Moon instants
//! and the Sun's apparent ecliptic longitude (Meeus, 1998) locate month
//! boundaries, anchor month 11 on the Winter Solstice and place the
//! intercalary month — evaluated at a configurable timezone offset that
//! defaults to Indochina Time (UTC+7). Results are correct for solar
//! dates from 1900-01-01 through 2100-12-31.
//!
//! ## Basic usage
//!
//! ```
//! use amlich::{LunarDate, SolarDate};
//!
//! // Tết Nguyên Đán 2024.
//! let solar = SolarDate::new(10, 2, 2024).unwrap();
//! let lunar = solar.to_lunar();
//!
//! assert_eq!(lunar, LunarDate::new(1, 1, 2024, false).unwrap());
//! assert_eq!(lunar.year_name(), "Giáp Thìn");
//! assert_eq!(lunar.month_name(), "Bính Dần");
//! assert_eq!(lunar.to_solar().unwrap(), solar);
//! ```
//!
//! Leap months carry a flag distinguishing them from the regular month
//! of the same number:
//!
//! ```
//! use amlich::SolarDate;
//!
//! // 2023 intercalates a second month 2.
//! let leap_start = SolarDate::new(22, 3, 2023).unwrap().to_lunar();
//! assert_eq!(leap_start.to_string(), "01/02/2023 (nhuận)");
//! ```
//!
//! The lower-level algorithm layer ([`julian`], [`ephemeris`],
//! [`convert`], [`canchi`], [`solar_terms`], [`lucky_hours`]) is public
//! as well; it computes deterministically for any input year, while the
//! two value types enforce the supported range.
//!
//! All functions are pure: the only process-wide state is a set of
//! bounded memoization caches, which are safe to share across threads
//! and never change observable results.

use thiserror::Error;

mod cache;
pub mod canchi;
pub mod convert;
pub mod ephemeris;
pub mod julian;
pub mod lucky_hours;
mod lunar;
mod solar;
pub mod solar_terms;
pub mod tables;

#[cfg(test)]
mod tests;

pub use canchi::HourInfo;
pub use lucky_hours::HourWindow;
pub use lunar::LunarDate;
pub use solar::SolarDate;
pub use solar_terms::SolarTermEvent;

/// Default timezone offset in hours: Indochina Time (UTC+7).
pub const DEFAULT_TIMEZONE: f64 = 7.0;

/// First solar year of the supported range.
pub const SOLAR_YEAR_MIN: i32 = 1900;
/// Last solar year of the supported range.
pub const SOLAR_YEAR_MAX: i32 = 2100;

/// First lunar year of the supported range (reachable from solar
/// January 1900).
pub const LUNAR_YEAR_MIN: i32 = 1899;
/// Last lunar year of the supported range.
pub const LUNAR_YEAR_MAX: i32 = 2100;

/// Errors surfaced by date construction and conversion.
///
/// The core math never fails; validation happens once, in the value-type
/// constructors and in [`convert::lunar_to_solar`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    /// Solar or lunar components violate basic range or per-month day
    /// count (month outside 1..=12, day 0, February 30, ...).
    #[error("invalid date components")]
    InvalidDate,

    /// Year outside the supported window (solar 1900..=2100, lunar
    /// 1899..=2100).
    #[error("year outside the supported range")]
    OutOfRange,

    /// A lunar quadruple that names no real day: a leap month the year
    /// does not intercalate, or a day beyond the month's 29/30-day
    /// length.
    #[error("date does not exist in the lunar calendar")]
    DateNotExist,
}
