//! Can Chi (Sexagenary cycle) names for years, months, days and hours.
//!
//! A name pairs one of the 10 Heavenly Stems (Can) with one of the 12
//! Earthly Branches (Chi); the pairing repeats every 60 units. All index
//! arithmetic uses Euclidean remainders so negative years and early JDNs
//! stay well-defined.

use crate::julian::jdn_from_date;
use crate::lucky_hours;
use crate::tables::{BRANCHES, STEMS};
use crate::CalendarError;

fn stem(index: i64) -> &'static str {
    STEMS[index.rem_euclid(10) as usize]
}

fn branch(index: i64) -> &'static str {
    BRANCHES[index.rem_euclid(12) as usize]
}

/// Can Chi name of a lunar year.
///
/// # Example
///
/// ```
/// use amlich::canchi::year_name;
///
/// assert_eq!(year_name(2024), "Giáp Thìn");
/// assert_eq!(year_name(2023), "Quý Mão");
/// ```
pub fn year_name(year: i32) -> String {
    let year = i64::from(year);
    format!("{} {}", stem(year + 6), branch(year + 8))
}

/// Can Chi name of a lunar month. Month 1 always carries the branch Dần.
///
/// # Example
///
/// ```
/// use amlich::canchi::month_name;
///
/// assert_eq!(month_name(1, 2024), "Bính Dần");
/// ```
pub fn month_name(month: u32, year: i32) -> String {
    let (month, year) = (i64::from(month), i64::from(year));
    format!("{} {}", stem(year * 12 + month + 3), branch(month + 1))
}

/// Can Chi name of the day with the given Julian Day Number.
pub fn day_name(jdn: i64) -> String {
    format!("{} {}", stem(jdn + 9), branch(jdn + 1))
}

/// Can Chi name of Giờ Tý, the first double-hour of the day (23:00 of
/// the previous civil day through 01:00).
pub fn first_hour_name(jdn: i64) -> String {
    format!("{} {}", stem((jdn - 1) * 2), BRANCHES[0])
}

/// Map a clock hour (0..=23) to its double-hour branch index (0..=11).
///
/// # Errors
///
/// [`CalendarError::InvalidDate`] when the hour exceeds 23.
pub fn hour_branch_index(hour: u32) -> Result<usize, CalendarError> {
    if hour > 23 {
        return Err(CalendarError::InvalidDate);
    }
    Ok(((hour as usize + 1) / 2) % 12)
}

/// Can Chi information for one clock hour of a solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourInfo {
    /// Heavenly Stem of the double-hour.
    pub stem: &'static str,
    /// Earthly Branch of the double-hour.
    pub branch: &'static str,
    /// Wall-clock hour opening the double-hour.
    pub start_hour: u32,
    /// Wall-clock hour closing the double-hour (exclusive).
    pub end_hour: u32,
    /// Whether this is a Hoàng Đạo (auspicious) hour.
    pub is_lucky: bool,
}

impl HourInfo {
    /// Full "Can Chi" name of the hour.
    pub fn name(&self) -> String {
        format!("{} {}", self.stem, self.branch)
    }
}

/// Full Can Chi information for a clock hour on a solar date.
///
/// Hour 23 belongs to the following day's Tý hour: the stem of 23:00 on
/// day D equals the stem of 00:00 on day D + 1.
///
/// # Errors
///
/// [`CalendarError::InvalidDate`] when the hour exceeds 23.
pub fn hour_info(hour: u32, day: u32, month: u32, year: i32) -> Result<HourInfo, CalendarError> {
    let segment = hour_branch_index(hour)?;
    let mut jdn = jdn_from_date(day, month, year);
    if hour >= 23 {
        jdn += 1;
    }

    // The stem advances one step per double-hour from the Tý stem.
    let stem_index = (jdn - 1) * 2 + segment as i64;
    let (start_hour, end_hour) = lucky_hours::hour_window(segment);

    Ok(HourInfo {
        stem: stem(stem_index),
        branch: BRANCHES[segment],
        start_hour,
        end_hour,
        is_lucky: lucky_hours::is_lucky(jdn, segment),
    })
}
