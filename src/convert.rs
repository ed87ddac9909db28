//! Solar ↔ lunar conversion: month-11 anchoring and leap-month placement.
//!
//! A lunar year is anchored on the month containing the Winter Solstice,
//! which is always month 11. A year of thirteen lunations inserts one
//! intercalary month: the first month after month 11 whose span crosses
//! no Major Solar Term, named after the month it follows.

use crate::cache;
use crate::ephemeris::{new_moon_day, sun_segment, NEW_MOON_EPOCH, SYNODIC_MONTH};
use crate::julian::{date_from_jdn, jdn_from_date};
use crate::CalendarError;

/// JDN of the New Moon day beginning the lunar month that contains the
/// Winter Solstice of the given solar year. Results are memoized.
pub fn lunar_month_11(year: i32, tz: f64) -> i64 {
    cache::lookup_or_compute(&cache::MONTH_11, (year, tz.to_bits()), || {
        let off = jdn_from_date(31, 12, year) - 2415021;
        let k = (off as f64 / SYNODIC_MONTH).floor() as i64;
        let mut nm = new_moon_day(k, tz);
        // Past segment 9 the solstice already lies behind this New Moon.
        if sun_segment(nm, tz) >= 9 {
            nm = new_moon_day(k - 1, tz);
        }
        nm
    })
}

/// Offset (in lunations from the month-11 anchor `a11`) of the
/// intercalary month in a 13-month lunar year: the first month whose
/// start and successor start share a solar-longitude segment.
pub(crate) fn leap_month_offset(a11: i64, tz: f64) -> i64 {
    let k = ((a11 as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i64;
    let mut last = sun_segment(new_moon_day(k, tz), tz);
    for i in 1..14 {
        let arc = sun_segment(new_moon_day(k + i, tz), tz);
        if i > 1 && arc == last {
            return i - 1;
        }
        last = arc;
    }
    0
}

/// Convert a solar date to `(day, month, year, is_leap)` in the lunar
/// calendar at the given timezone offset.
///
/// This function computes for any input year; the supported-range check
/// lives on the value types.
///
/// # Example
///
/// ```
/// use amlich::convert::solar_to_lunar;
///
/// // Tết Giáp Thìn.
/// assert_eq!(solar_to_lunar(10, 2, 2024, 7.0), (1, 1, 2024, false));
/// ```
pub fn solar_to_lunar(day: u32, month: u32, year: i32, tz: f64) -> (u32, u32, i32, bool) {
    let day_number = jdn_from_date(day, month, year);
    let k = ((day_number as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i64;
    let mut month_start = new_moon_day(k + 1, tz);
    if month_start > day_number {
        month_start = new_moon_day(k, tz);
    }

    let mut a11 = lunar_month_11(year, tz);
    let mut b11 = a11;
    let mut lunar_year = if a11 >= month_start {
        a11 = lunar_month_11(year - 1, tz);
        year
    } else {
        b11 = lunar_month_11(year + 1, tz);
        year + 1
    };

    let lunar_day = (day_number - month_start + 1) as u32;
    let diff = (month_start - a11) / 29;
    let mut lunar_leap = false;
    let mut lunar_month = diff + 11;

    if b11 - a11 > 365 {
        let leap_offset = leap_month_offset(a11, tz);
        if diff >= leap_offset {
            lunar_month = diff + 10;
            if diff == leap_offset {
                lunar_leap = true;
            }
        }
    }
    if lunar_month > 12 {
        lunar_month -= 12;
    }
    if lunar_month >= 11 && diff < 4 {
        lunar_year -= 1;
    }

    (lunar_day, lunar_month as u32, lunar_year, lunar_leap)
}

/// Convert a lunar `(day, month, year, is_leap)` quadruple back to a
/// solar `(day, month, year)` triple at the given timezone offset.
///
/// # Errors
///
/// [`CalendarError::DateNotExist`] when the month is outside 1..=12, the
/// day is outside 1..=30 or beyond the month's actual 29/30-day length,
/// or the leap flag names a month the year does not intercalate.
pub fn lunar_to_solar(
    day: u32,
    month: u32,
    year: i32,
    is_leap: bool,
    tz: f64,
) -> Result<(u32, u32, i32), CalendarError> {
    if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
        return Err(CalendarError::DateNotExist);
    }

    let (a11, b11) = if month < 11 {
        (lunar_month_11(year - 1, tz), lunar_month_11(year, tz))
    } else {
        (lunar_month_11(year, tz), lunar_month_11(year + 1, tz))
    };

    let k = (0.5 + (a11 as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i64;
    let mut off = i64::from(month) - 11;
    if off < 0 {
        off += 12;
    }

    if b11 - a11 > 365 {
        let leap_offset = leap_month_offset(a11, tz);
        let mut leap_month = leap_offset - 2;
        if leap_month < 0 {
            leap_month += 12;
        }
        if is_leap && i64::from(month) != leap_month {
            return Err(CalendarError::DateNotExist);
        }
        if is_leap || off >= leap_offset {
            off += 1;
        }
    } else if is_leap {
        return Err(CalendarError::DateNotExist);
    }

    let month_start = new_moon_day(k + off, tz);
    if i64::from(day) > new_moon_day(k + off + 1, tz) - month_start {
        return Err(CalendarError::DateNotExist);
    }
    Ok(date_from_jdn(month_start + i64::from(day) - 1))
}
