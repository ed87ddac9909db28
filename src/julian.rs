//! Julian Day Number conversions.
//!
//! Integer day arithmetic bridging the Gregorian reform: dates from
//! 1582-10-15 onward use the Gregorian calendar, earlier dates the Julian
//! calendar. The Julian Day Number counts days from noon, 1 January
//! 4713 BC (proleptic Julian).

/// First JDN of the Gregorian calendar (1582-10-15).
const GREGORIAN_START_JDN: i64 = 2_299_161;

/// Compute the Julian Day Number for a calendar date.
///
/// Dates on or after 1582-10-15 are interpreted as Gregorian, earlier
/// dates as Julian.
///
/// # Example
///
/// ```
/// use amlich::julian::jdn_from_date;
///
/// assert_eq!(jdn_from_date(1, 1, 2000), 2451545);
/// assert_eq!(jdn_from_date(10, 2, 2024), 2460351);
/// ```
pub fn jdn_from_date(day: u32, month: u32, year: i32) -> i64 {
    let (day, month, year) = (i64::from(day), i64::from(month), i64::from(year));
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let jd = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    if jd < GREGORIAN_START_JDN {
        // Julian calendar branch
        day + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083
    } else {
        jd
    }
}

/// Convert a Julian Day Number back to a calendar date.
///
/// Returns `(day, month, year)`. JDNs above 2299160 are reduced in the
/// Gregorian calendar, the rest in the Julian calendar.
///
/// # Example
///
/// ```
/// use amlich::julian::date_from_jdn;
///
/// assert_eq!(date_from_jdn(2451545), (1, 1, 2000));
/// ```
pub fn date_from_jdn(jdn: i64) -> (u32, u32, i32) {
    let (b, c) = if jdn > GREGORIAN_START_JDN - 1 {
        let a = jdn + 32044;
        let b = (4 * a + 3) / 146097;
        (b, a - (b * 146097) / 4)
    } else {
        (0, jdn + 32082)
    };

    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = b * 100 + d - 4800 + m / 10;

    (day as u32, month as u32, year as i32)
}

/// Gregorian leap-year rule.
pub(crate) fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a calendar month, honoring the Julian leap rule
/// before the Gregorian reform.
pub(crate) fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = if year > 1582 {
                is_gregorian_leap_year(year)
            } else {
                year % 4 == 0
            };
            if leap {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_jdn_anchors() {
        // Source: https://aa.usno.navy.mil/data/JulianDate
        assert_eq!(jdn_from_date(1, 1, 2000), 2451545);
        assert_eq!(jdn_from_date(1, 1, 1970), 2440588);
        assert_eq!(jdn_from_date(2, 9, 1945), 2431701);
        assert_eq!(jdn_from_date(1, 1, 1900), 2415021);
    }

    #[test]
    fn gregorian_reform_boundary() {
        // 1582-10-15 (Gregorian) immediately follows 1582-10-04 (Julian).
        assert_eq!(jdn_from_date(15, 10, 1582), 2299161);
        assert_eq!(jdn_from_date(4, 10, 1582), 2299160);
        assert_eq!(date_from_jdn(2299161), (15, 10, 1582));
        assert_eq!(date_from_jdn(2299160), (4, 10, 1582));
    }

    #[test]
    fn roundtrip_supported_range() {
        let start = jdn_from_date(1, 1, 1900);
        let end = jdn_from_date(31, 12, 2100);
        for jdn in start..=end {
            let (d, m, y) = date_from_jdn(jdn);
            assert_eq!(jdn_from_date(d, m, y), jdn, "roundtrip failed at {d}/{m}/{y}");
        }
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(2, 2023), 28);
        assert_eq!(days_in_month(2, 1900), 28); // century rule
        assert_eq!(days_in_month(2, 2000), 29);
        assert_eq!(days_in_month(2, 1500), 29); // Julian rule before the reform
    }
}
