//! Tiết Khí — the 24 solar terms.
//!
//! A term covers a 15° arc of the Sun's apparent ecliptic longitude. The
//! term of a civil day is read from the arc the Sun occupies at the
//! local midnight closing that day, hence the `jdn + 1` offset.

use crate::ephemeris::sun_segment_24;
use crate::julian::{date_from_jdn, jdn_from_date};
use crate::tables::SOLAR_TERMS;

/// Index (0..=23) into [`SOLAR_TERMS`] for the day with the given JDN.
pub fn solar_term_index(jdn: i64, tz: f64) -> usize {
    sun_segment_24(jdn + 1, tz) as usize
}

/// Vietnamese name of the solar term governing the given day.
///
/// # Example
///
/// ```
/// use amlich::solar_terms::solar_term;
/// use amlich::julian::jdn_from_date;
///
/// assert_eq!(solar_term(jdn_from_date(21, 6, 2020), 7.0), "Hạ chí");
/// assert_eq!(solar_term(jdn_from_date(22, 9, 2020), 7.0), "Thu phân");
/// ```
pub fn solar_term(jdn: i64, tz: f64) -> &'static str {
    SOLAR_TERMS[solar_term_index(jdn, tz)]
}

/// One solar-term boundary: the first civil day governed by a new term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermEvent {
    /// Term name.
    pub name: &'static str,
    /// Index into [`SOLAR_TERMS`].
    pub index: usize,
    /// JDN of the first day under the term.
    pub jdn: i64,
    /// Solar day of month.
    pub day: u32,
    /// Solar month.
    pub month: u32,
    /// Solar year.
    pub year: i32,
}

/// All solar-term boundaries falling inside a solar year, in
/// chronological order (normally 24 of them).
pub fn solar_terms_in_year(year: i32, tz: f64) -> Vec<SolarTermEvent> {
    let start = jdn_from_date(1, 1, year);
    let end = jdn_from_date(31, 12, year);

    let mut events = Vec::with_capacity(24);
    let mut previous = solar_term_index(start - 1, tz);
    for jdn in start..=end {
        let index = solar_term_index(jdn, tz);
        if index != previous {
            let (day, month, year) = date_from_jdn(jdn);
            events.push(SolarTermEvent {
                name: SOLAR_TERMS[index],
                index,
                jdn,
                day,
                month,
                year,
            });
            previous = index;
        }
    }
    events
}
