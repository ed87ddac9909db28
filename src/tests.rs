#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests against historically attested calendar data.

use crate::convert::{lunar_to_solar, solar_to_lunar};
use crate::{CalendarError, LunarDate, SolarDate, DEFAULT_TIMEZONE};


const TZ: f64 = DEFAULT_TIMEZONE;

#[test]
fn tet_nguyen_dan_2020_to_2030() {
    let tet_dates = [
        (25, 1, 2020),
        (12, 2, 2021),
        (1, 2, 2022),
        (22, 1, 2023),
        (10, 2, 2024),
        (29, 1, 2025),
        (17, 2, 2026),
        (6, 2, 2027),
        (26, 1, 2028),
        (13, 2, 2029),
        (2, 2, 2030),
    ];
    for (d, m, y) in tet_dates {
        let solar = SolarDate::new(d, m, y).unwrap();
        let lunar = solar.to_lunar();
        assert_eq!(lunar, LunarDate::new(1, 1, y, false).unwrap(), "Tết {y}");
        assert_eq!(lunar.to_solar().unwrap(), solar, "Tết {y} reverse");
    }
}

#[test]
fn trung_thu_mid_autumn_festival() {
    let expected = [
        (2020, (1, 10, 2020)),
        (2021, (21, 9, 2021)),
        (2022, (10, 9, 2022)),
        (2023, (29, 9, 2023)),
        (2024, (17, 9, 2024)),
    ];
    for (year, (d, m, y)) in expected {
        let trung_thu = LunarDate::new(15, 8, year, false).unwrap();
        assert_eq!(
            trung_thu.to_solar().unwrap(),
            SolarDate::new(d, m, y).unwrap(),
            "Trung Thu {year}"
        );
    }
}

#[test]
fn leap_month_4_of_2020_boundaries() {
    let cases = [
        ((22, 5, 2020), (30, 4, 2020, false)),
        ((23, 5, 2020), (1, 4, 2020, true)),
        ((20, 6, 2020), (29, 4, 2020, true)),
        ((21, 6, 2020), (1, 5, 2020, false)),
    ];
    for ((sd, sm, sy), (ld, lm, ly, leap)) in cases {
        let lunar = SolarDate::new(sd, sm, sy).unwrap().to_lunar();
        assert_eq!(
            (lunar.day(), lunar.month(), lunar.year(), lunar.is_leap()),
            (ld, lm, ly, leap)
        );
    }
}

#[test]
fn leap_month_2_of_2023_boundaries() {
    // Regular month 2 runs 20 Feb – 21 Mar, the intercalary month 2
    // opens 22 Mar.
    let regular = SolarDate::new(20, 2, 2023).unwrap().to_lunar();
    assert_eq!(regular, LunarDate::new(1, 2, 2023, false).unwrap());
    let leap = SolarDate::new(22, 3, 2023).unwrap().to_lunar();
    assert_eq!(leap, LunarDate::new(1, 2, 2023, true).unwrap());
    assert_eq!(
        leap.to_solar().unwrap(),
        SolarDate::new(22, 3, 2023).unwrap()
    );
}

#[test]
fn solar_term_scenarios() {
    assert_eq!(SolarDate::new(21, 6, 2020).unwrap().solar_term(), "Hạ chí");
    assert_eq!(SolarDate::new(22, 9, 2020).unwrap().solar_term(), "Thu phân");
    assert_eq!(SolarDate::new(21, 12, 2024).unwrap().solar_term(), "Đông chí");
    assert_eq!(SolarDate::new(20, 3, 2024).unwrap().solar_term(), "Xuân phân");
    // Lunar dates expose the same lookup.
    let tet = LunarDate::new(1, 1, 2024, false).unwrap();
    assert_eq!(tet.solar_term().unwrap(), "Lập xuân");
}

#[test]
fn lucky_hours_of_a_ty_day() {
    // 2024-01-01 has day branch Tý.
    let lunar = SolarDate::new(1, 1, 2024).unwrap().to_lunar();
    let hours = lunar.lucky_hours().unwrap();
    let branches: Vec<_> = hours.iter().map(|h| h.branch).collect();
    assert_eq!(branches, ["Tý", "Sửu", "Mão", "Ngọ", "Thân", "Dậu"]);
    assert!(hours.iter().all(|h| h.is_lucky));

    let all = lunar.day_hours().unwrap();
    assert_eq!(all.len(), 12);
    assert_eq!(all.iter().filter(|h| h.is_lucky).count(), 6);
}

#[test]
fn canchi_names_for_tet_2024() {
    let lunar = SolarDate::new(10, 2, 2024).unwrap().to_lunar();
    assert_eq!(lunar.year_name(), "Giáp Thìn");
    assert_eq!(lunar.month_name(), "Bính Dần");
    assert_eq!(lunar.day_name().unwrap(), "Giáp Thìn");
    assert_eq!(lunar.first_hour_name().unwrap(), "Giáp Tý");
}

#[test]
fn hour_info_through_the_solar_surface() {
    let date = SolarDate::new(11, 7, 1989).unwrap();
    let info = date.hour_info(3).unwrap();
    assert_eq!(info.name(), "Nhâm Dần");
    assert_eq!((info.start_hour, info.end_hour), (3, 5));
}

#[test]
fn supported_window_edges() {
    // The first supported solar day belongs to lunar December 1899.
    let first = SolarDate::new(1, 1, 1900).unwrap().to_lunar();
    assert_eq!(first, LunarDate::new(1, 12, 1899, false).unwrap());
    assert_eq!(
        first.to_solar().unwrap(),
        SolarDate::new(1, 1, 1900).unwrap()
    );

    // The last supported solar day opens lunar December 2100.
    let last = SolarDate::new(31, 12, 2100).unwrap().to_lunar();
    assert_eq!((last.day(), last.month(), last.year()), (1, 12, 2100));
}

#[test]
fn error_taxonomy_is_distinguishable() {
    assert_eq!(
        SolarDate::new(30, 2, 2024),
        Err(CalendarError::InvalidDate)
    );
    assert_eq!(SolarDate::new(1, 1, 1850), Err(CalendarError::OutOfRange));
    assert_eq!(
        LunarDate::new(1, 4, 2024, true),
        Err(CalendarError::DateNotExist)
    );
    // Errors render as distinct, actionable messages.
    let messages: std::collections::HashSet<String> = [
        CalendarError::InvalidDate,
        CalendarError::OutOfRange,
        CalendarError::DateNotExist,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(messages.len(), 3);
}

#[test]
fn free_functions_compute_outside_the_window() {
    // Advisory results outside 1900..=2100 stay deterministic.
    assert_eq!(solar_to_lunar(21, 1, 1890, TZ), (1, 1, 1890, false));
    let forward = solar_to_lunar(1, 6, 2150, TZ);
    let back = lunar_to_solar(forward.0, forward.1, forward.2, forward.3, TZ).unwrap();
    assert_eq!(back, (1, 6, 2150));
}

#[test]
fn non_integer_timezones_propagate() {
    // Rangoon time (UTC+6:30) can shift a month boundary relative to ICT.
    let ict = solar_to_lunar(23, 5, 2020, 7.0);
    let mmt = solar_to_lunar(23, 5, 2020, 6.5);
    assert_eq!(ict.1, mmt.1);
    // Either way the reverse conversion restores the solar date.
    let back = lunar_to_solar(mmt.0, mmt.1, mmt.2, mmt.3, 6.5).unwrap();
    assert_eq!(back, (23, 5, 2020));
}

#[test]
fn conversions_are_thread_safe() {
    // The memoization caches are the only shared state; hammer them from
    // several threads and check agreement with the single-threaded result.
    let expected = solar_to_lunar(17, 9, 2024, TZ);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                for _ in 0..50 {
                    assert_eq!(solar_to_lunar(17, 9, 2024, TZ), expected);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
