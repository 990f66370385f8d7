//! Golden-value tests for solar-longitude crossings.
//!
//! Reference instants are published almanac times (UTC), rounded to the minute.

use manse_ephem::{Ephemeris, SolarEphemeris, normalize_to_pm180};
use manse_time::{CivilTime, calendar_to_jd};

fn jd_utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
    CivilTime::new(year, month, day, hour, minute, 0.0).to_jd()
}

fn assert_within_minutes(found: f64, expected: f64, minutes: f64, label: &str) {
    let diff = (found - expected) * 1440.0;
    assert!(
        diff.abs() <= minutes,
        "{label}: off by {diff:.2} min ({})",
        CivilTime::from_jd(found)
    );
}

#[test]
fn march_equinox_2024() {
    let eph = SolarEphemeris::default();
    let jd = eph
        .solar_longitude_crossing(0.0, calendar_to_jd(2024, 3, 1.0))
        .unwrap();
    assert_within_minutes(jd, jd_utc(2024, 3, 20, 3, 6), 3.0, "equinox");
}

#[test]
fn start_of_spring_2024() {
    let eph = SolarEphemeris::default();
    let jd = eph
        .solar_longitude_crossing(315.0, calendar_to_jd(2024, 1, 1.0) - 5.0)
        .unwrap();
    assert_within_minutes(jd, jd_utc(2024, 2, 4, 8, 27), 3.0, "start of spring");
}

#[test]
fn solstices_2024() {
    let eph = SolarEphemeris::default();
    let june = eph
        .solar_longitude_crossing(90.0, calendar_to_jd(2024, 6, 1.0))
        .unwrap();
    assert_within_minutes(june, jd_utc(2024, 6, 20, 20, 51), 3.0, "June solstice");
    let december = eph
        .solar_longitude_crossing(270.0, calendar_to_jd(2024, 12, 1.0))
        .unwrap();
    assert_within_minutes(december, jd_utc(2024, 12, 21, 9, 20), 3.0, "December solstice");
}

#[test]
fn every_fifteen_degrees_in_order() {
    let eph = SolarEphemeris::default();
    let mut cursor = calendar_to_jd(2023, 3, 1.0);
    let mut previous = cursor;
    for k in 0..24 {
        let lon = (k * 15) as f64;
        let jd = eph.solar_longitude_crossing(lon, cursor).unwrap();
        assert!(jd > previous, "term {lon} not after previous");
        assert!(normalize_to_pm180(eph.solar_longitude(jd) - lon).abs() < 1e-6);
        let gap = jd - previous;
        if k > 0 {
            assert!((14.0..16.5).contains(&gap), "gap {gap} before {lon}");
        }
        previous = jd;
        cursor = jd + 1.0;
    }
}

#[test]
fn trait_civil_conversions_roundtrip() {
    let eph = SolarEphemeris::default();
    let jd = eph.civil_to_jd_ut(1990, 1, 1, 3.0);
    let civil = eph.jd_to_civil(jd);
    assert_eq!((civil.year, civil.month, civil.day, civil.hour), (1990, 1, 1, 3));
}
