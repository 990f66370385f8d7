//! Civil time → UTC → local apparent solar time.

use chrono::{LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use manse_ephem::Ephemeris;
use manse_time::{MINUTES_PER_DAY, SECONDS_PER_DAY, naive_to_jd};
use tracing::{debug, warn};

use crate::diagnostics::Warning;
use crate::error::ChartError;
use crate::request::{ChartRequest, TimeBasis};
use crate::zone::ZoneResolver;

/// Seconds of time per degree of longitude.
pub const SECONDS_PER_DEGREE: f64 = 240.0;

/// Clock the birth time was read on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputClock {
    Zone(Tz),
    LocalMean { longitude: f64 },
}

impl InputClock {
    /// Offset of this clock from UTC at a UTC instant, seconds.
    pub fn offset_seconds(&self, utc: &NaiveDateTime) -> f64 {
        match self {
            Self::Zone(tz) => f64::from(tz.offset_from_utc_datetime(utc).fix().local_minus_utc()),
            Self::LocalMean { longitude } => longitude * SECONDS_PER_DEGREE,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Zone(tz) => tz.name().to_string(),
            Self::LocalMean { .. } => "LMT".to_string(),
        }
    }
}

/// A birth instant on every clock the chart needs.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTime {
    pub utc: NaiveDateTime,
    /// Local apparent (true solar) time.
    pub apparent: NaiveDateTime,
    /// Julian Day (UT) of `utc`.
    pub jd_ut: f64,
    /// Equation of time at birth, minutes.
    pub eot_minutes: f64,
    /// Birth instant on the zone's standard clock; `None` only when a
    /// local-mean-time birth place has no resolvable zone.
    pub standard_local: Option<NaiveDateTime>,
    pub clock: InputClock,
    pub zone_fallback: bool,
    pub warnings: Vec<Warning>,
}

impl NormalizedTime {
    /// Signed minutes from birth to another instant, read on the input clock.
    pub fn clock_minutes_until(&self, jd_ut: f64, other_utc: &NaiveDateTime) -> f64 {
        let offset_change =
            self.clock.offset_seconds(other_utc) - self.clock.offset_seconds(&self.utc);
        (jd_ut - self.jd_ut) * MINUTES_PER_DAY + offset_change / 60.0
    }
}

/// Shift a timestamp by fractional seconds.
pub(crate) fn shift_seconds(dt: &NaiveDateTime, seconds: f64) -> Result<NaiveDateTime, ChartError> {
    let nanos = (seconds * 1e9).round();
    if !nanos.is_finite() || nanos.abs() > i64::MAX as f64 {
        return Err(ChartError::InvalidInput(format!("time shift of {seconds} s")));
    }
    dt.checked_add_signed(TimeDelta::nanoseconds(nanos as i64))
        .ok_or_else(|| ChartError::InvalidInput(format!("{dt} shifted by {seconds} s")))
}

/// Resolve the birth zone, falling back to UTC with a warning.
fn resolve_zone<Z: ZoneResolver + ?Sized>(
    zones: &Z,
    latitude: f64,
    longitude: f64,
    warnings: &mut Vec<Warning>,
) -> (Tz, bool) {
    let requested = zones.zone_for(latitude, longitude);
    if let Some(tz) = requested.as_deref().and_then(|name| name.parse::<Tz>().ok()) {
        return (tz, false);
    }
    warn!(latitude, longitude, ?requested, "time zone unresolved, reading birth time as UTC");
    warnings.push(Warning::TimezoneUnresolved {
        latitude,
        longitude,
        requested,
    });
    (Tz::UTC, true)
}

/// Wall-clock reading of a UTC instant in a zone.
fn zone_wall_clock(tz: Tz, utc: &NaiveDateTime) -> NaiveDateTime {
    tz.from_utc_datetime(utc).naive_local()
}

/// Convert a zone wall-clock reading to UTC.
fn zone_local_to_utc(
    tz: Tz,
    local: &NaiveDateTime,
    warnings: &mut Vec<Warning>,
) -> Result<NaiveDateTime, ChartError> {
    match tz.from_local_datetime(local) {
        LocalResult::Single(dt) => Ok(dt.naive_utc()),
        LocalResult::Ambiguous(a, b) => {
            let earlier = if a.naive_utc() <= b.naive_utc() { a } else { b };
            warn!(%local, zone = tz.name(), "ambiguous local time, using the earlier instant");
            warnings.push(Warning::AmbiguousLocalTime {
                local: *local,
                zone: tz.name().to_string(),
            });
            Ok(earlier.naive_utc())
        }
        LocalResult::None => {
            // Gap: read the wall clock with the offset in force just before it.
            for hours in 1..=24 {
                let before_gap = local
                    .checked_sub_signed(TimeDelta::hours(hours))
                    .ok_or_else(|| ChartError::InvalidInput(format!("{local} out of range")))?;
                if let Some(before) = tz.from_local_datetime(&before_gap).earliest() {
                    let offset = before.offset().fix().local_minus_utc();
                    warn!(
                        %local,
                        zone = tz.name(),
                        "nonexistent local time, using offset before the gap"
                    );
                    warnings.push(Warning::NonexistentLocalTime {
                        local: *local,
                        zone: tz.name().to_string(),
                    });
                    return shift_seconds(local, -f64::from(offset));
                }
            }
            Err(ChartError::InvalidInput(format!(
                "{local} cannot be placed in {}",
                tz.name()
            )))
        }
    }
}

/// Place the requested civil time on the UTC and apparent-solar clocks.
pub fn normalize_time<E, Z>(
    ephemeris: &E,
    zones: &Z,
    request: &ChartRequest,
) -> Result<NormalizedTime, ChartError>
where
    E: Ephemeris + ?Sized,
    Z: ZoneResolver + ?Sized,
{
    request.validate()?;
    let local = request.date.and_time(request.time);
    let mut warnings = Vec::new();

    let (clock, utc, zone_fallback) = match request.basis {
        TimeBasis::StandardTime => {
            let (tz, fallback) =
                resolve_zone(zones, request.latitude, request.longitude, &mut warnings);
            let utc = zone_local_to_utc(tz, &local, &mut warnings)?;
            (InputClock::Zone(tz), utc, fallback)
        }
        TimeBasis::LocalMeanTime => {
            let utc = shift_seconds(&local, -request.longitude * SECONDS_PER_DEGREE)?;
            let clock = InputClock::LocalMean {
                longitude: request.longitude,
            };
            (clock, utc, false)
        }
    };

    let jd_ut = naive_to_jd(&utc);
    let eot_days = ephemeris.equation_of_time(jd_ut);
    let apparent = shift_seconds(
        &utc,
        request.longitude * SECONDS_PER_DEGREE + eot_days * SECONDS_PER_DAY,
    )?;
    let standard_local = match clock {
        InputClock::Zone(tz) => Some(zone_wall_clock(tz, &utc)),
        InputClock::LocalMean { .. } => zones
            .zone_for(request.latitude, request.longitude)
            .and_then(|name| name.parse::<Tz>().ok())
            .map(|tz| zone_wall_clock(tz, &utc)),
    };

    debug!(
        %utc,
        %apparent,
        zone = %clock.name(),
        eot_minutes = eot_days * MINUTES_PER_DAY,
        "normalized birth time"
    );
    Ok(NormalizedTime {
        utc,
        apparent,
        jd_ut,
        eot_minutes: eot_days * MINUTES_PER_DAY,
        standard_local,
        clock,
        zone_fallback,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::FixedZone;
    use chrono::{NaiveDate, NaiveTime};
    use manse_cycle::Gender;
    use manse_ephem::EphemerisError;

    /// Ephemeris with a constant equation of time.
    struct ConstantEot(f64);

    impl Ephemeris for ConstantEot {
        fn solar_longitude(&self, _jd_ut: f64) -> f64 {
            0.0
        }

        fn equation_of_time(&self, _jd_ut: f64) -> f64 {
            self.0 / MINUTES_PER_DAY
        }

        fn solar_longitude_crossing(&self, _lon: f64, start: f64) -> Result<f64, EphemerisError> {
            Ok(start)
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    fn request(basis: TimeBasis, lon: f64, local: NaiveDateTime) -> ChartRequest {
        ChartRequest::new(local.date(), local.time(), 37.5665, lon, basis, Gender::Male)
    }

    #[test]
    fn seoul_standard_time_to_utc() {
        let req = request(TimeBasis::StandardTime, 126.978, at(1990, 1, 1, 12, 0));
        let n = normalize_time(&ConstantEot(0.0), &FixedZone::new("Asia/Seoul"), &req).unwrap();
        assert_eq!(n.utc, at(1990, 1, 1, 3, 0));
        assert_eq!(n.clock.name(), "Asia/Seoul");
        assert!(n.warnings.is_empty());
        // 126.978° × 4 min = 507.912 min ahead of UTC.
        let ahead = (n.apparent - n.utc).num_milliseconds() as f64 / 60_000.0;
        assert!((ahead - 507.912).abs() < 1e-3);
    }

    #[test]
    fn equation_of_time_shifts_apparent_time() {
        let req = request(TimeBasis::LocalMeanTime, 0.0, at(2024, 11, 3, 12, 0));
        let n = normalize_time(&ConstantEot(16.0), &FixedZone::unresolved(), &req).unwrap();
        assert_eq!(n.utc, at(2024, 11, 3, 12, 0));
        assert_eq!(n.apparent, at(2024, 11, 3, 12, 16));
        assert!((n.eot_minutes - 16.0).abs() < 1e-9);
    }

    #[test]
    fn local_mean_time_ignores_zone() {
        let req = request(TimeBasis::LocalMeanTime, 120.0, at(2000, 6, 1, 8, 0));
        let n = normalize_time(&ConstantEot(0.0), &FixedZone::unresolved(), &req).unwrap();
        assert_eq!(n.utc, at(2000, 6, 1, 0, 0));
        assert_eq!(n.apparent, at(2000, 6, 1, 8, 0));
        assert_eq!(n.clock.name(), "LMT");
        assert!(n.standard_local.is_none());
        assert!(n.warnings.is_empty());
    }

    #[test]
    fn unresolved_zone_falls_back_to_utc() {
        let req = request(TimeBasis::StandardTime, 126.978, at(1990, 1, 1, 12, 0));
        let n = normalize_time(&ConstantEot(0.0), &FixedZone::new("Mars/Olympus"), &req).unwrap();
        assert_eq!(n.utc, at(1990, 1, 1, 12, 0));
        assert!(n.zone_fallback);
        assert_eq!(n.clock.name(), "UTC");
        assert!(matches!(
            n.warnings.as_slice(),
            [Warning::TimezoneUnresolved { .. }]
        ));
    }

    #[test]
    fn dst_gap_uses_offset_before_transition() {
        // 2021-03-14 02:30 does not exist in New York; EST (-5h) applies.
        let req = request(TimeBasis::StandardTime, -74.0, at(2021, 3, 14, 2, 30));
        let n = normalize_time(&ConstantEot(0.0), &FixedZone::new("America/New_York"), &req)
            .unwrap();
        assert_eq!(n.utc, at(2021, 3, 14, 7, 30));
        // The zone clock never read 02:30 that night.
        assert_eq!(n.standard_local, Some(at(2021, 3, 14, 3, 30)));
        assert!(matches!(
            n.warnings.as_slice(),
            [Warning::NonexistentLocalTime { .. }]
        ));
    }

    #[test]
    fn dst_fold_uses_earlier_instant() {
        // 2021-11-07 01:30 occurs twice in New York; EDT (-4h) comes first.
        let req = request(TimeBasis::StandardTime, -74.0, at(2021, 11, 7, 1, 30));
        let n = normalize_time(&ConstantEot(0.0), &FixedZone::new("America/New_York"), &req)
            .unwrap();
        assert_eq!(n.utc, at(2021, 11, 7, 5, 30));
        assert!(matches!(
            n.warnings.as_slice(),
            [Warning::AmbiguousLocalTime { .. }]
        ));
    }

    #[test]
    fn clock_minutes_include_offset_changes() {
        let req = request(TimeBasis::StandardTime, -74.0, at(2021, 3, 13, 12, 0));
        let n = normalize_time(&ConstantEot(0.0), &FixedZone::new("America/New_York"), &req)
            .unwrap();
        // One UTC day later the clock has sprung forward an hour.
        let later = at(2021, 3, 14, 17, 0);
        let minutes = n.clock_minutes_until(n.jd_ut + 1.0, &later);
        assert!((minutes - (1440.0 + 60.0)).abs() < 1e-6);
    }

    #[test]
    fn local_mean_time_reports_zone_clock() {
        // LMT 12:00 at 126.978°E is 03:32:05 UTC, 12:32:05 KST.
        let req = request(TimeBasis::LocalMeanTime, 126.978, at(1990, 1, 1, 12, 0));
        let n = normalize_time(&ConstantEot(0.0), &FixedZone::new("Asia/Seoul"), &req).unwrap();
        let standard = n.standard_local.unwrap();
        assert_eq!(standard - n.utc, TimeDelta::hours(9));
        assert_eq!(standard.format("%H:%M").to_string(), "12:32");
        assert_eq!(n.clock.name(), "LMT");
        assert!(n.warnings.is_empty());
    }

    #[test]
    fn fallback_zone_reports_utc_clock() {
        let req = request(TimeBasis::StandardTime, 126.978, at(1990, 1, 1, 12, 0));
        let n = normalize_time(&ConstantEot(0.0), &FixedZone::unresolved(), &req).unwrap();
        assert_eq!(n.standard_local, Some(n.utc));
    }
}
