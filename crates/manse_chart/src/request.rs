//! Chart requests and their validation.

use chrono::{NaiveDate, NaiveTime};
use manse_cycle::{Gender, PolarityConvention};
use manse_time::{parse_date, parse_time_of_day};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Which clock the civil birth time was read on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeBasis {
    /// Zone standard time (DST-aware) at the birth place.
    #[default]
    #[serde(rename = "standard")]
    StandardTime,
    /// Local mean time: UTC offset by longitude × 4 min/°.
    #[serde(rename = "lmt")]
    LocalMeanTime,
}

impl TimeBasis {
    pub fn name(self) -> &'static str {
        match self {
            Self::StandardTime => "standard",
            Self::LocalMeanTime => "lmt",
        }
    }
}

impl std::str::FromStr for TimeBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "std" | "zone" => Ok(Self::StandardTime),
            "lmt" | "local-mean" | "local_mean" => Ok(Self::LocalMeanTime),
            _ => Err(format!("unknown time basis: {s} (expected standard or lmt)")),
        }
    }
}

/// Everything a chart depends on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Degrees north, [-90, 90].
    pub latitude: f64,
    /// Degrees east, [-180, 180].
    pub longitude: f64,
    pub basis: TimeBasis,
    pub gender: Gender,
    #[serde(default)]
    pub convention: PolarityConvention,
}

impl ChartRequest {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        latitude: f64,
        longitude: f64,
        basis: TimeBasis,
        gender: Gender,
    ) -> Self {
        Self {
            date,
            time,
            latitude,
            longitude,
            basis,
            gender,
            convention: PolarityConvention::default(),
        }
    }

    /// Build a request from user-entered `YYYY-MM-DD` and `HH:MM[:SS]` text.
    pub fn parse(
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
        basis: TimeBasis,
        gender: Gender,
    ) -> Result<Self, ChartError> {
        let request = Self::new(
            parse_date(date)?,
            parse_time_of_day(time)?,
            latitude,
            longitude,
            basis,
            gender,
        );
        request.validate()?;
        Ok(request)
    }

    pub fn with_convention(mut self, convention: PolarityConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::InvalidInput(format!(
                "latitude out of range: {}",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::InvalidInput(format!(
                "longitude out of range: {}",
                self.longitude
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_request() {
        let r = ChartRequest::parse(
            "1990-01-01",
            "12:00",
            37.5665,
            126.978,
            TimeBasis::StandardTime,
            Gender::Male,
        )
        .unwrap();
        assert_eq!(r.time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(r.convention, PolarityConvention::IndexParity);
    }

    #[test]
    fn malformed_time_is_invalid_input() {
        let err = ChartRequest::parse(
            "1990-01-01",
            "12h00",
            37.5,
            127.0,
            TimeBasis::StandardTime,
            Gender::Male,
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }

    #[test]
    fn coordinates_checked() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        let bad_lat =
            ChartRequest::new(date, time, 91.0, 0.0, TimeBasis::LocalMeanTime, Gender::Male);
        assert!(bad_lat.validate().is_err());
        let bad_lon =
            ChartRequest::new(date, time, 0.0, f64::NAN, TimeBasis::LocalMeanTime, Gender::Male);
        assert!(bad_lon.validate().is_err());
    }

    #[test]
    fn basis_from_str() {
        assert_eq!("LMT".parse::<TimeBasis>().unwrap(), TimeBasis::LocalMeanTime);
        assert_eq!("standard".parse::<TimeBasis>().unwrap(), TimeBasis::StandardTime);
        assert!("solar".parse::<TimeBasis>().is_err());
    }
}
