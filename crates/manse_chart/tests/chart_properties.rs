use chrono::{Duration, NaiveDate, NaiveTime};
use manse_chart::{ChartRequest, FixedZone, TimeBasis, compute_chart};
use manse_cycle::{Gender, month_pillar_for, year_pillar_for};
use manse_ephem::SolarEphemeris;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn pillars_agree_with_their_boundaries(
        day in 0i64..36_500,
        minute in 0u32..1440,
        lon in -180.0f64..180.0,
    ) {
        let date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + Duration::days(day);
        let time = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap();
        let req = ChartRequest::new(date, time, 0.0, lon, TimeBasis::LocalMeanTime, Gender::Female);
        let result =
            compute_chart(&SolarEphemeris::default(), &FixedZone::unresolved(), &req).unwrap();
        let chart = result.chart;
        let diag = &result.diagnostics;

        prop_assert_eq!(chart.year, year_pillar_for(chart.solar_year));
        prop_assert!(diag.start_of_spring_utc <= result.utc);
        prop_assert!(diag.month_term_utc <= result.utc);
        prop_assert!(result.utc - diag.month_term_utc < Duration::days(32));

        let branch = chart.month_term.month_branch().unwrap();
        prop_assert_eq!(chart.month, month_pillar_for(chart.year.stem, branch));
        prop_assert_eq!(diag.early_rat_hour, chart.day_date != result.apparent_solar_time.date());
        prop_assert!(result.luck.is_some());
    }
}
