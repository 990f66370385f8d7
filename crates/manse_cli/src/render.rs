//! Plain-text rendering of chart results.

use std::fmt::Write;

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use manse_chart::{ChartResult, SolarTermEvent};
use manse_cycle::{AnnualPillar, PillarDetail, StemBranch, age_years_months};
use manse_geo::GeoPlace;

fn detail_line(label: &str, pillar: StemBranch, detail: &PillarDetail) -> String {
    let stem_god = detail
        .stem_ten_god
        .map_or_else(|| "Self".to_string(), |g| g.name().to_string());
    let hidden: String = detail.hidden_stems.iter().map(|s| s.hanja()).collect();
    let branch_god = detail.branch_ten_god.name();
    let stage = detail.twelve_stage.name();
    format!(
        "  {label:<6} {pillar} ({})  stem: {stem_god:<16} branch: {branch_god:<16} \
         stage: {stage:<10} hidden: {hidden}",
        pillar.korean(),
    )
}

fn format_age(age: f64) -> String {
    let (years, months) = age_years_months(age);
    format!("{years}y {months}m")
}

pub fn chart_text(result: &ChartResult) -> String {
    let mut out = String::new();
    let c = &result.chart;
    let d = &result.diagnostics;

    let _ = writeln!(
        out,
        "Four pillars (hour day month year): {} {} {} {}",
        c.hour, c.day, c.month, c.year
    );
    let _ = writeln!(out, "{}", detail_line("Year", c.year, &result.details.year));
    let _ = writeln!(out, "{}", detail_line("Month", c.month, &result.details.month));
    let _ = writeln!(out, "{}", detail_line("Day", c.day, &result.details.day));
    let _ = writeln!(out, "{}", detail_line("Hour", c.hour, &result.details.hour));
    let _ = writeln!(out);

    let fallback = if d.zone_fallback { " (fallback)" } else { "" };
    let _ = writeln!(out, "Zone:            {}{fallback}", d.zone);
    if let Some(local) = d.standard_local {
        let _ = writeln!(out, "Standard time:   {local}");
    }
    let _ = writeln!(out, "UTC:             {}", result.utc);
    let _ = writeln!(
        out,
        "Apparent solar:  {}  (EoT {:+.2} min)",
        result.apparent_solar_time, result.eot_minutes
    );
    let _ = writeln!(
        out,
        "Solar year:      {} (立春 {} UTC)",
        c.solar_year, d.start_of_spring_utc
    );
    let _ = writeln!(
        out,
        "Month term:      {} {} ({} UTC)",
        c.month_term.hanja(),
        c.month_term.name(),
        d.month_term_utc
    );
    if d.early_rat_hour {
        let _ = writeln!(out, "Day date:        {} (23:00 rule)", c.day_date);
    }
    let _ = writeln!(out, "Note:            {}", d.basis_note);

    match &result.luck {
        Some(luck) => {
            let age = luck.starting_age;
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "Luck: {} from {} {} ({} UTC), gap {:.2} days, starts at {}y {}m {}d",
                luck.direction.name(),
                luck.reference_term.term.hanja(),
                luck.reference_term.term.name(),
                luck.reference_term.utc,
                luck.gap_days().abs(),
                age.years,
                age.months,
                age.days
            );
            for p in &luck.pillars {
                let _ = writeln!(
                    out,
                    "  {:>2}. {} ({})  {} - {}",
                    p.order,
                    p.pillar,
                    p.pillar.korean(),
                    format_age(p.start_age),
                    format_age(p.end_age)
                );
            }
        }
        None => {
            let _ = writeln!(out);
            let _ = writeln!(out, "Luck: unavailable");
        }
    }

    for w in &d.warnings {
        let _ = writeln!(out, "warning: {w}");
    }
    out
}

pub fn annual_text(order: u8, rows: &[AnnualPillar]) -> String {
    let mut out = format!("Annual pillars of luck pillar #{order}\n");
    for row in rows {
        let stem_god = row.detail.stem_ten_god.map_or("-", |g| g.name());
        let _ = writeln!(
            out,
            "  {}  {} ({})  age {:<8} stem: {:<16} branch: {:<16} day-stem stage: {}",
            row.year,
            row.pillar,
            row.pillar.korean(),
            format_age(row.age),
            stem_god,
            row.detail.branch_ten_god.name(),
            row.day_stem_stage.name()
        );
    }
    out
}

pub fn terms_text(year: i32, events: &[SolarTermEvent], zone: Option<Tz>) -> String {
    let mut out = format!("Solar terms of {year}\n");
    for ev in events {
        let local = zone
            .map(|tz| format!("  {}", to_zone(ev.utc, tz)))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:>3}°  {} {:<12} {} UTC{local}",
            ev.longitude_deg,
            ev.term.hanja(),
            ev.term.name(),
            ev.utc.format("%Y-%m-%d %H:%M:%S"),
        );
    }
    out
}

pub fn to_zone(utc: NaiveDateTime, tz: Tz) -> String {
    utc.and_utc()
        .with_timezone(&tz)
        .format("%Y-%m-%d %H:%M:%S %Z")
        .to_string()
}

pub fn places_text(places: &[GeoPlace]) -> String {
    let mut out = String::new();
    for (i, p) in places.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {}  ({:.4}, {:.4})  [{}]",
            i + 1,
            p.label,
            p.latitude,
            p.longitude,
            p.source
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ages_read_as_years_and_months() {
        assert_eq!(format_age(8.34), "8y 4m");
        assert_eq!(format_age(3.0), "3y 0m");
    }

    #[test]
    fn utc_converted_to_zone() {
        let utc = chrono::NaiveDate::from_ymd_opt(2024, 2, 4)
            .unwrap()
            .and_hms_opt(8, 27, 0)
            .unwrap();
        assert_eq!(to_zone(utc, chrono_tz::Asia::Seoul), "2024-02-04 17:27:00 KST");
    }

    #[test]
    fn detail_line_keeps_columns() {
        let detail = PillarDetail {
            stem_ten_god: None,
            branch_ten_god: manse_cycle::TenGod::Peer,
            twelve_stage: manse_cycle::TwelveStage::Severance,
            hidden_stems: vec![manse_cycle::Stem::Jia],
        };
        let line = detail_line("Day", StemBranch::from_cycle_index(0), &detail);
        let stem_at = line.find("stem: ").unwrap();
        let branch_at = line.find("branch: ").unwrap();
        let stage_at = line.find("stage: ").unwrap();
        assert_eq!(branch_at - stem_at, "stem: ".len() + 17);
        assert_eq!(stage_at - branch_at, "branch: ".len() + 17);
        assert!(line.starts_with("  Day    甲子"));
        assert!(line.ends_with("hidden: 甲"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn places_are_numbered() {
        let places = vec![GeoPlace {
            label: "Seoul, South Korea".into(),
            latitude: 37.5666,
            longitude: 126.9783,
            country: None,
            city: None,
            source: "open-meteo".into(),
        }];
        assert_eq!(
            places_text(&places),
            " 1. Seoul, South Korea  (37.5666, 126.9783)  [open-meteo]\n"
        );
    }
}
